//! Tangelo Core - Shared types library.
//!
//! This crate provides the domain types shared across the Tangelo state
//! layer:
//! - `store` - Cart and catalog state containers
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Cart items, products, write drafts, and typed IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
