//! Tangelo Store library.
//!
//! The client-side state layer of the Tangelo storefront: a shopping-cart
//! store mirrored to a local persistence slot, and a product-catalog store
//! synchronized with the backend REST API.
//!
//! The two containers are independent. The cart store talks only to its
//! injected [`cart::CartStorage`] and [`notify::Notifier`] collaborators; the
//! catalog store talks only to the backend through [`catalog::CatalogClient`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod notify;
