//! Core types for Tangelo.
//!
//! This module provides the domain shapes the state containers operate on.

pub mod cart;
pub mod event;
pub mod id;
pub mod product;

pub use cart::CartItem;
pub use event::{LoosePrice, ProductEventData, ProductUpdateEvent};
pub use id::*;
pub use product::{Product, ProductDraft};
