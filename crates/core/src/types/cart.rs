//! Cart line items.
//!
//! A `CartItem` is a cart-scoped projection of a product: the same display
//! fields plus the quantity the shopper selected. The cart store enforces
//! the one-entry-per-id invariant; this type just carries the data.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::product::Product;

/// A single line in the shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Identifier of the underlying product; unique within a cart.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image_url: Option<String>,
    pub category: String,
    /// Units of this product in the cart. Positive by construction on the
    /// add path; the store removes lines that reach zero.
    pub quantity: u32,
}

impl CartItem {
    /// Build a cart line from a catalog product and a chosen quantity.
    #[must_use]
    pub fn from_product(product: Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
            category: product.category,
            quantity,
        }
    }

    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}
