//! Typed adapter for loosely-shaped product editor events.
//!
//! Editor widgets emit a payload whose `price` may arrive as a JSON number
//! or as a numeric string, and whose optional fields may be missing
//! entirely. `ProductUpdateEvent` gives that payload an explicit shape at
//! the boundary and normalizes it into a `ProductDraft`.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::id::ProductId;
use super::product::ProductDraft;

/// A product update event as emitted by an editor component.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductUpdateEvent {
    pub data: ProductEventData,
}

/// The payload of a product update event.
///
/// Every field except `id` tolerates being absent.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductEventData {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Number or numeric string; anything else coerces to zero.
    #[serde(default)]
    pub price: Option<LoosePrice>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A price value that may arrive as a number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LoosePrice {
    Number(f64),
    Text(String),
}

impl LoosePrice {
    /// Coerce to a decimal, defaulting to zero when unparsable.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        match self {
            Self::Number(n) => Decimal::from_f64_retain(*n).unwrap_or_default(),
            Self::Text(s) => s.trim().parse().unwrap_or_default(),
        }
    }
}

impl ProductUpdateEvent {
    /// Normalize the event into the id and draft for the update call.
    #[must_use]
    pub fn into_update(self) -> (ProductId, ProductDraft) {
        let data = self.data;
        let price = data.price.map_or_else(Decimal::default, |p| p.to_decimal());
        (
            data.id,
            ProductDraft {
                name: data.name,
                description: data.description,
                price,
                image_url: data.image_url,
                category: data.category,
            },
        )
    }
}
