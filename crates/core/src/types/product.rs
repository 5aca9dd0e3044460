//! Catalog product records and their write shape.
//!
//! `Product` is owned by the backend; the catalog store holds a read-mostly
//! cached copy. `ProductDraft` is the explicit body shape for create/update
//! calls - the backend assigns and owns the `id`, so the draft carries none.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A product record as returned by the backend catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Backend-assigned identifier.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Unit price in the store currency's standard unit.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image_url: Option<String>,
    pub category: String,
}

/// The write shape for product create and update calls.
///
/// Sent as the JSON body of `POST /products` and `PUT /products/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image_url: Option<String>,
    pub category: String,
}

impl From<Product> for ProductDraft {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
            category: product.category,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_numeric_price() {
        let json = r#"{
            "id": 3,
            "name": "Candle",
            "description": "Beeswax",
            "price": 12.5,
            "image_url": null,
            "category": "home"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.price, "12.5".parse().unwrap());
        assert_eq!(product.image_url, None);
    }

    #[test]
    fn test_draft_drops_id() {
        let product = Product {
            id: ProductId::new(9),
            name: "Mug".to_string(),
            description: "Ceramic".to_string(),
            price: "8".parse().unwrap(),
            image_url: Some("https://cdn.example/mug.png".to_string()),
            category: "kitchen".to_string(),
        };

        let draft = ProductDraft::from(product.clone());
        let body = serde_json::to_value(&draft).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["name"], "Mug");
        assert_eq!(draft.price, product.price);
    }
}
