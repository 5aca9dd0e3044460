//! Product catalog store.
//!
//! Holds a read-mostly cached copy of the backend catalog: the product list
//! and the category labels. Both are populated exclusively by fetching;
//! every write is forwarded to the backend and followed by a full re-fetch
//! in place of optimistic local patching.
//!
//! Operations are async and take `&mut self` - nothing runs in parallel
//! with itself, and the last response to land wins.

mod client;

pub use client::{CatalogClient, CatalogError};

use tangelo_core::{Product, ProductDraft, ProductId, ProductUpdateEvent};

/// Synthetic catch-all label prepended to every category list.
pub const ALL_CATEGORY: &str = "all";

/// The product-catalog state container.
pub struct CatalogStore {
    client: CatalogClient,
    products: Vec<Product>,
    categories: Vec<String>,
}

impl CatalogStore {
    /// Create an empty store backed by the given client.
    #[must_use]
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            products: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Replace the product list with the backend's full list.
    ///
    /// On failure the error is logged and the cached list is left
    /// unchanged.
    pub async fn fetch_products(&mut self) {
        match self.client.list_products().await {
            Ok(products) => self.products = products,
            Err(error) => {
                tracing::error!(%error, "failed to fetch products, keeping cached list");
            }
        }
    }

    /// Replace the category list with `["all", ...server labels]`.
    ///
    /// On failure the error is logged and the list resets to the catch-all
    /// alone, regardless of prior state.
    pub async fn fetch_categories(&mut self) {
        match self.client.list_categories().await {
            Ok(server) => {
                let mut categories = Vec::with_capacity(server.len() + 1);
                categories.push(ALL_CATEGORY.to_string());
                categories.extend(server);
                self.categories = categories;
            }
            Err(error) => {
                tracing::error!(%error, "failed to fetch categories, resetting to catch-all");
                self.categories = vec![ALL_CATEGORY.to_string()];
            }
        }
    }

    /// Create a product on the backend, then resynchronize.
    ///
    /// # Errors
    ///
    /// Propagates the client error; the list is not refreshed on failure.
    pub async fn create_product(&mut self, draft: ProductDraft) -> Result<(), CatalogError> {
        self.client.create(&draft).await?;
        self.fetch_products().await;
        Ok(())
    }

    /// Replace a product on the backend, then resynchronize.
    ///
    /// # Errors
    ///
    /// Propagates the client error; the list is not refreshed on failure.
    pub async fn update_product(
        &mut self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<(), CatalogError> {
        self.client.update(id, &draft).await?;
        self.fetch_products().await;
        Ok(())
    }

    /// Delete a product on the backend, then resynchronize.
    ///
    /// # Errors
    ///
    /// Propagates the client error; the list is not refreshed on failure.
    pub async fn delete_product(&mut self, id: ProductId) -> Result<(), CatalogError> {
        self.client.delete(id).await?;
        self.fetch_products().await;
        Ok(())
    }

    /// Normalize a loose editor event and run it through the update path.
    ///
    /// # Errors
    ///
    /// Propagates the client error; the list is not refreshed on failure.
    pub async fn update_product_by_event(
        &mut self,
        event: ProductUpdateEvent,
    ) -> Result<(), CatalogError> {
        let (id, draft) = event.into_update();
        self.update_product(id, draft).await
    }

    /// The cached product list.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The cached category labels, catch-all first.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use url::Url;

    use super::*;

    /// A base URL nothing listens on; every request fails at the transport
    /// level. Success paths are covered by the integration suite.
    fn dead_client() -> CatalogClient {
        let base: Url = "http://127.0.0.1:9/api".parse().unwrap();
        CatalogClient::new(&base)
    }

    fn sample_product() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Candle".to_string(),
            description: "Beeswax".to_string(),
            price: "12.5".parse().unwrap(),
            image_url: None,
            category: "home".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_products_failure_keeps_cached_list() {
        let mut store = CatalogStore::new(dead_client());
        store.products = vec![sample_product()];

        store.fetch_products().await;

        assert_eq!(store.products().len(), 1);
        assert_eq!(store.products()[0].name, "Candle");
    }

    #[tokio::test]
    async fn test_fetch_categories_failure_resets_to_catch_all() {
        let mut store = CatalogStore::new(dead_client());
        store.categories = vec![
            "all".to_string(),
            "home".to_string(),
            "kitchen".to_string(),
        ];

        store.fetch_categories().await;

        assert_eq!(store.categories(), ["all".to_string()].as_slice());
    }

    #[tokio::test]
    async fn test_create_failure_propagates_and_skips_refresh() {
        let mut store = CatalogStore::new(dead_client());
        store.products = vec![sample_product()];

        let result = store
            .create_product(ProductDraft::from(sample_product()))
            .await;

        assert!(matches!(result, Err(CatalogError::Http(_))));
        assert_eq!(store.products().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_failure_propagates() {
        let mut store = CatalogStore::new(dead_client());
        let result = store.delete_product(ProductId::new(1)).await;
        assert!(matches!(result, Err(CatalogError::Http(_))));
    }
}
