//! Typed REST client for the backend product resource.
//!
//! All endpoints live under `{api_base_url}/products`. Read endpoints return
//! typed records; write endpoints are used for success/failure only, so
//! their response bodies are discarded.

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;
use url::Url;

use tangelo_core::{Product, ProductDraft, ProductId};

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (transport level).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to decode a response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Client for the catalog REST API.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    products_url: String,
}

/// Wrapper for the categories endpoint response.
#[derive(Debug, Deserialize)]
struct CategoriesResponse {
    data: Vec<String>,
}

impl CatalogClient {
    /// Create a new catalog client rooted at `api_base_url`.
    #[must_use]
    pub fn new(api_base_url: &Url) -> Self {
        let products_url = format!(
            "{}/products",
            api_base_url.as_str().trim_end_matches('/')
        );

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                products_url,
            }),
        }
    }

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API responds with a
    /// non-success status, or the body does not decode as a product array.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .inner
            .client
            .get(self.inner.products_url.as_str())
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }

    /// Fetch the category labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API responds with a
    /// non-success status, or the body lacks the `data` array.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<String>, CatalogError> {
        let url = format!("{}/categories", self.inner.products_url);

        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: CategoriesResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(body.data)
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API responds with a
    /// non-success status.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: &ProductDraft) -> Result<(), CatalogError> {
        let response = self
            .inner
            .client
            .post(self.inner.products_url.as_str())
            .json(draft)
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// Replace the product with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API responds with a
    /// non-success status.
    #[instrument(skip(self, draft), fields(product_id = %id))]
    pub async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<(), CatalogError> {
        let url = format!("{}/{id}", self.inner.products_url);

        let response = self.inner.client.put(&url).json(draft).send().await?;

        Self::check_status(response).await
    }

    /// Delete the product with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API responds with a
    /// non-success status.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete(&self, id: ProductId) -> Result<(), CatalogError> {
        let url = format!("{}/{id}", self.inner.products_url);

        let response = self.inner.client.delete(&url).send().await?;

        Self::check_status(response).await
    }

    /// Map a write response to success or an `Api` error.
    async fn check_status(response: reqwest::Response) -> Result<(), CatalogError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response.text().await.unwrap_or_default();
        Err(CatalogError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_products_url_with_and_without_trailing_slash() {
        let base: Url = "http://127.0.0.1:8000/api".parse().unwrap();
        let client = CatalogClient::new(&base);
        assert_eq!(
            client.inner.products_url,
            "http://127.0.0.1:8000/api/products"
        );

        let base: Url = "http://127.0.0.1:8000/api/".parse().unwrap();
        let client = CatalogClient::new(&base);
        assert_eq!(
            client.inner.products_url,
            "http://127.0.0.1:8000/api/products"
        );
    }

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 500 - boom");
    }
}
