//! Tangelo Store smoke binary.
//!
//! Loads configuration, hydrates the cart from its persistence slot, and
//! pulls the catalog once from the configured backend. Useful for verifying
//! a deployment's wiring without a UI attached.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tangelo_store::cart::{CartStore, FileStorage};
use tangelo_store::catalog::{CatalogClient, CatalogStore};
use tangelo_store::config::StoreConfig;
use tangelo_store::notify::TracingNotifier;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StoreConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tangelo_store=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(api = %config.api_base_url, cart = %config.cart_path.display(), "configuration loaded");

    // Hydrate the cart from its slot
    let storage = FileStorage::new(config.cart_path.clone());
    let mut cart = CartStore::new(Box::new(storage), Arc::new(TracingNotifier));
    cart.load();
    tracing::info!(
        lines = cart.items().len(),
        units = cart.item_count(),
        subtotal = %cart.subtotal(),
        "cart hydrated"
    );

    // Pull the catalog once
    let client = CatalogClient::new(&config.api_base_url);
    let mut catalog = CatalogStore::new(client);
    catalog.fetch_products().await;
    catalog.fetch_categories().await;
    tracing::info!(
        products = catalog.products().len(),
        categories = catalog.categories().len(),
        "catalog synchronized"
    );
}
