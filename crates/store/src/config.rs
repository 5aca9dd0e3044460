//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `TANGELO_API_BASE_URL` - API root the catalog client talks to
//!   (e.g., <http://127.0.0.1:8000/api>)
//!
//! ## Optional
//! - `TANGELO_CART_PATH` - File path of the cart persistence slot
//!   (default: cart.json)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// State-layer configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// API root; the catalog client appends `/products`.
    pub api_base_url: Url,
    /// File path of the persisted cart slot.
    pub cart_path: PathBuf,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = get_required_env("TANGELO_API_BASE_URL")?
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("TANGELO_API_BASE_URL".to_string(), e.to_string())
            })?;
        let cart_path = PathBuf::from(get_env_or_default("TANGELO_CART_PATH", "cart.json"));

        Ok(Self {
            api_base_url,
            cart_path,
        })
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
