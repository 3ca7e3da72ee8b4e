//! Catalog configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOPWINDOW_API_BASE` - Base URL of the remote catalog API
//!   (default: `https://fakestoreapi.com`)
//! - `SHOPWINDOW_STATE_DIR` - Directory for persistent state such as the
//!   favorites file (default: `$HOME/.shopwindow`, or `.shopwindow` when
//!   `$HOME` is unset)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default remote catalog API base.
pub const DEFAULT_API_BASE: &str = "https://fakestoreapi.com";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Catalog application configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the remote catalog API, without a trailing slash.
    pub api_base: String,
    /// Directory holding persistent state slots.
    pub state_dir: PathBuf,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `SHOPWINDOW_API_BASE` is set but is not a
    /// valid absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base = get_env_or_default("SHOPWINDOW_API_BASE", DEFAULT_API_BASE);
        let api_base = validate_api_base(&api_base)
            .map_err(|e| ConfigError::InvalidEnvVar("SHOPWINDOW_API_BASE".to_string(), e))?;

        let state_dir = std::env::var("SHOPWINDOW_STATE_DIR")
            .map_or_else(|_| default_state_dir(), PathBuf::from);

        Ok(Self {
            api_base,
            state_dir,
        })
    }

    /// Override the API base, e.g. from a command-line flag.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `base` is not a valid absolute URL.
    pub fn with_api_base(mut self, base: &str) -> Result<Self, ConfigError> {
        self.api_base = validate_api_base(base)
            .map_err(|e| ConfigError::InvalidEnvVar("--base-url".to_string(), e))?;
        Ok(self)
    }
}

/// Validate and normalize an API base URL (no trailing slash).
fn validate_api_base(base: &str) -> Result<String, String> {
    let url = Url::parse(base).map_err(|e| e.to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme {:?}", url.scheme()));
    }
    Ok(base.trim_end_matches('/').to_string())
}

/// Default state directory: `$HOME/.shopwindow`, falling back to a relative
/// `.shopwindow` when `$HOME` is unset.
fn default_state_dir() -> PathBuf {
    std::env::var("HOME").map_or_else(
        |_| PathBuf::from(".shopwindow"),
        |home| PathBuf::from(home).join(".shopwindow"),
    )
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
