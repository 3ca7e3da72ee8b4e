//! Remote catalog API client.
//!
//! Plain REST over `reqwest`, with an in-process `moka` cache for responses
//! (5-minute TTL). The client returns payloads verbatim: beyond serde field
//! presence there is no validation against the product model, so malformed
//! entries propagate downstream uncorrected.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use shopwindow_core::Product;

use crate::config::CatalogConfig;
use crate::error::CatalogError;

/// Cached response payloads, keyed by request path.
#[derive(Debug, Clone)]
enum CacheValue {
    Products(Vec<Product>),
    Categories(Vec<String>),
}

/// Client for the remote catalog API.
///
/// Cheaply cloneable; all clones share one connection pool and one response
/// cache.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base: String,
    cache: Cache<String, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog API client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(16)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base: config.api_base.clone(),
                cache,
            }),
        }
    }

    /// Fetch the full product collection.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on transport failure, a non-success status, or
    /// an unparseable body.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        if let Some(CacheValue::Products(products)) = self.inner.cache.get("products").await {
            debug!("Cache hit for products");
            return Ok(products);
        }

        let products: Vec<Product> = self.get_json("products").await?;
        self.inner
            .cache
            .insert(
                "products".to_string(),
                CacheValue::Products(products.clone()),
            )
            .await;
        Ok(products)
    }

    /// Fetch the category label collection.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on transport failure, a non-success status, or
    /// an unparseable body.
    #[instrument(skip(self))]
    pub async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        if let Some(CacheValue::Categories(categories)) = self.inner.cache.get("categories").await {
            debug!("Cache hit for categories");
            return Ok(categories);
        }

        let categories: Vec<String> = self.get_json("products/categories").await?;
        self.inner
            .cache
            .insert(
                "categories".to_string(),
                CacheValue::Categories(categories.clone()),
            )
            .await;
        Ok(categories)
    }

    /// Issue a GET and parse the body as JSON.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}/{path}", self.inner.base);

        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();

        // Body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                url = %url,
                body = %body.chars().take(200).collect::<String>(),
                "Catalog API returned non-success status"
            );
            return Err(CatalogError::Status(status.as_u16()));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                url = %url,
                body = %body.chars().take(200).collect::<String>(),
                "Failed to parse catalog API response"
            );
            CatalogError::Parse(e)
        })
    }
}
