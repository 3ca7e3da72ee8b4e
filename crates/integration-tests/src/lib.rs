//! Shared fixtures for Shopwindow integration tests.
//!
//! Provides an in-process mock of the remote catalog API (an `axum` router
//! bound to an ephemeral port) plus canned Fake Store payloads and per-test
//! state directories.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::Router;

use shopwindow_catalog::CatalogConfig;

/// Canned `/products` payload in the Fake Store shape.
///
/// Average price is 456.8225. The backpack and shirt are recommended by
/// price, the bracelet by rating (4.6), and the monitor (999.99, rate 2.2)
/// not at all. Tests rely on these exact numbers.
#[must_use]
pub fn products_json() -> &'static str {
    r#"[
        {
            "id": 1,
            "title": "Fjallraven Foldsack Backpack",
            "price": 110.0,
            "category": "men's clothing",
            "image": "https://example.com/1.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": 2,
            "title": "Mens Casual T-Shirt",
            "price": 22.3,
            "category": "men's clothing",
            "image": "https://example.com/2.jpg",
            "rating": { "rate": 4.1, "count": 259 }
        },
        {
            "id": 3,
            "title": "Gold Chain Bracelet",
            "price": 695.0,
            "category": "jewelery",
            "image": "https://example.com/3.jpg",
            "rating": { "rate": 4.6, "count": 400 }
        },
        {
            "id": 4,
            "title": "UltraWide Gaming Monitor",
            "price": 999.99,
            "category": "electronics",
            "image": "https://example.com/4.jpg",
            "rating": { "rate": 2.2, "count": 140 }
        }
    ]"#
}

/// Canned `/products/categories` payload.
#[must_use]
pub fn categories_json() -> &'static str {
    r#"["men's clothing", "jewelery", "electronics"]"#
}

/// Serve a router on an ephemeral local port; returns the base URL.
///
/// The server task runs until the test process exits.
///
/// # Panics
///
/// Panics if the listener cannot bind, which fails the calling test.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock catalog server");
    let addr = listener.local_addr().expect("mock server local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock server");
    });

    format!("http://{addr}")
}

static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

/// A fresh state directory for one test, isolated from every other test.
#[must_use]
pub fn temp_state_dir() -> PathBuf {
    std::env::temp_dir().join(format!(
        "shopwindow-it-{}-{}",
        std::process::id(),
        DIR_SEQ.fetch_add(1, Ordering::Relaxed)
    ))
}

/// Build a config pointing at a mock server base URL.
#[must_use]
pub fn test_config(api_base: &str) -> CatalogConfig {
    CatalogConfig {
        api_base: api_base.trim_end_matches('/').to_string(),
        state_dir: temp_state_dir(),
    }
}
