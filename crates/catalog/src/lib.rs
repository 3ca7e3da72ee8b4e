//! Shopwindow Catalog - Application library for the catalog browser.
//!
//! # Architecture
//!
//! - [`client`] - HTTP client for the remote catalog API (`reqwest` + `moka`
//!   response cache)
//! - [`store`] - Persistent key-value binding backing the favorites set
//! - [`session`] - Session controller: load state, filter state, favorites,
//!   and the view projection consumed by a front end
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Catalog error taxonomy
//!
//! The session owns all mutable state and applies the pure pipeline from
//! `shopwindow-core` on every view projection. There is exactly one writer
//! per session; no locking discipline is needed.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod store;

pub use client::CatalogClient;
pub use config::{CatalogConfig, ConfigError};
pub use error::CatalogError;
pub use session::{Catalog, CatalogView, LoadState, ProductCard, Session};
pub use store::PersistentSlot;
