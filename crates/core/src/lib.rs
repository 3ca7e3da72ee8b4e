//! Shopwindow Core - Shared types and the catalog data pipeline.
//!
//! This crate provides the common types used across all Shopwindow components:
//! - `catalog` - Remote catalog client, favorites persistence, session state
//! - `cli` - Interactive terminal browser
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no filesystem access. This keeps it lightweight and allows the
//! data pipeline to be tested without any external collaborators.
//!
//! # Modules
//!
//! - [`types`] - Product, rating, and filter-state types
//! - [`pipeline`] - Pure filter/sort/average/recommendation functions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pipeline;
pub mod types;

pub use types::*;
