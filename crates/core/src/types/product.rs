//! Product and rating types matching the remote catalog payload.
//!
//! These deserialize the remote JSON verbatim. No shape validation beyond
//! serde field presence is performed; out-of-range values (negative prices,
//! ratings above 5) propagate downstream uncorrected.

use serde::{Deserialize, Serialize};

use super::ProductId;

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier within one fetched snapshot.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Non-negative price in the catalog's currency unit.
    pub price: f64,
    /// Category label, drawn from an externally-defined set.
    pub category: String,
    /// URI of the display asset.
    pub image: String,
    /// Aggregate review rating.
    pub rating: Rating,
}

/// Aggregate review rating for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating value in `[0, 5]`.
    pub rate: f64,
    /// Total number of reviews.
    pub count: u64,
}
