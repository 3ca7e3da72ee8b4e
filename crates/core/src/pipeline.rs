//! Pure catalog transformation functions.
//!
//! The controller composes these in a fixed order: compute the average over
//! the full unfiltered snapshot once, then filter, then sort. Recommendation
//! is evaluated per product against the full-catalog average so the badge is
//! stable across filter and sort changes.
//!
//! None of these functions mutate their input.

use crate::types::{CategoryFilter, Product, SortOrder};

/// Filter products by a case-insensitive title substring and a category
/// selector.
///
/// An empty `search_term` matches every title. Input order is preserved.
#[must_use]
pub fn filter_products(
    products: &[Product],
    search_term: &str,
    category: &CategoryFilter,
) -> Vec<Product> {
    let needle = search_term.to_lowercase();

    products
        .iter()
        .filter(|product| {
            product.title.to_lowercase().contains(&needle) && category.matches(&product.category)
        })
        .cloned()
        .collect()
}

/// Sort products by price, returning a new sequence.
///
/// `SortOrder::None` returns a copy in the original order. `Asc` and `Desc`
/// sort stably, so price ties keep their relative input order.
#[must_use]
pub fn sort_products(products: &[Product], sort_order: SortOrder) -> Vec<Product> {
    let mut sorted = products.to_vec();

    match sort_order {
        SortOrder::None => {}
        SortOrder::Asc => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::Desc => sorted.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    sorted
}

/// Arithmetic mean price across a product list.
///
/// Returns exactly `0.0` for an empty list, never NaN.
#[must_use]
pub fn average_price(products: &[Product]) -> f64 {
    if products.is_empty() {
        return 0.0;
    }

    let total: f64 = products.iter().map(|product| product.price).sum();
    #[allow(clippy::cast_precision_loss)] // Catalog sizes never exceed f64 precision
    let count = products.len() as f64;
    total / count
}

/// Whether a product earns the "recommended" badge.
///
/// True iff its rating exceeds 4 or its price is below `avg_price`, where
/// `avg_price` is the mean over the full unfiltered catalog.
#[must_use]
pub fn is_recommended(product: &Product, avg_price: f64) -> bool {
    product.rating.rate > 4.0 || product.price < avg_price
}
