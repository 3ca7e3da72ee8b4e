//! Domain types shared across Shopwindow crates.

mod filter;
mod id;
mod product;

pub use filter::{CategoryFilter, FilterState, ParseSortOrderError, SortOrder};
pub use id::ProductId;
pub use product::{Product, Rating};
