//! Transient filter, category, and sort selections for a browsing session.
//!
//! [`FilterState`] is session-scoped and never persisted. It is reset on
//! explicit user action only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category selector: either the whole catalog or one exact category label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Match every category.
    #[default]
    All,
    /// Match products whose category equals this label exactly.
    Category(String),
}

impl CategoryFilter {
    /// Whether a product category label passes this filter.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(label) => label == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Category(label) => write!(f, "{label}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Category(s.to_string()))
        }
    }
}

/// Price sort order for the displayed product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Keep the catalog's original order.
    #[default]
    None,
    /// Ascending by price, ties keep input order.
    Asc,
    /// Descending by price, ties keep input order.
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Error parsing a [`SortOrder`] from user input.
#[derive(Debug, thiserror::Error)]
#[error("invalid sort order {0:?} (expected none, asc, or desc)")]
pub struct ParseSortOrderError(String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ParseSortOrderError(s.to_string())),
        }
    }
}

/// Session-scoped search, category, and sort selection.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Case-insensitive substring query against product titles.
    pub search_term: String,
    /// Category selector.
    pub selected_category: CategoryFilter,
    /// Price sort order.
    pub sort_order: SortOrder,
}

impl FilterState {
    /// Reset the search term and category selector.
    ///
    /// The sort order is deliberately left in place: clearing filters widens
    /// the result set, it does not reorder it.
    pub fn clear(&mut self) {
        self.search_term.clear();
        self.selected_category = CategoryFilter::All;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter_all_matches_everything() {
        assert!(CategoryFilter::All.matches("electronics"));
        assert!(CategoryFilter::All.matches(""));
    }

    #[test]
    fn test_category_filter_exact_match() {
        let filter = CategoryFilter::Category("jewelery".to_string());
        assert!(filter.matches("jewelery"));
        assert!(!filter.matches("electronics"));
        // Exact match, not case-insensitive
        assert!(!filter.matches("Jewelery"));
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!(
            "all".parse::<CategoryFilter>().expect("infallible"),
            CategoryFilter::All
        );
        assert_eq!(
            "ALL".parse::<CategoryFilter>().expect("infallible"),
            CategoryFilter::All
        );
        assert_eq!(
            "electronics".parse::<CategoryFilter>().expect("infallible"),
            CategoryFilter::Category("electronics".to_string())
        );
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("none".parse::<SortOrder>().expect("valid"), SortOrder::None);
        assert_eq!("asc".parse::<SortOrder>().expect("valid"), SortOrder::Asc);
        assert_eq!("DESC".parse::<SortOrder>().expect("valid"), SortOrder::Desc);
        assert!("price".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_filter_state_clear_keeps_sort_order() {
        let mut state = FilterState {
            search_term: "shirt".to_string(),
            selected_category: CategoryFilter::Category("men's clothing".to_string()),
            sort_order: SortOrder::Desc,
        };

        state.clear();

        assert!(state.search_term.is_empty());
        assert_eq!(state.selected_category, CategoryFilter::All);
        assert_eq!(state.sort_order, SortOrder::Desc);
    }
}
