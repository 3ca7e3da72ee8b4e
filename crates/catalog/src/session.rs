//! Session controller: load state, filter state, favorites, and the view
//! projection.
//!
//! The session is the single owner of all mutable browsing state. Updates
//! flow one way: a user intent mutates the session, then the front end asks
//! for a fresh [`CatalogView`]. The view is a pure projection - it applies
//! `filter_products` then `sort_products` over the loaded snapshot and
//! evaluates the recommendation badge against the full-catalog average
//! computed once per snapshot, so the badge never shifts with filtering or
//! sorting.
//!
//! Retry is modeled as an explicit state reset plus a re-run of the load
//! sequence: the loading state reappears, then either a fresh snapshot or a
//! new error. A retried load that fetches different data re-derives the
//! recommendation baseline from the new snapshot.

use std::collections::BTreeSet;

use tracing::{error, info};

use shopwindow_core::pipeline::{average_price, filter_products, is_recommended, sort_products};
use shopwindow_core::{CategoryFilter, FilterState, Product, ProductId, SortOrder};

use crate::client::CatalogClient;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::store::PersistentSlot;

/// Storage key for the persisted favorite set.
pub const FAVORITES_KEY: &str = "favorites";

/// One loaded catalog snapshot with its pinned recommendation baseline.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Full product collection, in source order.
    pub products: Vec<Product>,
    /// Category labels offered by the remote service.
    pub categories: Vec<String>,
    avg_price: f64,
}

impl Catalog {
    /// Build a snapshot, deriving the average price over the full collection.
    #[must_use]
    pub fn new(products: Vec<Product>, categories: Vec<String>) -> Self {
        let avg_price = average_price(&products);
        Self {
            products,
            categories,
            avg_price,
        }
    }

    /// Mean price over the unfiltered snapshot.
    #[must_use]
    pub const fn average_price(&self) -> f64 {
        self.avg_price
    }
}

/// Load lifecycle of the catalog snapshot.
#[derive(Debug, Clone)]
pub enum LoadState {
    /// Fetches are in flight (or not yet started).
    Loading,
    /// Both fetches succeeded.
    Ready(Catalog),
    /// Either fetch failed; carries the human-readable message.
    Failed(String),
}

/// One product as the front end should render it.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub product: Product,
    /// Whether the product is in the user's favorite set.
    pub favorite: bool,
    /// Derived badge: rating above 4 or price below the catalog average.
    pub recommended: bool,
}

/// Everything the front end needs to draw the listing.
#[derive(Debug, Clone)]
pub struct CatalogView {
    /// Filtered and sorted cards, ready for display.
    pub cards: Vec<ProductCard>,
    /// Category labels for the filter control.
    pub categories: Vec<String>,
    /// Number of cards shown after filtering.
    pub shown: usize,
    /// Total products in the snapshot.
    pub total: usize,
    /// Size of the favorite set.
    pub favorites: usize,
}

/// Session controller owning all browsing state.
pub struct Session {
    state: LoadState,
    filter: FilterState,
    favorites: PersistentSlot<BTreeSet<ProductId>>,
}

impl Session {
    /// Create a session with an empty filter state and the favorites slot
    /// re-hydrated from the state directory.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let favorites = PersistentSlot::open(&config.state_dir, FAVORITES_KEY, BTreeSet::new());

        Self {
            state: LoadState::Loading,
            filter: FilterState::default(),
            favorites,
        }
    }

    /// Current load state.
    #[must_use]
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    /// Current filter state.
    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Fetch products and categories concurrently and transition to
    /// `Ready` or `Failed`.
    ///
    /// Either fetch failing fails the whole load; partial results are
    /// discarded and no partial catalog is ever exposed.
    pub async fn load(&mut self, client: &CatalogClient) {
        self.state = LoadState::Loading;

        let result = tokio::try_join!(client.fetch_products(), client.fetch_categories());
        self.finish_load(result);
    }

    /// Discard the current state and re-run the full load sequence.
    pub async fn retry(&mut self, client: &CatalogClient) {
        info!("Retrying catalog load");
        self.load(client).await;
    }

    fn finish_load(&mut self, result: Result<(Vec<Product>, Vec<String>), CatalogError>) {
        self.state = match result {
            Ok((products, categories)) => {
                info!(
                    products = products.len(),
                    categories = categories.len(),
                    "Catalog loaded"
                );
                LoadState::Ready(Catalog::new(products, categories))
            }
            Err(e) => {
                error!(error = %e, "Catalog load failed");
                LoadState::Failed(e.to_string())
            }
        };
    }

    /// Replace the search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    /// Replace the category selector.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.selected_category = category;
    }

    /// Replace the sort order.
    pub const fn set_sort_order(&mut self, sort_order: SortOrder) {
        self.filter.sort_order = sort_order;
    }

    /// Reset the search term and category selector.
    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    /// Toggle a product in the favorite set, writing the set through to
    /// storage. Returns whether the product is a favorite afterwards.
    pub fn toggle_favorite(&mut self, id: ProductId) -> bool {
        let mut now_favorite = false;
        self.favorites.update(|favorites| {
            if !favorites.remove(&id) {
                favorites.insert(id);
                now_favorite = true;
            }
        });
        now_favorite
    }

    /// Whether a product is currently a favorite.
    #[must_use]
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites.get().contains(&id)
    }

    /// Project the displayed listing from the loaded snapshot.
    ///
    /// Returns `None` while loading or after a failed load. Filtering runs
    /// before sorting; recommendation uses the snapshot's pinned average.
    #[must_use]
    pub fn view(&self) -> Option<CatalogView> {
        let LoadState::Ready(catalog) = &self.state else {
            return None;
        };

        let filtered = filter_products(
            &catalog.products,
            &self.filter.search_term,
            &self.filter.selected_category,
        );
        let displayed = sort_products(&filtered, self.filter.sort_order);

        let avg_price = catalog.average_price();
        let cards: Vec<ProductCard> = displayed
            .into_iter()
            .map(|product| {
                let favorite = self.is_favorite(product.id);
                let recommended = is_recommended(&product, avg_price);
                ProductCard {
                    product,
                    favorite,
                    recommended,
                }
            })
            .collect();

        Some(CatalogView {
            shown: cards.len(),
            total: catalog.products.len(),
            favorites: self.favorites.get().len(),
            categories: catalog.categories.clone(),
            cards,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopwindow_core::Rating;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};

    static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    fn temp_config() -> CatalogConfig {
        let state_dir = std::env::temp_dir().join(format!(
            "shopwindow-session-test-{}-{}",
            std::process::id(),
            DIR_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        CatalogConfig {
            api_base: "http://127.0.0.1:0".to_string(),
            state_dir,
        }
    }

    fn product(id: u64, title: &str, price: f64, category: &str, rate: f64) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price,
            category: category.to_string(),
            image: String::new(),
            rating: Rating { rate, count: 1 },
        }
    }

    fn ready_session() -> Session {
        let mut session = Session::new(&temp_config());
        session.finish_load(Ok((
            vec![
                product(1, "Blue Shirt", 10.0, "clothing", 3.0),
                product(2, "Gold Ring", 90.0, "jewelery", 4.5),
                product(3, "Red Shirt", 20.0, "clothing", 2.0),
            ],
            vec!["clothing".to_string(), "jewelery".to_string()],
        )));
        session
    }

    #[test]
    fn test_view_none_while_loading() {
        let session = Session::new(&temp_config());
        assert!(matches!(session.state(), LoadState::Loading));
        assert!(session.view().is_none());
    }

    #[test]
    fn test_failed_load_carries_message_and_no_partial_catalog() {
        let mut session = Session::new(&temp_config());
        session.finish_load(Err(CatalogError::Status(500)));

        match session.state() {
            LoadState::Failed(message) => assert_eq!(message, "HTTP error! status: 500"),
            other => panic!("expected Failed, got {other:?}"),
        }
        assert!(session.view().is_none());
    }

    #[test]
    fn test_view_summary_counts() {
        let mut session = ready_session();
        session.set_search_term("shirt");

        let view = session.view().expect("ready");
        assert_eq!(view.shown, 2);
        assert_eq!(view.total, 3);
        assert_eq!(view.favorites, 0);
        assert_eq!(view.categories, vec!["clothing", "jewelery"]);
    }

    #[test]
    fn test_view_filters_before_sorting() {
        let mut session = ready_session();
        session.set_search_term("shirt");
        session.set_sort_order(SortOrder::Desc);

        let view = session.view().expect("ready");
        let ids: Vec<_> = view.cards.iter().map(|c| c.product.id.as_u64()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_recommendation_pinned_to_full_catalog_average() {
        // Average over the full snapshot is 40. Product 3 (price 20) stays
        // recommended even when filtering hides the expensive product that
        // pulls the average up.
        let mut session = ready_session();
        session.set_search_term("red");

        let view = session.view().expect("ready");
        assert_eq!(view.cards.len(), 1);
        let card = view.cards.first().expect("one card");
        assert_eq!(card.product.id.as_u64(), 3);
        assert!(card.recommended);
    }

    #[test]
    fn test_recommendation_branches() {
        let session = ready_session();
        let view = session.view().expect("ready");

        let by_id = |id: u64| {
            view.cards
                .iter()
                .find(|c| c.product.id.as_u64() == id)
                .expect("card present")
        };

        // price 10 < avg 40
        assert!(by_id(1).recommended);
        // rate 4.5 > 4 despite price 90 > avg
        assert!(by_id(2).recommended);
        // price 20 < avg 40
        assert!(by_id(3).recommended);
    }

    #[test]
    fn test_toggle_favorite_twice_restores_membership() {
        let mut session = ready_session();
        let id = ProductId::new(2);

        assert!(session.toggle_favorite(id));
        assert!(session.is_favorite(id));
        assert_eq!(session.view().expect("ready").favorites, 1);

        assert!(!session.toggle_favorite(id));
        assert!(!session.is_favorite(id));
        assert_eq!(session.view().expect("ready").favorites, 0);
    }

    #[test]
    fn test_favorites_survive_session_restart() {
        let config = temp_config();

        let mut session = Session::new(&config);
        session.toggle_favorite(ProductId::new(7));

        let fresh = Session::new(&config);
        assert!(fresh.is_favorite(ProductId::new(7)));
    }

    #[test]
    fn test_clear_filters_resets_search_and_category() {
        let mut session = ready_session();
        session.set_search_term("shirt");
        session.set_category(CategoryFilter::Category("clothing".to_string()));
        session.set_sort_order(SortOrder::Asc);

        session.clear_filters();

        let view = session.view().expect("ready");
        assert_eq!(view.shown, 3);
        assert_eq!(session.filter().sort_order, SortOrder::Asc);
    }
}
