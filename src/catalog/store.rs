//! Catalog store: base data, selections and the derived view.
//!
//! [`CatalogStore`] owns the fetched products and categories, the current
//! [`FilterState`], the [`FavoriteSet`] and the derived view. Every mutation
//! that can change the view ends with a full rebuild through [`derive_view`];
//! nothing edits the view in place.
//!
//! # Example
//!
//! ```
//! use stylehub::catalog::{CatalogStore, SortOrder};
//! use stylehub::storage::MemoryStorage;
//! use stylehub::Product;
//!
//! let mut store = CatalogStore::new(Box::new(MemoryStorage::new()));
//! store.load(vec![
//!     Product::new(1, "Canvas Tote", 50.0, "bags"),
//!     Product::new(2, "Leather Boots", 150.0, "shoes"),
//! ]);
//!
//! assert_eq!(store.toggle_sort_order(), SortOrder::Descending);
//! let ids: Vec<u64> = store.view().iter().map(|p| p.id).collect();
//! assert_eq!(ids, vec![2, 1]);
//! ```

use super::favorites::FavoriteSet;
use super::filter::{CategoryFilter, FilterState, SortOrder};
use crate::domain::{Product, ProductId, StyleHubError};
use crate::storage::Storage;
use std::fmt;

/// Progress of the two startup fetches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Waiting for the product list.
    #[default]
    Loading,
    /// Products have arrived; the catalog is browsable.
    Ready,
    /// A fetch failed. Terminal: later results are ignored.
    Failed {
        /// Message shown on the blocking error screen.
        reason: String,
    },
}

/// Builds the derived view from base data and selections.
///
/// Keeps the products that satisfy all three predicates (title substring,
/// category equality, favorite membership) and orders them by price. The sort
/// is stable, so equal prices keep fetch order in both directions.
#[must_use]
pub fn derive_view(products: &[Product], filter: &FilterState, favorites: &FavoriteSet) -> Vec<Product> {
    let mut view: Vec<Product> = products
        .iter()
        .filter(|product| product.title_matches(&filter.search_query))
        .filter(|product| filter.category.matches(&product.category))
        .filter(|product| !filter.show_favorites_only || favorites.contains(product.id))
        .cloned()
        .collect();

    view.sort_by(|a, b| filter.sort_order.compare(a, b));
    view
}

/// The catalog state container.
///
/// Favorites are restored from the injected [`Storage`] at construction and
/// written back synchronously on every toggle.
pub struct CatalogStore {
    products: Vec<Product>,
    categories: Vec<String>,
    filter: FilterState,
    favorites: FavoriteSet,
    view: Vec<Product>,
    load_state: LoadState,
    storage: Box<dyn Storage>,
}

impl CatalogStore {
    /// Creates an empty store in [`LoadState::Loading`], restoring favorites
    /// from `storage`.
    #[must_use]
    pub fn new(storage: Box<dyn Storage>) -> Self {
        let favorites = FavoriteSet::restore(storage.as_ref());
        tracing::debug!(
            backend = storage.backend_name(),
            favorites = favorites.len(),
            "catalog store created"
        );

        Self {
            products: Vec::new(),
            categories: Vec::new(),
            filter: FilterState::default(),
            favorites,
            view: Vec::new(),
            load_state: LoadState::Loading,
            storage,
        }
    }

    /// Replaces the full product list.
    ///
    /// Ignored once the store has failed; a failure is never recovered.
    pub fn load(&mut self, products: Vec<Product>) {
        if self.is_failed() {
            tracing::debug!(count = products.len(), "ignoring products after load failure");
            return;
        }

        tracing::debug!(count = products.len(), "products loaded");
        self.products = products;
        self.load_state = LoadState::Ready;
        self.recompute();
    }

    /// Stores the independently fetched category list.
    ///
    /// The list is not checked against product categories; a category with
    /// no products simply yields an empty view.
    pub fn load_categories(&mut self, categories: Vec<String>) {
        if self.is_failed() {
            tracing::debug!(count = categories.len(), "ignoring categories after load failure");
            return;
        }

        tracing::debug!(count = categories.len(), "categories loaded");
        self.categories = categories;
    }

    /// Enters the terminal failure state.
    ///
    /// The failing resource is only logged; products and categories failures
    /// produce the same state. The first failure wins.
    pub fn fail_load(&mut self, error: &StyleHubError) {
        if self.is_failed() {
            tracing::debug!(error = %error, "additional load failure ignored");
            return;
        }

        let reason = match error {
            StyleHubError::LoadFailure { resource, reason } => {
                tracing::error!(resource = %resource, reason = %reason, "catalog load failed");
                reason.clone()
            }
            other => {
                tracing::error!(error = %other, "catalog load failed");
                other.to_string()
            }
        };

        self.load_state = LoadState::Failed { reason };
    }

    pub fn set_search_query(&mut self, query: &str) {
        if self.filter.search_query == query {
            return;
        }
        self.filter.search_query = query.to_string();
        self.recompute();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        tracing::debug!(category = %category, "category selected");
        self.filter.category = category;
        self.recompute();
    }

    /// Flips the price order and returns the new one.
    ///
    /// Not idempotent: two calls restore the previous ordering.
    pub fn toggle_sort_order(&mut self) -> SortOrder {
        self.filter.sort_order = self.filter.sort_order.toggled();
        tracing::debug!(sort_order = ?self.filter.sort_order, "sort order toggled");
        self.recompute();
        self.filter.sort_order
    }

    pub fn set_show_favorites_only(&mut self, enabled: bool) {
        self.filter.show_favorites_only = enabled;
        self.recompute();
    }

    /// Toggles `id` in the favorites set and persists the result.
    ///
    /// Returns `true` when `id` is a favorite afterwards. A persistence error
    /// is logged and does not undo the in-memory change.
    pub fn toggle_favorite(&mut self, id: ProductId) -> bool {
        let is_favorite = self.favorites.toggle(id);
        tracing::debug!(product_id = id, is_favorite, "favorite toggled");

        if let Err(e) = self.favorites.persist(self.storage.as_mut()) {
            tracing::warn!(error = %e, backend = self.storage.backend_name(), "failed to persist favorites");
        }

        self.recompute();
        is_favorite
    }

    #[must_use]
    pub fn view(&self) -> &[Product] {
        &self.view
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Selectable categories: the `"all"` sentinel followed by the fetched list.
    #[must_use]
    pub fn category_options(&self) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(self.categories.iter().map(|c| CategoryFilter::parse(c)))
            .collect()
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub const fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    #[must_use]
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites.contains(id)
    }

    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.load_state, LoadState::Failed { .. })
    }

    fn recompute(&mut self) {
        let _span = tracing::debug_span!("derive_view",
            total_products = self.products.len(),
            query_len = self.filter.search_query.len(),
            category = %self.filter.category,
            favorites_only = self.filter.show_favorites_only,
            sort_order = ?self.filter.sort_order
        ).entered();

        self.view = derive_view(&self.products, &self.filter, &self.favorites);

        tracing::debug!(view_count = self.view.len(), "view derived");
    }
}

impl fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogStore")
            .field("products", &self.products.len())
            .field("categories", &self.categories)
            .field("filter", &self.filter)
            .field("favorites", &self.favorites)
            .field("view", &self.view.len())
            .field("load_state", &self.load_state)
            .field("storage", &self.storage.backend_name())
            .finish()
    }
}
