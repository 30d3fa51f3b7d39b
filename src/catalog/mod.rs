//! Catalog store: filtering, sorting and favorites.
//!
//! - [`filter`]: sort order, category selection and the combined filter state
//! - [`favorites`]: the persisted favorites set
//! - [`store`]: [`CatalogStore`] and the pure [`derive_view`] function

pub mod favorites;
pub mod filter;
pub mod store;

pub use favorites::{FavoriteSet, FAVORITES_KEY};
pub use filter::{CategoryFilter, FilterState, SortOrder, ALL_CATEGORIES};
pub use store::{derive_view, CatalogStore, LoadState};
