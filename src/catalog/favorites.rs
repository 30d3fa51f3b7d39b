//! Persisted favorites set.

use crate::domain::error::{Result, StyleHubError};
use crate::domain::ProductId;
use crate::storage::Storage;
use std::collections::BTreeSet;

/// Storage key holding the JSON-encoded list of favorite ids.
pub const FAVORITES_KEY: &str = "favorites";

/// Set of product ids the user has marked as favorite.
///
/// Only [`toggle`](Self::toggle) mutates the set. Iteration order is by id and
/// carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FavoriteSet {
    ids: BTreeSet<ProductId>,
}

impl FavoriteSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it if present.
    ///
    /// Returns `true` when `id` is a favorite after the call. Calling it twice
    /// with the same id leaves the set unchanged.
    ///
    /// ```
    /// use stylehub::catalog::FavoriteSet;
    ///
    /// let mut favorites = FavoriteSet::new();
    /// assert!(favorites.toggle(3));
    /// assert_eq!(favorites.ids(), vec![3]);
    /// assert!(!favorites.toggle(3));
    /// assert!(favorites.is_empty());
    /// ```
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<ProductId> {
        self.ids.iter().copied().collect()
    }

    /// Reads the set from `storage`.
    ///
    /// A missing key yields an empty set. An unreadable backend or a value
    /// that is not a JSON list of ids is logged and also yields an empty set,
    /// since a broken favorites entry must not block the catalog.
    #[must_use]
    pub fn restore(storage: &dyn Storage) -> Self {
        match Self::try_restore(storage) {
            Ok(favorites) => {
                tracing::debug!(count = favorites.len(), "favorites restored");
                favorites
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to restore favorites, starting empty");
                Self::default()
            }
        }
    }

    fn try_restore(storage: &dyn Storage) -> Result<Self> {
        let Some(raw) = storage.get(FAVORITES_KEY)? else {
            return Ok(Self::default());
        };

        let ids: Vec<ProductId> = serde_json::from_str(&raw)
            .map_err(|e| StyleHubError::Storage(format!("invalid favorites value: {e}")))?;

        Ok(Self {
            ids: ids.into_iter().collect(),
        })
    }

    /// Writes the set to `storage` as a JSON list of ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    pub fn persist(&self, storage: &mut dyn Storage) -> Result<()> {
        let encoded = serde_json::to_string(&self.ids())
            .map_err(|e| StyleHubError::Storage(format!("failed to encode favorites: {e}")))?;
        storage.set(FAVORITES_KEY, &encoded)
    }
}

impl FromIterator<ProductId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut favorites: FavoriteSet = [1, 4].into_iter().collect();
        let before = favorites.clone();

        favorites.toggle(9);
        favorites.toggle(9);
        assert_eq!(favorites, before);

        favorites.toggle(4);
        favorites.toggle(4);
        assert_eq!(favorites, before);
    }

    #[test]
    fn persist_then_restore() {
        let mut storage = MemoryStorage::new();
        let favorites: FavoriteSet = [7, 2].into_iter().collect();

        favorites.persist(&mut storage).unwrap();

        assert_eq!(storage.get(FAVORITES_KEY).unwrap().as_deref(), Some("[2,7]"));
        assert_eq!(FavoriteSet::restore(&storage), favorites);
    }

    #[test]
    fn missing_key_restores_empty() {
        assert!(FavoriteSet::restore(&MemoryStorage::new()).is_empty());
    }

    #[test]
    fn malformed_value_restores_empty() {
        let storage = MemoryStorage::with_entry(FAVORITES_KEY, r#"{"ids": "nope"}"#);
        assert!(FavoriteSet::restore(&storage).is_empty());
    }

    #[test]
    fn duplicate_ids_in_storage_collapse() {
        let storage = MemoryStorage::with_entry(FAVORITES_KEY, "[5,5,1]");
        assert_eq!(FavoriteSet::restore(&storage).ids(), vec![1, 5]);
    }
}
