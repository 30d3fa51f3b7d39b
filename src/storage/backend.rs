//! Key/value persistence port.
//!
//! The catalog never touches files directly; it receives a boxed [`Storage`]
//! at construction. The trait mirrors browser-style local storage: string keys
//! mapped to string values, read once at startup and rewritten on change.

use crate::domain::error::Result;

/// Abstraction over persistent key/value backends.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): versioned JSON file with atomic writes
/// - [`MemoryStorage`](crate::storage::MemoryStorage): process-local map, used in tests
///   and as a fallback when the data directory is unavailable
///
/// # Examples
///
/// ```
/// use stylehub::storage::{MemoryStorage, Storage};
///
/// let mut storage = MemoryStorage::new();
/// storage.set("favorites", "[1,3]")?;
/// assert_eq!(storage.get("favorites")?.as_deref(), Some("[1,3]"));
/// # Ok::<(), stylehub::StyleHubError>(())
/// ```
pub trait Storage: Send {
    /// Returns the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Short backend name for logs.
    fn backend_name(&self) -> &'static str;
}
