//! Storage layer for locally persisted state.
//!
//! The only persisted state is the favorites list, kept under a single key in
//! a key/value backend.
//!
//! - `backend`: [`Storage`] trait, the persistence port injected into the catalog
//! - `json`: versioned JSON document with atomic writes
//! - `memory`: in-memory backend for tests and fallback

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::Storage;
pub use json::JsonStorage;
pub use memory::MemoryStorage;

use crate::infrastructure::paths;

/// File name of the storage document inside the data directory.
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Opens the default file-backed storage, falling back to memory.
///
/// The fallback keeps the plugin usable when the host directory is not
/// writable; favorites then last only for the current session.
#[must_use]
pub fn open_default() -> Box<dyn Storage> {
    let path = paths::get_data_dir().join(STORAGE_FILE_NAME);
    match JsonStorage::new(path) {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            tracing::warn!(error = %e, "failed to open JSON storage, favorites will not persist");
            Box::new(MemoryStorage::new())
        }
    }
}
