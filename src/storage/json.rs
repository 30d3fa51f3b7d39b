//! JSON file-based storage backend.
//!
//! All keys live in one human-readable document that is loaded once and
//! rewritten in full on every `set`. Writes go to a temporary file that is then
//! renamed over the target, so a crash never leaves a truncated document.

use crate::domain::error::{Result, StyleHubError};
use crate::storage::backend::Storage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// Top-level document serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    version: u32,

    #[serde(default)]
    entries: BTreeMap<String, String>,

    /// Unix timestamp of the last successful write.
    #[serde(default)]
    updated_at: Option<i64>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            entries: BTreeMap::new(),
            updated_at: None,
        }
    }
}

/// JSON file storage backend.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "favorites": "[1,5,14]"
///   },
///   "updated_at": 1760880000
/// }
/// ```
///
/// Values are opaque strings; the favorites list is itself JSON-encoded by
/// [`FavoriteSet::persist`](crate::catalog::FavoriteSet::persist).
#[derive(Debug)]
pub struct JsonStorage {
    file_path: PathBuf,
    data: StorageData,
}

impl JsonStorage {
    /// Opens the document at `file_path`, creating parent directories.
    ///
    /// A missing file starts an empty store; nothing is written until the
    /// first `set`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, the file
    /// cannot be read, or its contents are not a valid storage document.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use stylehub::storage::{JsonStorage, Storage};
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonStorage::new(PathBuf::from("/tmp/stylehub/storage.json"))?;
    /// let favorites = storage.get("favorites")?;
    /// # Ok::<(), stylehub::StyleHubError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no storage document yet, starting empty");
            StorageData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "storage initialized");

        Ok(Self { file_path, data })
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| StyleHubError::Storage(format!("failed to parse JSON: {e}")))?;

        if data.version > FORMAT_VERSION {
            return Err(StyleHubError::Storage(format!(
                "unsupported storage version {} (expected <= {FORMAT_VERSION})",
                data.version
            )));
        }

        tracing::debug!(
            version = data.version,
            entries = data.entries.len(),
            "loaded storage data"
        );

        Ok(data)
    }

    fn save_to_file(&mut self) -> Result<()> {
        let _span = tracing::debug_span!("json_save", path = ?self.file_path).entered();

        self.data.updated_at = Some(chrono::Utc::now().timestamp());

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| StyleHubError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("storage saved");
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set", key = %key, value_len = value.len()).entered();

        if self.data.entries.get(key).is_some_and(|current| current == value) {
            tracing::trace!("value unchanged, skipping write");
            return Ok(());
        }

        self.data.entries.insert(key.to_string(), value.to_string());
        self.save_to_file()
    }

    fn backend_name(&self) -> &'static str {
        "json"
    }
}
