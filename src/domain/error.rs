//! Error types for the StyleHub plugin.
//!
//! [`StyleHubError`] is the single error enum used across the crate, with a
//! [`Result`] alias for convenience. Only [`StyleHubError::LoadFailure`] ever
//! reaches the user; the remaining variants are logged where they occur.

use thiserror::Error;

/// The main error type for StyleHub operations.
///
/// # Examples
///
/// ```
/// use stylehub::StyleHubError;
///
/// let err = StyleHubError::load_failure("products", "HTTP status 503");
/// assert_eq!(err.to_string(), "failed to load products: HTTP status 503");
/// ```
#[derive(Debug, Error)]
pub enum StyleHubError {
    /// One of the startup fetches failed.
    ///
    /// Covers transport errors, non-success HTTP statuses and undecodable
    /// payloads alike. There is no distinction between transient and
    /// permanent failures.
    #[error("failed to load {resource}: {reason}")]
    LoadFailure {
        /// Which resource was being fetched (`products` or `categories`).
        resource: String,
        /// Human-readable cause.
        reason: String,
    },

    /// Reading from or writing to the key/value store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StyleHubError {
    /// Builds a [`StyleHubError::LoadFailure`].
    pub fn load_failure(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LoadFailure {
            resource: resource.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` for the user-visible load failure.
    #[must_use]
    pub const fn is_load_failure(&self) -> bool {
        matches!(self, Self::LoadFailure { .. })
    }
}

/// A specialized `Result` type for StyleHub operations.
pub type Result<T> = std::result::Result<T, StyleHubError>;
