//! Domain layer for the StyleHub plugin.
//!
//! Core types with no dependency on Zellij or on the storage backends.
//!
//! - [`error`]: Error types and result alias
//! - [`product`]: Product model and per-product presentation rules

pub mod error;
pub mod product;

pub use error::{Result, StyleHubError};
pub use product::{fold_case, Product, ProductId, Rating};
