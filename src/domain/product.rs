//! Product domain model.
//!
//! Products are deserialized straight from the catalog API and never mutated
//! afterwards. Presentation rules that depend only on a single product (badge
//! thresholds, star rounding) live here so the card and detail views agree.

use serde::{Deserialize, Serialize};

/// Price above which a product ships for free.
pub const FREE_SHIPPING_THRESHOLD: f64 = 100.0;

/// Rating at or above which a product is marked as popular.
pub const POPULAR_RATING_THRESHOLD: f64 = 4.5;

/// Number of stars in the rating visualization.
pub const MAX_STARS: usize = 5;

/// Unique product identifier as issued by the catalog API.
pub type ProductId = u64;

/// Lowercases `text` one character at a time.
///
/// Search filtering and match highlighting both fold with this, so a title
/// that matches always has a highlight. Characters with multi-character
/// lowercase forms (`İ` becomes `i̇`) expand in place.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Aggregate customer rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Rating {
    /// Average score between 0 and 5.
    pub rate: f64,
    /// Number of ratings the average is built from.
    pub count: u64,
}

/// A catalog entry.
///
/// The `image` field is an opaque reference (a URL for the default API); it is
/// displayed but never fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
}

impl Product {
    /// Returns `true` when the product qualifies for the free shipping badge.
    ///
    /// ```
    /// use stylehub::Product;
    ///
    /// let mut product = Product::new(1, "Backpack", 109.95, "men's clothing");
    /// assert!(product.has_free_shipping());
    /// product.price = 100.0;
    /// assert!(!product.has_free_shipping());
    /// ```
    #[must_use]
    pub fn has_free_shipping(&self) -> bool {
        self.price > FREE_SHIPPING_THRESHOLD
    }

    /// Returns `true` when the product carries the "Popular" badge.
    #[must_use]
    pub fn is_popular(&self) -> bool {
        self.rating.rate >= POPULAR_RATING_THRESHOLD
    }

    /// Number of filled stars, rounding the rate to the nearest integer.
    ///
    /// Halves round up, and the result is clamped to `0..=5`.
    #[must_use]
    pub fn filled_stars(&self) -> usize {
        let rounded = self.rating.rate.max(0.0).round();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let stars = rounded as usize;
        stars.min(MAX_STARS)
    }

    /// Price formatted with a dollar sign and two decimals.
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Case-insensitive substring test against the title, using [`fold_case`]
    /// on both sides.
    ///
    /// An empty query matches every product.
    #[must_use]
    pub fn title_matches(&self, query: &str) -> bool {
        query.is_empty() || fold_case(&self.title).contains(&fold_case(query))
    }

    /// Convenience constructor used by tests and examples.
    #[must_use]
    pub fn new(id: ProductId, title: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            description: String::new(),
            category: category.into(),
            image: String::new(),
            rating: Rating::default(),
        }
    }
}

/// Capitalizes the first character of a category label for display.
///
/// ```
/// use stylehub::domain::product::display_category;
///
/// assert_eq!(display_category("jewelery"), "Jewelery");
/// assert_eq!(display_category(""), "");
/// ```
#[must_use]
pub fn display_category(category: &str) -> String {
    let mut chars = category.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
