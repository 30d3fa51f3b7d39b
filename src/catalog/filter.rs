//! Filter and sort selections.
//!
//! [`FilterState`] carries every user selection that shapes the derived view.
//! The three predicates are independent and always AND-combined; there are no
//! mutually exclusive modes.

use crate::domain::Product;
use std::fmt;

/// Sentinel category value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// Price ordering of the derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Cheapest first.
    #[default]
    Ascending,
    /// Most expensive first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Toolbar label for the order.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Low to High",
            Self::Descending => "High to Low",
        }
    }

    /// Compares two products by price in this order.
    ///
    /// Uses a total order on `f64` so the comparison never panics; equal prices
    /// compare equal, which lets a stable sort keep fetch order for ties.
    #[must_use]
    pub fn compare(self, a: &Product, b: &Product) -> std::cmp::Ordering {
        match self {
            Self::Ascending => a.price.total_cmp(&b.price),
            Self::Descending => b.price.total_cmp(&a.price),
        }
    }
}

/// Selected category.
///
/// Parsed from the raw option string so the `"all"` sentinel can never collide
/// with a real category comparison.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parses an option string; `"all"` maps to [`CategoryFilter::All`].
    ///
    /// ```
    /// use stylehub::catalog::CategoryFilter;
    ///
    /// assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
    /// assert_eq!(
    ///     CategoryFilter::parse("jewelery"),
    ///     CategoryFilter::Only("jewelery".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(raw.to_string())
        }
    }

    /// Raw option value, `"all"` for the sentinel.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }

    /// Exact, case-sensitive match against a product category.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All selections that shape the derived view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search_query: String,
    pub category: CategoryFilter,
    pub show_favorites_only: bool,
    pub sort_order: SortOrder,
}
