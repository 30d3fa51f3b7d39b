//! Input and view mode state types.
//!
//! The grid is always in one of two input modes:
//! - **Normal**: grid navigation and catalog commands
//! - **Search**: editing the query, or navigating results with the query kept
//!
//! Independently, the view is either the card grid or the detail overlay for
//! one product. While the overlay is open it captures all input.
//!
//! ```
//! use stylehub::app::modes::{InputMode, SearchFocus, ViewMode};
//!
//! let input_mode = InputMode::Search(SearchFocus::Typing);
//! assert!(input_mode.is_search());
//! assert_eq!(ViewMode::default(), ViewMode::Grid);
//! ```

use crate::domain::ProductId;

/// Focus within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Characters edit the query and the view updates live.
    Typing,

    /// The query is kept and grid keys move the selection.
    Navigating,
}

/// Current input handling mode for the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search(SearchFocus),
}

impl InputMode {
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search(_))
    }
}

/// What occupies the body of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Card grid over the derived view.
    #[default]
    Grid,

    /// Detail overlay for one product, drawn on top of the grid.
    Detail(ProductId),
}
