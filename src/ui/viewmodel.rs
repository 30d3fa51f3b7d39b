//! View model types representing renderable UI state.
//!
//! View models are computed by [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! and consumed by the renderer. They hold display-ready strings and flags
//! only; every catalog rule (badges, star rounding, filtering) has already
//! been applied.

/// Complete UI view model for one frame.
#[derive(Debug, Clone, Default)]
pub struct UIViewModel {
    /// Full-screen status that replaces everything else when set.
    pub status: Option<StatusScreen>,

    pub header: HeaderInfo,
    pub toolbar: ToolbarInfo,

    /// Present while in search mode.
    pub search_bar: Option<SearchBarInfo>,

    pub grid: GridInfo,

    /// Shown instead of the grid when the derived view is empty.
    pub empty_state: Option<EmptyState>,

    /// Detail overlay drawn on top of the grid.
    pub detail: Option<DetailInfo>,

    pub footer: FooterInfo,
}

/// Screens that block the catalog entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusScreen {
    /// Waiting for the product list.
    Loading { message: String },
    /// Terminal load failure. There is no retry affordance.
    Error { message: String },
}

#[derive(Debug, Clone, Default)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
}

/// Toolbar labels for the category, sort and favorites controls.
#[derive(Debug, Clone, Default)]
pub struct ToolbarInfo {
    /// e.g. `"Category: Jewelery (3/5)"`.
    pub category: String,
    /// e.g. `"Sort: Low to High"`.
    pub sort: String,
    /// e.g. `"Favorites (2)"`.
    pub favorites: String,
    /// Whether the favorites-only view is active.
    pub favorites_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SearchBarInfo {
    pub query: String,
    /// `true` while characters edit the query.
    pub is_typing: bool,
}

/// Visible window of the card grid.
#[derive(Debug, Clone, Default)]
pub struct GridInfo {
    /// Cards in row-major order.
    pub cards: Vec<CardInfo>,
    pub columns: usize,
    pub card_width: usize,
    /// e.g. `"Showing 1-6 of 20"`, empty when everything fits.
    pub position: String,
}

/// One product card.
#[derive(Debug, Clone, Default)]
pub struct CardInfo {
    /// Title wrapped to at most two lines.
    pub title_lines: Vec<TextLine>,
    pub price: String,
    pub free_shipping: bool,
    pub popular: bool,
    /// Filled stars out of five.
    pub stars: usize,
    /// e.g. `"3.9 (120)"`.
    pub rating: String,
    pub category: String,
    pub is_favorite: bool,
    pub is_selected: bool,
}

/// A line of text with search match ranges.
///
/// Ranges are `(start, end)` character indices with an exclusive end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Empty grid message.
#[derive(Debug, Clone, Default)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
    /// Extra call to action, e.g. the browse-all key in favorites-only view.
    pub action: Option<String>,
}

/// Detail overlay contents.
#[derive(Debug, Clone, Default)]
pub struct DetailInfo {
    pub title: String,
    pub price: String,
    pub free_shipping: bool,
    pub popular: bool,
    pub stars: usize,
    /// e.g. `"3.9 (120 reviews)"`.
    pub rating: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub is_favorite: bool,
    /// Label of the placeholder purchase control.
    pub cart_label: String,
}

#[derive(Debug, Clone, Default)]
pub struct FooterInfo {
    /// Keybinding hints for the current mode.
    pub keybindings: String,
}
