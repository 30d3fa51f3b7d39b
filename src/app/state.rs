//! Application state and view model computation.
//!
//! [`AppState`] wraps the [`CatalogStore`] with everything that exists only for
//! the terminal UI: the grid selection, input and view modes, theme and the
//! last known viewport. The catalog owns all data; the selection is an index
//! into its derived view and is clamped whenever that view changes.
//!
//! ```
//! use stylehub::app::AppState;
//! use stylehub::catalog::CatalogStore;
//! use stylehub::storage::MemoryStorage;
//! use stylehub::ui::Theme;
//! use stylehub::Product;
//!
//! let mut state = AppState::new(CatalogStore::new(Box::new(MemoryStorage::new())), Theme::default(), 32);
//! state.catalog.load(vec![Product::new(1, "Canvas Tote", 50.0, "bags")]);
//! state.clamp_selection();
//!
//! let viewmodel = state.compute_viewmodel(30, 100);
//! assert_eq!(viewmodel.grid.cards.len(), 1);
//! ```

use super::modes::{InputMode, SearchFocus, ViewMode};
use crate::catalog::{CatalogStore, CategoryFilter, LoadState};
use crate::domain::product::display_category;
use crate::domain::Product;
use crate::ui::helpers::{match_ranges, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardInfo, DetailInfo, EmptyState, FooterInfo, GridInfo, HeaderInfo, SearchBarInfo, StatusScreen,
    TextLine, ToolbarInfo, UIViewModel,
};

/// Rows occupied by one card, borders included.
pub const CARD_HEIGHT: usize = 8;

/// Blank columns between adjacent cards.
pub const CARD_GAP: usize = 1;

pub const DEFAULT_CARD_WIDTH: usize = 32;
pub const MIN_CARD_WIDTH: usize = 20;
pub const MAX_CARD_WIDTH: usize = 60;

/// Lines a card title may wrap to.
const TITLE_LINES: usize = 2;

/// Blank line, title, subtitle, border, toolbar, border.
const TOP_CHROME_ROWS: usize = 6;
/// Border, footer, trailing blank line.
const BOTTOM_CHROME_ROWS: usize = 3;
const SEARCH_BAR_ROWS: usize = 3;

pub const BRAND_TITLE: &str = "StyleHub";
pub const BRAND_SUBTITLE: &str = "Discover Amazing Products";

/// Central application state.
#[derive(Debug)]
pub struct AppState {
    /// Product data, selections and the derived view.
    pub catalog: CatalogStore,

    /// Index of the selected card within `catalog.view()`.
    pub selected_index: usize,

    pub input_mode: InputMode,
    pub view_mode: ViewMode,
    pub theme: Theme,

    /// Card width in columns, already clamped.
    pub card_width: usize,

    rows: usize,
    cols: usize,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: CatalogStore, theme: Theme, card_width: usize) -> Self {
        Self {
            catalog,
            selected_index: 0,
            input_mode: InputMode::Normal,
            view_mode: ViewMode::Grid,
            theme,
            card_width: card_width.clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH),
            rows: 24,
            cols: 80,
        }
    }

    /// Records the terminal size used for rendering and grid navigation.
    pub fn set_viewport(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
    }

    /// Last recorded `(rows, cols)`.
    #[must_use]
    pub const fn viewport(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Cards per grid row for a terminal `cols` wide. Always at least one.
    #[must_use]
    pub const fn columns_for(&self, cols: usize) -> usize {
        let per_row = (cols + CARD_GAP) / (self.card_width + CARD_GAP);
        if per_row == 0 {
            1
        } else {
            per_row
        }
    }

    /// Cards per grid row at the current viewport.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns_for(self.cols)
    }

    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.catalog.view().get(self.selected_index)
    }

    /// Product the detail overlay shows, if open.
    #[must_use]
    pub fn detail_product(&self) -> Option<&Product> {
        match self.view_mode {
            ViewMode::Detail(id) => self.catalog.product(id),
            ViewMode::Grid => None,
        }
    }

    /// Keeps the selection inside the derived view after it changed.
    pub fn clamp_selection(&mut self) {
        let len = self.catalog.view().len();
        self.selected_index = if len == 0 { 0 } else { self.selected_index.min(len - 1) };
    }

    pub fn move_left(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.selected_index + 1 < self.catalog.view().len() {
            self.selected_index += 1;
        }
    }

    pub fn move_up(&mut self) {
        let columns = self.columns();
        if self.selected_index >= columns {
            self.selected_index -= columns;
        }
    }

    /// Moves one grid row down, landing on the last card when the next row is
    /// shorter than the current column.
    pub fn move_down(&mut self) {
        let len = self.catalog.view().len();
        if len == 0 {
            return;
        }

        let columns = self.columns();
        let current_row = self.selected_index / columns;
        let last_row = (len - 1) / columns;
        if current_row < last_row {
            self.selected_index = (self.selected_index + columns).min(len - 1);
        }
    }

    /// Opens the detail overlay for the selected card.
    ///
    /// Returns `false` when nothing is selected.
    pub fn open_detail(&mut self) -> bool {
        let Some(id) = self.selected_product().map(|product| product.id) else {
            return false;
        };
        tracing::debug!(product_id = id, "opening detail overlay");
        self.view_mode = ViewMode::Detail(id);
        true
    }

    pub fn close_detail(&mut self) {
        self.view_mode = ViewMode::Grid;
    }

    /// Selects the next (or previous) entry of `["all", ...categories]`,
    /// wrapping around.
    pub fn cycle_category(&mut self, forward: bool) {
        let options = self.catalog.category_options();
        let current = options
            .iter()
            .position(|option| option == &self.catalog.filter().category)
            .unwrap_or(0);

        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };

        if let Some(category) = options.into_iter().nth(next) {
            self.catalog.set_category(category);
            self.clamp_selection();
        }
    }

    /// Builds the view model for a `rows` by `cols` terminal.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", rows, cols).entered();

        match self.catalog.load_state() {
            LoadState::Failed { reason } => {
                return UIViewModel {
                    status: Some(StatusScreen::Error { message: reason.clone() }),
                    ..UIViewModel::default()
                };
            }
            LoadState::Loading => {
                return UIViewModel {
                    status: Some(StatusScreen::Loading { message: "Loading...".to_string() }),
                    ..UIViewModel::default()
                };
            }
            LoadState::Ready => {}
        }

        UIViewModel {
            status: None,
            header: HeaderInfo {
                title: BRAND_TITLE.to_string(),
                subtitle: BRAND_SUBTITLE.to_string(),
            },
            toolbar: self.compute_toolbar(),
            search_bar: self.compute_search_bar(),
            grid: self.compute_grid(rows, cols),
            empty_state: self.compute_empty_state(),
            detail: self.detail_product().map(|product| self.compute_detail(product)),
            footer: self.compute_footer(),
        }
    }

    /// Number of card rows that fit between the chrome.
    const fn visible_card_rows(&self, rows: usize) -> usize {
        let chrome = match self.input_mode {
            InputMode::Normal => TOP_CHROME_ROWS + BOTTOM_CHROME_ROWS,
            InputMode::Search(_) => TOP_CHROME_ROWS + BOTTOM_CHROME_ROWS + SEARCH_BAR_ROWS,
        };
        let available = rows.saturating_sub(chrome) / CARD_HEIGHT;
        if available == 0 {
            1
        } else {
            available
        }
    }

    /// Windows the grid so the selected card's row is visible, centering it
    /// where possible.
    fn compute_grid(&self, rows: usize, cols: usize) -> GridInfo {
        let view = self.catalog.view();
        let columns = self.columns_for(cols);
        let visible_rows = self.visible_card_rows(rows);
        let total_rows = (view.len() + columns - 1) / columns;

        let selected_row = self.selected_index / columns;
        let mut first_row = selected_row.saturating_sub(visible_rows / 2);
        if first_row + visible_rows > total_rows {
            first_row = total_rows.saturating_sub(visible_rows);
        }

        let start = first_row * columns;
        let end = ((first_row + visible_rows) * columns).min(view.len());

        let query = if self.input_mode.is_search() {
            self.catalog.filter().search_query.as_str()
        } else {
            ""
        };

        let cards = view[start..end]
            .iter()
            .enumerate()
            .map(|(offset, product)| self.compute_card(product, start + offset == self.selected_index, query))
            .collect();

        let position = if start == 0 && end == view.len() {
            String::new()
        } else {
            format!("Showing {}-{} of {}", start + 1, end, view.len())
        };

        GridInfo {
            cards,
            columns,
            card_width: self.card_width,
            position,
        }
    }

    fn compute_card(&self, product: &Product, is_selected: bool, query: &str) -> CardInfo {
        // Border and one space of padding on each side.
        let inner_width = self.card_width.saturating_sub(4);

        let title_lines = wrap_text(&product.title, inner_width, TITLE_LINES)
            .into_iter()
            .map(|text| TextLine {
                highlight_ranges: match_ranges(&text, query),
                text,
            })
            .collect();

        CardInfo {
            title_lines,
            price: product.display_price(),
            free_shipping: product.has_free_shipping(),
            popular: product.is_popular(),
            stars: product.filled_stars(),
            rating: format!("{} ({})", product.rating.rate, product.rating.count),
            category: product.category.clone(),
            is_favorite: self.catalog.is_favorite(product.id),
            is_selected,
        }
    }

    fn compute_detail(&self, product: &Product) -> DetailInfo {
        DetailInfo {
            title: product.title.clone(),
            price: product.display_price(),
            free_shipping: product.has_free_shipping(),
            popular: product.is_popular(),
            stars: product.filled_stars(),
            rating: format!("{} ({} reviews)", product.rating.rate, product.rating.count),
            category: product.category.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            is_favorite: self.catalog.is_favorite(product.id),
            cart_label: "Add to Cart".to_string(),
        }
    }

    fn compute_toolbar(&self) -> ToolbarInfo {
        let filter = self.catalog.filter();
        let options = self.catalog.category_options();
        let position = options
            .iter()
            .position(|option| option == &filter.category)
            .map_or_else(String::new, |index| format!(" ({}/{})", index + 1, options.len()));

        let category_label = match &filter.category {
            CategoryFilter::All => "All Categories".to_string(),
            CategoryFilter::Only(category) => display_category(category),
        };

        ToolbarInfo {
            category: format!("Category: {category_label}{position}"),
            sort: format!("Sort: {}", filter.sort_order.label()),
            favorites: format!("Favorites ({})", self.catalog.favorites().len()),
            favorites_active: filter.show_favorites_only,
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Search(focus) => Some(SearchBarInfo {
                query: self.catalog.filter().search_query.clone(),
                is_typing: focus == SearchFocus::Typing,
            }),
            InputMode::Normal => None,
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.catalog.view().is_empty() {
            return None;
        }

        let empty = if self.catalog.filter().show_favorites_only {
            EmptyState {
                message: "No products found".to_string(),
                subtitle: "You haven't added any favorites yet.".to_string(),
                action: Some("Press 'a' to Browse All Products".to_string()),
            }
        } else {
            EmptyState {
                message: "No products found".to_string(),
                subtitle: "Try adjusting your search or filter criteria.".to_string(),
                action: None,
            }
        };
        Some(empty)
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.view_mode, self.input_mode) {
            (ViewMode::Detail(_), _) => "f: favorite  Enter: add to cart  Esc/q: close",
            (ViewMode::Grid, InputMode::Search(SearchFocus::Typing)) => {
                "Type to search  Enter: results  Esc: clear search"
            }
            (ViewMode::Grid, InputMode::Search(SearchFocus::Navigating)) => {
                "h/j/k/l: move  Enter: details  f: favorite  c/C: category  s: sort  v: favorites  /: edit query  Esc: clear search"
            }
            (ViewMode::Grid, InputMode::Normal) if self.catalog.filter().show_favorites_only => {
                "h/j/k/l: move  Enter: details  f: favorite  /: search  c/C: category  s: sort  v/a: all products  q: quit"
            }
            (ViewMode::Grid, InputMode::Normal) => {
                "h/j/k/l: move  Enter: details  f: favorite  /: search  c/C: category  s: sort  v: favorites  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rating;
    use crate::storage::MemoryStorage;

    fn products(count: u64) -> Vec<Product> {
        (1..=count)
            .map(|id| {
                #[allow(clippy::cast_precision_loss)]
                let price = id as f64 * 10.0;
                Product::new(id, format!("Product {id}"), price, "misc")
            })
            .collect()
    }

    /// Three columns at 100 columns with 32-wide cards.
    fn state_with(count: u64) -> AppState {
        let mut state = AppState::new(CatalogStore::new(Box::new(MemoryStorage::new())), Theme::default(), 32);
        state.catalog.load(products(count));
        state.set_viewport(40, 100);
        state
    }

    #[test]
    fn card_width_is_clamped() {
        let catalog = CatalogStore::new(Box::new(MemoryStorage::new()));
        assert_eq!(AppState::new(catalog, Theme::default(), 5).card_width, MIN_CARD_WIDTH);
    }

    #[test]
    fn columns_fit_viewport() {
        let state = state_with(0);
        assert_eq!(state.columns(), 3);
        assert_eq!(state.columns_for(64), 1);
        assert_eq!(state.columns_for(65), 2);
        assert_eq!(state.columns_for(10), 1);
    }

    #[test]
    fn grid_navigation_stays_in_bounds() {
        let mut state = state_with(7);

        state.move_left();
        state.move_up();
        assert_eq!(state.selected_index, 0);

        state.move_right();
        state.move_down();
        assert_eq!(state.selected_index, 4);

        state.move_down();
        assert_eq!(state.selected_index, 6);

        state.move_down();
        state.move_right();
        assert_eq!(state.selected_index, 6);

        state.move_up();
        assert_eq!(state.selected_index, 3);
    }

    #[test]
    fn selection_clamps_when_view_shrinks() {
        let mut state = state_with(7);
        state.selected_index = 6;

        state.catalog.set_search_query("Product 1");
        state.clamp_selection();
        assert_eq!(state.selected_index, 0);

        state.catalog.set_search_query("nothing");
        state.clamp_selection();
        assert_eq!(state.selected_index, 0);
        assert!(state.selected_product().is_none());
    }

    #[test]
    fn category_cycle_wraps_both_ways() {
        let mut state = state_with(3);
        state.catalog.load_categories(vec!["misc".to_string(), "toys".to_string()]);

        state.cycle_category(true);
        assert_eq!(state.catalog.filter().category.as_str(), "misc");
        state.cycle_category(true);
        assert_eq!(state.catalog.filter().category.as_str(), "toys");
        state.cycle_category(true);
        assert_eq!(state.catalog.filter().category, CategoryFilter::All);

        state.cycle_category(false);
        assert_eq!(state.catalog.filter().category.as_str(), "toys");
    }

    #[test]
    fn loading_and_failure_block_the_catalog() {
        let mut state = AppState::new(CatalogStore::new(Box::new(MemoryStorage::new())), Theme::default(), 32);
        let vm = state.compute_viewmodel(40, 100);
        assert_eq!(vm.status, Some(StatusScreen::Loading { message: "Loading...".to_string() }));

        state.catalog.fail_load(&crate::StyleHubError::load_failure("products", "HTTP status 500"));
        let vm = state.compute_viewmodel(40, 100);
        assert_eq!(vm.status, Some(StatusScreen::Error { message: "HTTP status 500".to_string() }));
        assert!(vm.grid.cards.is_empty());
    }

    #[test]
    fn grid_window_keeps_selection_visible() {
        // 40 rows leave three card rows.
        let mut state = state_with(20);
        state.selected_index = 19;

        let vm = state.compute_viewmodel(40, 100);
        assert_eq!(vm.grid.cards.len(), 8);
        assert_eq!(vm.grid.cards.iter().filter(|c| c.is_selected).count(), 1);
        assert!(vm.grid.cards.last().unwrap().is_selected);
        assert_eq!(vm.grid.position, "Showing 13-20 of 20");

        state.selected_index = 0;
        let vm = state.compute_viewmodel(40, 100);
        assert!(vm.grid.cards[0].is_selected);
        assert_eq!(vm.grid.position, "Showing 1-9 of 20");
    }

    #[test]
    fn small_catalog_has_no_position_hint() {
        let state = state_with(4);
        assert!(state.compute_viewmodel(40, 100).grid.position.is_empty());
    }

    #[test]
    fn card_shows_badges_and_rating() {
        let mut state = AppState::new(CatalogStore::new(Box::new(MemoryStorage::new())), Theme::default(), 32);
        let mut product = Product::new(1, "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops Everyday Use", 109.95, "men's clothing");
        product.rating = Rating { rate: 4.5, count: 120 };
        state.catalog.load(vec![product]);
        state.catalog.toggle_favorite(1);

        let vm = state.compute_viewmodel(40, 100);
        let card = &vm.grid.cards[0];
        assert_eq!(card.price, "$109.95");
        assert!(card.free_shipping);
        assert!(card.popular);
        assert!(card.is_favorite);
        assert_eq!(card.stars, 5);
        assert_eq!(card.rating, "4.5 (120)");
        assert_eq!(card.category, "men's clothing");
        assert_eq!(card.title_lines.len(), 2);
        assert!(card.title_lines[1].text.ends_with("..."));
    }

    #[test]
    fn search_matches_are_highlighted_only_in_search_mode() {
        let mut state = state_with(3);
        state.catalog.set_search_query("duct 2");

        let vm = state.compute_viewmodel(40, 100);
        assert!(vm.grid.cards[0].title_lines[0].highlight_ranges.is_empty());

        state.input_mode = InputMode::Search(SearchFocus::Typing);
        let vm = state.compute_viewmodel(40, 100);
        assert_eq!(vm.grid.cards[0].title_lines[0].highlight_ranges, vec![(3, 9)]);
        assert_eq!(vm.search_bar.unwrap().query, "duct 2");
    }

    #[test]
    fn toolbar_reflects_selections() {
        let mut state = state_with(3);
        state.catalog.load_categories(vec!["misc".to_string(), "women's clothing".to_string()]);

        let toolbar = state.compute_viewmodel(40, 100).toolbar;
        assert_eq!(toolbar.category, "Category: All Categories (1/3)");
        assert_eq!(toolbar.sort, "Sort: Low to High");
        assert_eq!(toolbar.favorites, "Favorites (0)");
        assert!(!toolbar.favorites_active);

        state.cycle_category(false);
        state.catalog.toggle_sort_order();
        state.catalog.toggle_favorite(2);
        state.catalog.set_show_favorites_only(true);

        let toolbar = state.compute_viewmodel(40, 100).toolbar;
        assert_eq!(toolbar.category, "Category: Women's clothing (3/3)");
        assert_eq!(toolbar.sort, "Sort: High to Low");
        assert_eq!(toolbar.favorites, "Favorites (1)");
        assert!(toolbar.favorites_active);
    }

    #[test]
    fn empty_state_depends_on_favorites_view() {
        let mut state = state_with(3);
        state.catalog.set_show_favorites_only(true);

        let empty = state.compute_viewmodel(40, 100).empty_state.unwrap();
        assert_eq!(empty.message, "No products found");
        assert_eq!(empty.subtitle, "You haven't added any favorites yet.");
        assert!(empty.action.is_some());

        state.catalog.set_show_favorites_only(false);
        state.catalog.set_search_query("zzz");
        let empty = state.compute_viewmodel(40, 100).empty_state.unwrap();
        assert_eq!(empty.subtitle, "Try adjusting your search or filter criteria.");
        assert!(empty.action.is_none());
    }

    #[test]
    fn grid_footers_list_toolbar_keys() {
        let mut state = state_with(3);

        for (mode, favorites_only) in [
            (InputMode::Normal, false),
            (InputMode::Normal, true),
            (InputMode::Search(SearchFocus::Navigating), false),
        ] {
            state.input_mode = mode;
            state.catalog.set_show_favorites_only(favorites_only);

            let footer = state.compute_viewmodel(40, 100).footer.keybindings;
            for hint in ["c/C: category", "s: sort", "v"] {
                assert!(footer.contains(hint), "{mode:?} favorites_only={favorites_only}: {footer}");
            }
        }
    }

    #[test]
    fn detail_overlay_uses_review_wording() {
        let mut state = state_with(2);
        assert!(state.open_detail());

        let detail = state.compute_viewmodel(40, 100).detail.unwrap();
        assert_eq!(detail.title, "Product 1");
        assert_eq!(detail.rating, "0 (0 reviews)");
        assert_eq!(detail.cart_label, "Add to Cart");

        state.close_detail();
        assert!(state.compute_viewmodel(40, 100).detail.is_none());
    }
}
