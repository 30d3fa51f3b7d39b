//! Top-level rendering.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → Canvas → stdout
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout at the state's recorded viewport.
///
/// Does not clear the screen; Zellij hands the plugin a fresh pane each frame.
pub fn render(state: &AppState) {
    let (rows, cols) = state.viewport();
    print!("{}", render_to_string(state, rows, cols));
}

/// Renders one frame into a string of ANSI output.
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let mut canvas = Canvas::new();
    render_viewmodel(&mut canvas, &viewmodel, &state.theme, rows, cols);
    canvas.into_string()
}

fn render_viewmodel(canvas: &mut Canvas, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(status) = &vm.status {
        components::render_status(canvas, status, theme, rows, cols);
        return;
    }

    components::render_catalog(canvas, vm, theme, rows, cols);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event};
    use crate::catalog::CatalogStore;
    use crate::domain::{Product, Rating};
    use crate::storage::MemoryStorage;
    use crate::ui::helpers::strip_ansi;

    fn state() -> AppState {
        AppState::new(CatalogStore::new(Box::new(MemoryStorage::new())), Theme::default(), 32)
    }

    fn backpack() -> Product {
        let mut product = Product::new(1, "Fjallraven Foldsack Backpack", 109.95, "men's clothing");
        product.description = "Your perfect pack for everyday use and walks in the forest.".to_string();
        product.image = "https://fakestoreapi.com/img/81fPKd-2AYL.jpg".to_string();
        product.rating = Rating { rate: 3.9, count: 120 };
        product
    }

    #[test]
    fn loading_screen() {
        let screen = strip_ansi(&render_to_string(&state(), 24, 80));
        assert!(screen.contains("Loading..."));
        assert!(!screen.contains("StyleHub"));
    }

    #[test]
    fn error_screen_replaces_catalog() {
        let mut state = state();
        state.catalog.load(vec![backpack()]);
        state.catalog.fail_load(&crate::StyleHubError::load_failure("categories", "HTTP status 404"));

        let screen = strip_ansi(&render_to_string(&state, 24, 80));
        assert!(screen.contains("Error: HTTP status 404"));
        assert!(!screen.contains("Backpack"));
    }

    #[test]
    fn catalog_screen_shows_cards_and_chrome() {
        let mut state = state();
        state.catalog.load(vec![backpack()]);

        let screen = strip_ansi(&render_to_string(&state, 30, 100));
        for expected in [
            "StyleHub",
            "Discover Amazing Products",
            "Category: All Categories (1/1)",
            "Sort: Low to High",
            "Favorites (0)",
            "Fjallraven Foldsack",
            "$109.95",
            "Free Shipping",
            "★★★★☆ 3.9 (120)",
            "[men's clothing]",
        ] {
            assert!(screen.contains(expected), "missing {expected:?}");
        }
        assert!(!screen.contains("Popular"));
    }

    #[test]
    fn detail_overlay_is_drawn_over_grid() {
        let mut state = state();
        state.catalog.load(vec![backpack()]);
        handle_event(&mut state, &Event::OpenDetail).unwrap();
        handle_event(&mut state, &Event::ToggleFavorite).unwrap();

        let screen = strip_ansi(&render_to_string(&state, 40, 100));
        assert!(screen.contains("3.9 (120 reviews)"));
        assert!(screen.contains("Your perfect pack"));
        assert!(screen.contains("Image: https://fakestoreapi.com/img/81fPKd-2AYL.jpg"));
        assert!(screen.contains("[ Add to Cart ]"));
        assert!(screen.contains("♥ Favorited"));
    }

    #[test]
    fn empty_favorites_view_offers_browse_all() {
        let mut state = state();
        state.catalog.load(vec![backpack()]);
        handle_event(&mut state, &Event::ToggleFavoritesView).unwrap();

        let screen = strip_ansi(&render_to_string(&state, 30, 100));
        assert!(screen.contains("No products found"));
        assert!(screen.contains("You haven't added any favorites yet."));
        assert!(screen.contains("Browse All Products"));
    }

    #[test]
    fn search_bar_shows_query() {
        let mut state = state();
        state.catalog.load(vec![backpack()]);
        for event in [Event::SearchMode, Event::Char('p'), Event::Char('a')] {
            handle_event(&mut state, &event).unwrap();
        }

        let screen = strip_ansi(&render_to_string(&state, 30, 100));
        assert!(screen.contains("Search: pa"));
        assert!(screen.contains("Fjallraven Foldsack"));
    }
}
