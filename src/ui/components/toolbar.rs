//! Category, sort and favorites controls.

use crate::ui::helpers::{Canvas, Span};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ToolbarInfo;

const SEPARATOR: &str = "  │  ";

/// Renders the toolbar on one line.
///
/// ```text
///  Category: Jewelery (2/5)  │  Sort: Low to High  │  ♥ Favorites (3)
/// ```
pub fn render_toolbar(canvas: &mut Canvas, row: usize, toolbar: &ToolbarInfo, theme: &Theme, cols: usize) -> usize {
    let colors = &theme.colors;
    let favorites = if toolbar.favorites_active {
        Span::bold(format!("♥ {}", toolbar.favorites), &colors.toolbar_active_fg)
    } else {
        Span::new(format!("♡ {}", toolbar.favorites), &colors.text_normal)
    };

    canvas.move_to(row, 1);
    canvas.push_spans(
        &[
            Span::new(" ", &colors.text_normal),
            Span::new(toolbar.category.as_str(), &colors.category_fg),
            Span::new(SEPARATOR, &colors.border),
            Span::new(toolbar.sort.as_str(), &colors.text_normal),
            Span::new(SEPARATOR, &colors.border),
            favorites,
        ],
        cols,
    );
    row + 1
}
