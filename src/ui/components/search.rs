//! Search input box.

use crate::ui::helpers::{text_width, truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin around the box.
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the three-line search box, returning the next free row.
///
/// ```text
///      ┌──────────────────────────┐
///      │ Search: shirt▏           │
///      └──────────────────────────┘
/// ```
///
/// The cursor mark is only drawn while typing.
pub fn render_search_bar(canvas: &mut Canvas, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = &theme.colors.search_bar_border;

    canvas.move_to(row, 1);
    canvas.spaces(SEARCH_BOX_MARGIN);
    canvas.fg(border);
    canvas.push(&format!("┌{}┐", "─".repeat(inner_width)));
    canvas.reset();

    let cursor = if search.is_typing { "▏" } else { "" };
    let search_text = truncate(&format!(" Search: {}{cursor}", search.query), inner_width);

    canvas.move_to(row + 1, 1);
    canvas.spaces(SEARCH_BOX_MARGIN);
    canvas.fg(border);
    canvas.push("│");
    canvas.fg(&theme.colors.text_normal);
    canvas.push(&search_text);
    canvas.spaces(inner_width.saturating_sub(text_width(&search_text)));
    canvas.fg(border);
    canvas.push("│");
    canvas.reset();

    canvas.move_to(row + 2, 1);
    canvas.spaces(SEARCH_BOX_MARGIN);
    canvas.fg(border);
    canvas.push(&format!("└{}┘", "─".repeat(inner_width)));
    canvas.reset();

    row + 3
}
