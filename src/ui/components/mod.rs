//! Screen components.
//!
//! Each component draws one part of the screen into a [`Canvas`] and returns
//! the next free row where that matters.
//!
//! ```text
//! [blank line]
//! [Header: title + subtitle]
//! [Border]
//! [Toolbar]
//! [Border]
//! [Search bar, 3 lines, search mode only]
//! [Card grid or empty state]
//! [Border with window position]
//! [Footer]
//! ```
//!
//! The detail overlay is drawn last, on top of the grid. Loading and error
//! screens replace the whole layout.

mod detail;
mod empty;
mod footer;
mod grid;
mod header;
mod search;
mod status;
mod toolbar;

pub use status::render_status;

use crate::ui::helpers::{text_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use grid::render_grid;
use header::render_header;
use search::render_search_bar;
use toolbar::render_toolbar;

/// Renders a horizontal rule, with `label` right-aligned in it when given.
fn render_border(canvas: &mut Canvas, row: usize, color: &str, label: &str, cols: usize) -> usize {
    canvas.move_to(row, 1);
    canvas.fg(color);
    if label.is_empty() || text_width(label) + 4 > cols {
        canvas.push(&"─".repeat(cols));
    } else {
        let label = format!(" {label} ");
        let tail = 2;
        canvas.push(&"─".repeat(cols - text_width(&label) - tail));
        canvas.push(&label);
        canvas.push(&"─".repeat(tail));
    }
    canvas.reset();
    row + 1
}

/// Renders the catalog layout: chrome, grid or empty state, and the detail
/// overlay when open.
pub fn render_catalog(canvas: &mut Canvas, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;

    current_row = render_header(canvas, current_row, &vm.header, theme, cols);
    current_row = render_border(canvas, current_row, &theme.colors.border, "", cols);
    current_row = render_toolbar(canvas, current_row, &vm.toolbar, theme, cols);
    current_row = render_border(canvas, current_row, &theme.colors.border, "", cols);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(canvas, current_row, search, theme, cols);
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(canvas, current_row, empty, theme, cols);
    } else {
        render_grid(canvas, current_row, &vm.grid, theme);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(canvas, border_row, &theme.colors.border, &vm.grid.position, cols);
    render_footer(canvas, footer_start, &vm.footer, theme, cols);

    if let Some(detail) = &vm.detail {
        render_detail(canvas, detail, theme, rows, cols);
    }
}
