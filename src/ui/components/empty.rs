//! Empty grid message.

use crate::ui::helpers::{text_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the centered message a few rows below `row`.
pub fn render_empty_state(canvas: &mut Canvas, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let row = row + 3;
    centered(canvas, row, &empty.message, &theme.colors.empty_state_fg, true, cols);
    centered(canvas, row + 1, &empty.subtitle, &theme.colors.text_dim, false, cols);

    if let Some(action) = &empty.action {
        centered(canvas, row + 3, action, &theme.colors.toolbar_active_fg, true, cols);
    }
}

fn centered(canvas: &mut Canvas, row: usize, text: &str, color: &str, bold: bool, cols: usize) {
    let len = text_width(text);
    let padding = cols.saturating_sub(len) / 2;

    canvas.move_to(row, 1);
    if bold {
        canvas.bold();
    }
    canvas.fg(color);
    canvas.spaces(padding);
    canvas.push(text);
    canvas.spaces(cols.saturating_sub(padding + len));
    canvas.reset();
}
