//! Full-screen loading and error states.

use crate::ui::helpers::{text_width, truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusScreen;

/// Renders `status` centered on an otherwise blank screen.
pub fn render_status(canvas: &mut Canvas, status: &StatusScreen, theme: &Theme, rows: usize, cols: usize) {
    let (text, color) = match status {
        StatusScreen::Loading { message } => (message.clone(), &theme.colors.text_dim),
        StatusScreen::Error { message } => (format!("Error: {message}"), &theme.colors.error_fg),
    };

    let text = truncate(&text, cols);
    let len = text_width(&text);
    let padding = cols.saturating_sub(len) / 2;

    canvas.move_to((rows / 2).max(1), 1);
    canvas.bold();
    canvas.fg(color);
    canvas.spaces(padding);
    canvas.push(&text);
    canvas.spaces(cols.saturating_sub(padding + len));
    canvas.reset();
}
