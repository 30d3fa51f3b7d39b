//! Keybinding hint bar.

use crate::ui::helpers::{truncate, text_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the centered, dimmed hints, truncated on narrow terminals.
pub fn render_footer(canvas: &mut Canvas, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = text_width(&help_text);
    let padding = cols.saturating_sub(text_len) / 2;

    canvas.move_to(row, 1);
    canvas.fg(&theme.colors.text_dim);
    canvas.spaces(padding);
    canvas.push(&help_text);
    canvas.spaces(cols.saturating_sub(padding + text_len));
    canvas.reset();
    row + 1
}
