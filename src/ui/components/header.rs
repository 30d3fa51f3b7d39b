//! Brand header.

use crate::ui::helpers::{text_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centered title and subtitle, returning the next free row.
pub fn render_header(canvas: &mut Canvas, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = text_width(&header.title);
    let padding = cols.saturating_sub(title_len) / 2;

    canvas.move_to(row, 1);
    canvas.bold();
    canvas.fg(&theme.colors.header_fg);
    if let Some(bg) = &theme.colors.header_bg {
        canvas.bg(bg);
    }
    canvas.spaces(padding);
    canvas.push(&header.title);
    canvas.spaces(cols.saturating_sub(padding + title_len));
    canvas.reset();

    let subtitle_len = text_width(&header.subtitle);
    let padding = cols.saturating_sub(subtitle_len) / 2;

    canvas.move_to(row + 1, 1);
    canvas.fg(&theme.colors.text_dim);
    canvas.spaces(padding);
    canvas.push(&header.subtitle);
    canvas.spaces(cols.saturating_sub(padding + subtitle_len));
    canvas.reset();

    row + 2
}
