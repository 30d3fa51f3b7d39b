//! Product card grid.

use crate::app::state::{CARD_GAP, CARD_HEIGHT};
use crate::ui::helpers::{star_bar, text_width, Canvas, Span};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardInfo, GridInfo};

/// Renders the visible cards row by row, returning the row below the grid.
pub fn render_grid(canvas: &mut Canvas, row: usize, grid: &GridInfo, theme: &Theme) -> usize {
    let columns = grid.columns.max(1);

    for (index, card) in grid.cards.iter().enumerate() {
        let top = row + (index / columns) * CARD_HEIGHT;
        let left = 1 + (index % columns) * (grid.card_width + CARD_GAP);
        render_card(canvas, top, left, card, grid.card_width, theme);
    }

    let used_rows = (grid.cards.len() + columns - 1) / columns;
    row + used_rows * CARD_HEIGHT
}

/// Renders one card with its top-left corner at `(top, left)`.
///
/// ```text
/// ┌──────────────────────────────┐
/// │ ♥ Popular · Free Shipping    │
/// │ Fjallraven - Foldsack No. 1  │
/// │ Backpack, Fits 15 Laptops    │
/// │ $109.95                      │
/// │ ★★★★☆ 3.9 (120)              │
/// │ [men's clothing]             │
/// └──────────────────────────────┘
/// ```
fn render_card(canvas: &mut Canvas, top: usize, left: usize, card: &CardInfo, width: usize, theme: &Theme) {
    let colors = &theme.colors;
    let border = if card.is_selected {
        colors.selection_border.as_str()
    } else {
        colors.card_border.as_str()
    };
    let inner = width.saturating_sub(2);

    canvas.move_to(top, left);
    canvas.fg(border);
    canvas.push(&format!("┌{}┐", "─".repeat(inner)));
    canvas.reset();

    let mut badges = vec![if card.is_favorite {
        Span::new("♥", &colors.favorite_fg)
    } else {
        Span::new("♡", &colors.text_dim)
    }];
    if card.popular {
        badges.push(Span::new(" ", &colors.text_dim));
        badges.push(Span::bold("Popular", &colors.popular_fg));
    }
    if card.free_shipping {
        badges.push(Span::new(if card.popular { " · " } else { " " }, &colors.text_dim));
        badges.push(Span::new("Free Shipping", &colors.shipping_fg));
    }
    body_line(canvas, top + 1, left, width, border, |canvas, w| canvas.push_spans(&badges, w));

    for line in 0..2 {
        let title = card.title_lines.get(line);
        body_line(canvas, top + 2 + line, left, width, border, |canvas, w| {
            if let Some(title) = title {
                if card.is_selected {
                    canvas.bold();
                }
                canvas.push_highlighted(&title.text, &title.highlight_ranges, theme, &colors.text_normal);
                canvas.spaces(w.saturating_sub(text_width(&title.text)));
            } else {
                canvas.spaces(w);
            }
        });
    }

    body_line(canvas, top + 4, left, width, border, |canvas, w| {
        canvas.push_spans(&[Span::bold(card.price.as_str(), &colors.price_fg)], w);
    });
    body_line(canvas, top + 5, left, width, border, |canvas, w| {
        canvas.push_spans(
            &[
                Span::new(star_bar(card.stars), &colors.star_fg),
                Span::new(format!(" {}", card.rating), &colors.text_dim),
            ],
            w,
        );
    });
    body_line(canvas, top + 6, left, width, border, |canvas, w| {
        canvas.push_spans(&[Span::new(format!("[{}]", card.category), &colors.category_fg)], w);
    });

    canvas.move_to(top + 7, left);
    canvas.fg(border);
    canvas.push(&format!("└{}┘", "─".repeat(inner)));
    canvas.reset();
}

/// Draws `│ ` + content + ` │`; `content` must fill exactly the given width.
fn body_line(
    canvas: &mut Canvas,
    row: usize,
    left: usize,
    width: usize,
    border: &str,
    content: impl FnOnce(&mut Canvas, usize),
) {
    canvas.move_to(row, left);
    canvas.fg(border);
    canvas.push("│ ");
    canvas.reset();
    content(canvas, width.saturating_sub(4));
    canvas.fg(border);
    canvas.push(" │");
    canvas.reset();
}
