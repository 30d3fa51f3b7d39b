//! Detail overlay.
//!
//! Drawn after the grid so it covers the cards beneath it. Every line is
//! written at full box width to blank out what was there.

use crate::ui::helpers::{star_bar, truncate, wrap_text, Canvas, Span};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailInfo;

const MAX_WIDTH: usize = 76;
const MAX_HEIGHT: usize = 30;
const TITLE_LINES: usize = 3;

/// Lines besides the title and description: blank, price, rating, category,
/// blank, blank, image, blank, actions.
const FIXED_LINES: usize = 9;

pub fn render_detail(canvas: &mut Canvas, detail: &DetailInfo, theme: &Theme, rows: usize, cols: usize) {
    let colors = &theme.colors;
    let width = cols.saturating_sub(8).min(MAX_WIDTH).max(20);
    let content_width = width.saturating_sub(4);
    let height = rows.saturating_sub(4).min(MAX_HEIGHT);

    let title = wrap_text(&detail.title, content_width, TITLE_LINES);
    let description_lines = height.saturating_sub(2 + FIXED_LINES + title.len()).max(1);
    let description = wrap_text(&detail.description, content_width, description_lines);

    let mut lines: Vec<Vec<Span<'_>>> = title
        .into_iter()
        .map(|line| vec![Span::bold(line, &colors.header_fg)])
        .collect();
    lines.push(vec![]);

    let mut price = vec![Span::bold(detail.price.as_str(), &colors.price_fg)];
    if detail.free_shipping {
        price.push(Span::new("  Free Shipping", &colors.shipping_fg));
    }
    if detail.popular {
        price.push(Span::bold("  Popular", &colors.popular_fg));
    }
    lines.push(price);

    lines.push(vec![
        Span::new(star_bar(detail.stars), &colors.star_fg),
        Span::new(format!(" {}", detail.rating), &colors.text_dim),
    ]);
    lines.push(vec![Span::new(format!("[{}]", detail.category), &colors.category_fg)]);
    lines.push(vec![]);

    lines.extend(
        description
            .into_iter()
            .map(|line| vec![Span::new(line, &colors.text_normal)]),
    );
    lines.push(vec![]);

    if !detail.image.is_empty() {
        lines.push(vec![Span::new(
            truncate(&format!("Image: {}", detail.image), content_width),
            &colors.text_dim,
        )]);
        lines.push(vec![]);
    }

    let favorite = if detail.is_favorite {
        Span::new("♥ Favorited", &colors.favorite_fg)
    } else {
        Span::new("♡ Add to Favorites", &colors.text_dim)
    };
    lines.push(vec![
        Span::bold(format!("[ {} ]", detail.cart_label), &colors.selection_border),
        Span::new("  ", &colors.text_dim),
        favorite,
    ]);

    let box_height = lines.len() + 2;
    let top = (rows.saturating_sub(box_height) / 2).max(1);
    let left = cols.saturating_sub(width) / 2 + 1;
    let inner = width.saturating_sub(2);
    let border = colors.overlay_border.as_str();

    canvas.move_to(top, left);
    canvas.fg(border);
    canvas.push(&format!("╭{}╮", "─".repeat(inner)));
    canvas.reset();

    for (offset, line) in lines.iter().enumerate() {
        canvas.move_to(top + 1 + offset, left);
        canvas.fg(border);
        canvas.push("│ ");
        canvas.reset();
        canvas.push_spans(line, content_width);
        canvas.fg(border);
        canvas.push(" │");
        canvas.reset();
    }

    canvas.move_to(top + 1 + lines.len(), left);
    canvas.fg(border);
    canvas.push(&format!("╰{}╯", "─".repeat(inner)));
    canvas.reset();
}
