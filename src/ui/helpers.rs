//! Shared rendering utilities.
//!
//! Components draw into a [`Canvas`], an ANSI frame buffer addressed with
//! 1-indexed cursor positions, which the renderer prints in one go. The text
//! helpers measure in characters, never bytes.

use crate::domain::fold_case;
use crate::ui::theme::Theme;

/// Styled run of text for [`Canvas::push_spans`].
#[derive(Debug, Clone)]
pub struct Span<'a> {
    pub text: String,
    pub fg: &'a str,
    pub bold: bool,
}

impl<'a> Span<'a> {
    pub fn new(text: impl Into<String>, fg: &'a str) -> Self {
        Self { text: text.into(), fg, bold: false }
    }

    pub fn bold(text: impl Into<String>, fg: &'a str) -> Self {
        Self { text: text.into(), fg, bold: true }
    }
}

/// ANSI frame buffer.
#[derive(Debug, Default)]
pub struct Canvas {
    buf: String,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor (1-indexed).
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    pub fn push(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    pub fn spaces(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat(' ').take(count));
    }

    pub fn fg(&mut self, hex: &str) {
        self.buf.push_str(&Theme::fg(hex));
    }

    pub fn bg(&mut self, hex: &str) {
        self.buf.push_str(&Theme::bg(hex));
    }

    pub fn bold(&mut self) {
        self.buf.push_str(Theme::bold());
    }

    pub fn dim(&mut self) {
        self.buf.push_str(Theme::dim());
    }

    pub fn reset(&mut self) {
        self.buf.push_str(Theme::reset());
    }

    /// Writes `spans` clipped to `width` characters, padding the rest.
    pub fn push_spans(&mut self, spans: &[Span<'_>], width: usize) {
        let mut used = 0;
        for span in spans {
            if used >= width {
                break;
            }
            let text: String = span.text.chars().take(width - used).collect();
            used += text.chars().count();

            if span.bold {
                self.bold();
            }
            self.fg(span.fg);
            self.push(&text);
            self.reset();
        }
        self.spaces(width.saturating_sub(used));
    }

    /// Writes `text` with the character `ranges` in match colors.
    ///
    /// Text outside the ranges is drawn in `base_fg`. Ranges past the end of
    /// the text are clipped.
    pub fn push_highlighted(&mut self, text: &str, ranges: &[(usize, usize)], theme: &Theme, base_fg: &str) {
        let chars: Vec<char> = text.chars().collect();
        let mut current_pos = 0;

        self.fg(base_fg);
        for &(start, end) in ranges {
            let start = start.clamp(current_pos, chars.len());
            let end = end.clamp(start, chars.len());

            let normal: String = chars[current_pos..start].iter().collect();
            self.push(&normal);

            self.fg(&theme.colors.match_highlight_fg);
            self.bg(&theme.colors.match_highlight_bg);
            let highlighted: String = chars[start..end].iter().collect();
            self.push(&highlighted);
            self.reset();
            self.fg(base_fg);

            current_pos = end;
        }

        let rest: String = chars[current_pos..].iter().collect();
        self.push(&rest);
        self.reset();
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Character count of `text`.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Clips `text` to `width` characters, ending with `...` when cut.
///
/// ```
/// use stylehub::ui::helpers::truncate;
///
/// assert_eq!(truncate("Backpack", 10), "Backpack");
/// assert_eq!(truncate("Foldsack Backpack", 10), "Foldsac...");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text_width(text) <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut out: String = text.chars().take(width - 3).collect();
    out.push_str("...");
    out
}

/// Word-wraps `text` into at most `max_lines` lines of `width` characters.
///
/// Words longer than a line are split. When text remains after the last
/// line, that line ends with `...`.
///
/// ```
/// use stylehub::ui::helpers::wrap_text;
///
/// assert_eq!(
///     wrap_text("Mens Casual Premium Slim Fit T-Shirts", 16, 2),
///     vec!["Mens Casual", "Premium Slim ..."]
/// );
/// ```
#[must_use]
pub fn wrap_text(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return vec![];
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut overflow = false;

    'words: for word in text.split_whitespace() {
        let mut word = word.to_string();
        loop {
            let needed = if current.is_empty() {
                text_width(&word)
            } else {
                text_width(&current) + 1 + text_width(&word)
            };

            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(&word);
                break;
            }

            if current.is_empty() {
                let head: String = word.chars().take(width).collect();
                word = word.chars().skip(width).collect();
                lines.push(head);
            } else {
                lines.push(std::mem::take(&mut current));
            }

            if lines.len() == max_lines {
                overflow = true;
                break 'words;
            }
        }
    }

    if overflow {
        if let Some(last) = lines.last_mut() {
            *last = with_ellipsis(last, width);
        }
    } else if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn with_ellipsis(line: &str, width: usize) -> String {
    if text_width(line) + 4 <= width {
        format!("{line} ...")
    } else {
        let keep = width.saturating_sub(3);
        let mut out: String = line.chars().take(keep).collect();
        out.push_str("...");
        out
    }
}

/// Non-overlapping case-insensitive occurrences of `query` in `text`, as
/// character ranges of `text` with an exclusive end.
///
/// Folding is [`fold_case`], the same as the search filter. A match that covers
/// only part of an expanded character highlights the whole character.
///
/// ```
/// use stylehub::ui::helpers::match_ranges;
///
/// assert_eq!(match_ranges("Blue Shirt", "SHIRT"), vec![(5, 10)]);
/// assert!(match_ranges("Blue Shirt", "").is_empty());
/// ```
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = fold_case(query).chars().collect();
    if needle.is_empty() {
        return vec![];
    }

    // folded character -> index of the original character it came from
    let mut haystack = Vec::new();
    let mut origin = Vec::new();
    for (index, c) in text.chars().enumerate() {
        for folded in c.to_lowercase() {
            haystack.push(folded);
            origin.push(index);
        }
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()] == needle[..] {
            let end = i + needle.len();
            ranges.push((origin[i], origin[end - 1] + 1));
            i = end;
        } else {
            i += 1;
        }
    }
    ranges
}

/// Five-star rating bar with `filled` solid stars.
#[must_use]
pub fn star_bar(filled: usize) -> String {
    let filled = filled.min(crate::domain::product::MAX_STARS);
    let empty = crate::domain::product::MAX_STARS - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// Strips ANSI escape sequences, leaving the visible text.
#[cfg(test)]
pub(crate) fn strip_ansi(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
