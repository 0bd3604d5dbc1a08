//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components: cursor positioning, query match highlighting with proper ANSI
//! escape sequence management, and width-aware text shaping.
//!
//! All width calculations operate on character counts, not byte lengths, so
//! accented and non-Latin titles are never split inside a code point.
//!
//! # Example
//!
//! ```rust
//! use zinema::ui::helpers::{truncate, wrap_text};
//!
//! assert_eq!(truncate("The Lord of the Rings", 12), "The Lord ...");
//! assert_eq!(wrap_text("a long overview", 8), vec!["a long", "overview"]);
//! ```

use crate::ui::theme::Theme;

/// Narrowest TITLE column, regardless of pane width.
const TITLE_COLUMN_MIN: usize = 20;

/// Width of the YEAR and RATING columns with their leading gaps.
pub const TRAILING_COLUMNS_WIDTH: usize = 16;

/// Left indent of every result row.
pub const ROW_INDENT: usize = 2;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Width of the TITLE column for a pane `cols` wide.
#[must_use]
pub fn title_column_width(cols: usize) -> usize {
    cols.saturating_sub(TRAILING_COLUMNS_WIDTH + ROW_INDENT * 2)
        .max(TITLE_COLUMN_MIN)
}

/// Shortens `text` to at most `width` characters, ending in `...` when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }

    let mut shortened: String = text.chars().take(width - 3).collect();
    shortened.push_str("...");
    shortened
}

/// Right-pads `text` with spaces to exactly `width` characters, truncating first.
#[must_use]
pub fn pad(text: &str, width: usize) -> String {
    let shortened = truncate(text, width);
    let fill = width.saturating_sub(shortened.chars().count());
    format!("{shortened}{}", " ".repeat(fill))
}

/// Word-wraps `text` into lines of at most `width` characters.
///
/// Words longer than `width` are hard-split. Whitespace runs collapse to a
/// single space.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();

        for chunk in chars.chunks(width) {
            let chunk_len = chunk.len();
            let needed = if line_len == 0 { chunk_len } else { line_len + 1 + chunk_len };

            if needed > width && line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(chunk);
            line_len += chunk_len;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Renders text with highlighted character ranges for query matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges. Ranges are `(start, end)` character indices with an
/// exclusive end. When `is_selected` is `true` the text is printed plain so the
/// selection colors stay intact.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_column_takes_the_remaining_width() {
        assert_eq!(title_column_width(100), 80);
        assert_eq!(title_column_width(30), 20);
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Amélie", 10), "Amélie");
        assert_eq!(truncate("Le Fabuleux Destin d'Amélie Poulain", 14), "Le Fabuleux...");
        assert_eq!(truncate("Alien", 2), "Al");
    }

    #[test]
    fn pad_fills_to_width() {
        assert_eq!(pad("Up", 5), "Up   ");
        assert_eq!(pad("Inception", 6), "Inc...");
    }

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        let lines = wrap_text("When a beautiful stranger leads computer hacker Neo", 20);
        assert_eq!(lines, vec!["When a beautiful", "stranger leads", "computer hacker Neo"]);
        assert!(lines.iter().all(|line| line.chars().count() <= 20));
    }

    #[test]
    fn wrap_splits_overlong_words() {
        assert_eq!(wrap_text("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
        assert!(wrap_text("   ", 10).is_empty());
    }
}
