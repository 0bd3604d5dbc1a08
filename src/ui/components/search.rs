//! Search bar component renderer.
//!
//! This module renders the query input box with a bordered frame. The frame
//! color tracks focus, and an empty unfocused box shows a placeholder.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Text shown in an empty search box.
const PLACEHOLDER: &str = "Search movies...";

/// Block drawn after the query while typing.
const CARET: char = '▏';

/// Renders the search input box at the specified row.
///
/// ```text
/// [margin] ┌────────────────────┐ [margin]
/// [margin] │ the matrix▏        │ [margin]
/// [margin] └────────────────────┘ [margin]
/// ```
///
/// Long queries keep their tail visible so the caret stays on screen. Returns
/// the next available row (the box uses three lines).
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_focused {
        &theme.colors.search_bar_focused
    } else {
        &theme.colors.search_bar_border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let (text, color) = if search.query.is_empty() && !search.is_focused {
        (format!(" {PLACEHOLDER}"), &theme.colors.text_dim)
    } else {
        let caret = if search.is_focused { CARET.to_string() } else { String::new() };
        let text_room = inner_width.saturating_sub(2);
        let shown = tail(&format!("{}{caret}", search.query), text_room);
        (format!(" {shown}"), &theme.colors.text_normal)
    };
    let text = truncate(&text, inner_width);
    let padding = inner_width.saturating_sub(text.chars().count());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::fg(color));
    print!("{text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Last `width` characters of `text`.
fn tail(text: &str, width: usize) -> String {
    let len = text.chars().count();
    text.chars().skip(len.saturating_sub(width)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_keeps_the_end_of_long_input() {
        assert_eq!(tail("the good, the bad and the ugly", 7), "he ugly");
        assert_eq!(tail("up", 7), "up");
    }
}
