//! Detail overlay component renderer.
//!
//! Draws a centered, bordered box over the grid with every field of the
//! selected movie. The overview is word-wrapped to the box and cut off with an
//! ellipsis line when the pane is too short.

use crate::ui::helpers::{pad, position_cursor, truncate, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

const MAX_MODAL_WIDTH: usize = 76;
const HORIZONTAL_MARGIN: usize = 4;
const VERTICAL_MARGIN: usize = 2;

/// Content lines of the overlay, already wrapped to `inner_width`.
///
/// The first line is the title; the renderer draws it bold.
fn modal_lines(detail: &DetailView, inner_width: usize) -> Vec<String> {
    let mut lines = vec![truncate(&detail.title, inner_width)];

    if let Some(original) = &detail.original_title {
        lines.push(truncate(&format!("Original title: {original}"), inner_width));
    }
    lines.push(format!("Released: {}", detail.release_date));
    lines.push(format!("Rating:   {} ({} votes)", detail.rating, detail.vote_count));
    lines.push(truncate(
        &format!("Poster:   {}", detail.poster_url.as_deref().unwrap_or("none")),
        inner_width,
    ));
    lines.push(String::new());
    lines.extend(wrap_text(&detail.overview, inner_width));
    lines
}

/// Renders the detail overlay for a `rows` by `cols` pane.
pub fn render_modal(detail: &DetailView, theme: &Theme, rows: usize, cols: usize) {
    let width = cols
        .saturating_sub(HORIZONTAL_MARGIN * 2)
        .min(MAX_MODAL_WIDTH);
    let inner_width = width.saturating_sub(4);
    if inner_width == 0 {
        return;
    }

    let max_content = rows.saturating_sub(VERTICAL_MARGIN * 2 + 2);
    let mut lines = modal_lines(detail, inner_width);
    if lines.len() > max_content {
        lines.truncate(max_content.saturating_sub(1));
        lines.push("...".to_string());
    }

    let height = lines.len() + 2;
    let top = rows.saturating_sub(height) / 2 + 1;
    let left = cols.saturating_sub(width) / 2 + 1;
    let border = Theme::fg(&theme.colors.modal_border);

    position_cursor(top, left);
    print!("{border}╭{}╮{}", "─".repeat(width.saturating_sub(2)), Theme::reset());

    for (i, line) in lines.iter().enumerate() {
        position_cursor(top + 1 + i, left);
        print!("{border}│{} ", Theme::reset());
        if i == 0 {
            print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{}", pad(line, inner_width));
        print!("{} {border}│{}", Theme::reset(), Theme::reset());
    }

    position_cursor(top + height - 1, left);
    print!("{border}╰{}╯{}", "─".repeat(width.saturating_sub(2)), Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(original_title: Option<&str>) -> DetailView {
        DetailView {
            title: "Seven Samurai".to_string(),
            original_title: original_title.map(String::from),
            release_date: "April 26, 1954".to_string(),
            rating: "8.5/10".to_string(),
            vote_count: 3_900,
            poster_url: None,
            overview: "A samurai answers a village's request for protection.".to_string(),
        }
    }

    #[test]
    fn lines_carry_every_field() {
        let lines = modal_lines(&detail(Some("七人の侍")), 40);

        assert_eq!(lines[0], "Seven Samurai");
        assert_eq!(lines[1], "Original title: 七人の侍");
        assert_eq!(lines[2], "Released: April 26, 1954");
        assert_eq!(lines[3], "Rating:   8.5/10 (3900 votes)");
        assert_eq!(lines[4], "Poster:   none");
        assert_eq!(&lines[6..], ["A samurai answers a village's request", "for protection."]);
    }

    #[test]
    fn identical_original_title_is_omitted() {
        let lines = modal_lines(&detail(None), 40);
        assert!(lines[1].starts_with("Released"));
    }
}
