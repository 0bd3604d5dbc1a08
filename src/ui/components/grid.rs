//! Result grid component renderer.
//!
//! This module renders a page of movies as a three-column table (TITLE, YEAR,
//! RATING) with cursor highlighting and query match highlighting in titles.

use crate::ui::helpers::{self, pad, position_cursor, title_column_width, ROW_INDENT};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const YEAR_WIDTH: usize = 6;
const RATING_WIDTH: usize = 6;

/// Renders the table column headers at the specified row.
///
/// A dimmed `(stale)` marker follows the headers while the rows belong to a
/// previous request. Returns the next available row.
pub fn render_grid_headers(row: usize, theme: &Theme, cols: usize, is_stale: bool) -> usize {
    let title_width = title_column_width(cols);

    position_cursor(row, 1);
    print!("{}", " ".repeat(ROW_INDENT));
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}  {:<YEAR_WIDTH$}  {:>RATING_WIDTH$}", pad("TITLE", title_width), "YEAR", "RATING");
    print!("{}", Theme::reset());

    if is_stale {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}  updating...", Theme::dim());
        print!("{}", Theme::reset());
    }
    row + 1
}

/// Renders all grid rows starting at the specified row.
///
/// Returns the next available row position.
pub fn render_grid_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_grid_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single movie row.
///
/// ```text
///   TITLE (padded)                YEAR    RATING
/// ```
///
/// The selected row takes the selection colors across the full width and
/// suppresses match highlighting; other rows highlight query matches in the
/// title and color the rating.
fn render_grid_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let title_width = title_column_width(cols);
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!("{}", " ".repeat(ROW_INDENT));
    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
    print!("{}", " ".repeat(title_width.saturating_sub(item.title.chars().count())));

    print!("  {:<YEAR_WIDTH$}  ", item.year);

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.rating_fg));
    }
    print!("{:>RATING_WIDTH$}", item.rating);

    let line_len = ROW_INDENT + title_width + helpers::TRAILING_COLUMNS_WIDTH;
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
