//! Composable UI component renderers.
//!
//! Each component renders one part of the interface at an explicit row and
//! returns the next free row, so [`render_layout`] reads top to bottom like
//! the screen it draws.
//!
//! # Components
//!
//! - [`header`]: Title bar with query and result totals
//! - [`search`]: Query input box
//! - [`grid`]: Result table (TITLE, YEAR, RATING)
//! - [`status`]: Idle, loading, empty and error messages
//! - [`pager`]: Windowed page strip
//! - [`toast`]: Transient notification line
//! - [`footer`]: Keybinding hints
//! - [`modal`]: Detail overlay
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Grid Headers]            or  [Status message]
//! [Grid Rows]
//! [Blank padding to fill screen]
//! [Page strip]
//! [Notification]
//! [Border]
//! [Footer]
//! ```
//!
//! The detail overlay, when open, is drawn last on top of everything.

mod footer;
mod grid;
mod header;
mod modal;
mod pager;
mod search;
mod status;
mod toast;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ResultsBody, UIViewModel};

use footer::render_footer;
use grid::{render_grid_headers, render_grid_rows};
use header::render_header;
use modal::render_modal;
use pager::render_pager;
use search::render_search_bar;
use status::render_status;
use toast::render_toast;

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row position (row + 1).
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full plugin screen for a view model.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let toast_row = border_row.saturating_sub(1);
    let pager_row = toast_row.saturating_sub(1);

    match &vm.body {
        ResultsBody::Results(results) => {
            current_row = render_grid_headers(current_row, theme, cols, results.is_stale);
            render_grid_rows(current_row, &results.rows, theme, cols);
            if pager_row > current_row {
                render_pager(pager_row, &results.pagination, theme, cols);
            }
        }
        body => render_status(current_row + 2, body, theme, cols),
    }

    render_toast(toast_row, vm.notification.as_ref(), theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);

    if let Some(detail) = &vm.detail {
        render_modal(detail, theme, rows, cols);
    }
}
