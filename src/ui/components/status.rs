//! Status message component renderer.
//!
//! Renders the results area when there is no grid to show: the idle prompt,
//! the loading indicator, the empty result message and the error state.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ResultsBody;

/// Renders a centered two-line status message starting at `row`.
///
/// `Results` bodies are not handled here and render nothing.
pub fn render_status(row: usize, body: &ResultsBody, theme: &Theme, cols: usize) {
    let (message, subtitle, color) = match body {
        ResultsBody::Idle => (
            "Find a movie".to_string(),
            "Type a title and press Enter".to_string(),
            &theme.colors.status_fg,
        ),
        ResultsBody::Loading { query } => (
            "Loading...".to_string(),
            format!("Searching for \"{query}\""),
            &theme.colors.status_fg,
        ),
        ResultsBody::Empty { query } => (
            "No movies found".to_string(),
            format!("Nothing matched \"{query}\". Press / to try another title"),
            &theme.colors.status_fg,
        ),
        ResultsBody::Error { message, detail } => (message.clone(), detail.clone(), &theme.colors.error_fg),
        ResultsBody::Results(_) => return,
    };

    centered_line(row, &message, &[Theme::bold().to_string(), Theme::fg(color)], cols);
    centered_line(
        row + 1,
        &subtitle,
        &[Theme::dim().to_string(), Theme::fg(&theme.colors.text_dim)],
        cols,
    );
}

fn centered_line(row: usize, text: &str, styles: &[String], cols: usize) {
    let text = truncate(text, cols);
    let len = text.chars().count();
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    for style in styles {
        print!("{style}");
    }
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}
