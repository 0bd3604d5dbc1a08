//! Notification line renderer.

use crate::app::notifications::{Notification, NotificationKind};
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;

/// Renders the current notification, or clears the line when there is none.
pub fn render_toast(row: usize, notification: Option<&Notification>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let Some(notification) = notification else {
        print!("{}", " ".repeat(cols));
        return row + 1;
    };

    let (icon, color) = match notification.kind {
        NotificationKind::Info => ("ℹ", &theme.colors.notification_info_fg),
        NotificationKind::Error => ("✖", &theme.colors.notification_error_fg),
    };
    let text = truncate(&format!("{icon} {}", notification.message), cols);
    let len = text.chars().count();
    let padding = cols.saturating_sub(len) / 2;

    print!("{}", " ".repeat(padding));
    print!("{}{}{text}", Theme::bold(), Theme::fg(color));
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    row + 1
}
