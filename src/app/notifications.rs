//! Transient notification queue.
//!
//! Notifications are pushed by the event handler at the moment something
//! happens (a rejected submission, a completed empty fetch). They are never
//! derived during rendering, so re-rendering cannot repeat them. Each push is
//! paired with a host timer; every timer tick retires the oldest entry.

use std::collections::VecDeque;

/// Message shown when a submitted query is blank.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter your search query.";

/// Message shown when a completed search returns no movies.
pub const NO_RESULTS_MESSAGE: &str = "No movies found for your request.";

/// Severity of a notification, used for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// One transient message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// FIFO of pending notifications.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    queue: VecDeque<Notification>,
}

impl Notifications {
    /// Appends a notification.
    ///
    /// Entries leave only through [`Self::expire_oldest`], one per armed timer.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.queue.push_back(Notification {
            kind,
            message: message.into(),
        });
    }

    /// Removes the oldest notification. Returns `true` if one was removed.
    pub fn expire_oldest(&mut self) -> bool {
        self.queue.pop_front().is_some()
    }

    /// The notification currently on screen.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.queue.front()
    }

    /// Iterates over pending notifications, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_notification_is_shown_and_expired_first() {
        let mut notifications = Notifications::default();
        notifications.push(NotificationKind::Error, EMPTY_QUERY_MESSAGE);
        notifications.push(NotificationKind::Info, NO_RESULTS_MESSAGE);

        assert_eq!(notifications.current().map(|n| n.message.as_str()), Some(EMPTY_QUERY_MESSAGE));
        assert!(notifications.expire_oldest());
        assert_eq!(notifications.current().map(|n| n.message.as_str()), Some(NO_RESULTS_MESSAGE));
        assert!(notifications.expire_oldest());
        assert!(!notifications.expire_oldest());
        assert!(notifications.is_empty());
    }

    #[test]
    fn every_push_is_retired_by_exactly_one_tick() {
        let mut notifications = Notifications::default();
        for i in 0..10 {
            notifications.push(NotificationKind::Info, format!("n{i}"));
        }
        assert_eq!(notifications.len(), 10);

        for i in 0..10 {
            let expected = format!("n{i}");
            assert_eq!(notifications.current().map(|n| n.message.as_str()), Some(expected.as_str()));
            assert!(notifications.expire_oldest());
        }
        assert!(notifications.is_empty());
    }
}
