//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and host events, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (keys, web responses, timers)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Query input**: `Char`, `Backspace`, `FocusSearch`, `LeaveSearch`, `Submit`
//! - **Grid**: `SelectNext`, `SelectPrevious`, `OpenDetail`, `CloseDetail`
//! - **Pagination**: `NextPage`, `PreviousPage`, `FirstPage`, `LastPage`
//! - **Host**: `FetchCompleted`, `NotificationExpired`, `PermissionsGranted`,
//!   `PermissionsDenied`
//!
//! # Example
//!
//! ```rust
//! use zinema::app::{handle_event, Action, AppState, Event};
//! use zinema::fetcher::MovieFetcher;
//! use zinema::ui::theme::Theme;
//!
//! let mut state = AppState::new(MovieFetcher::default(), Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(render);
//! assert_eq!(actions, vec![Action::ScheduleNotificationExpiry { seconds: 3 }]);
//! # Ok::<(), zinema::ZinemaError>(())
//! ```

use super::modes::{FetchStatus, InputMode, WebAccess};
use super::notifications::NotificationKind;
use crate::app::{Action, AppState};
use crate::domain::Result;
use crate::fetcher::RequestTag;
use std::collections::BTreeMap;

/// Message raised once when the user declines web access.
const PERMISSION_DENIED_MESSAGE: &str = "Web access was denied. Zinema cannot search without it.";

/// Events triggered by user input or the plugin host.
///
/// The event handler processes these sequentially, so state transitions are
/// deterministic for a given event order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the search input.
    Char(char),
    /// Removes the last character from the search input.
    Backspace,
    /// Gives the search input focus.
    FocusSearch,
    /// Moves focus from the search input to the grid, keeping the buffer.
    LeaveSearch,
    /// Submits the search input as the new query.
    Submit,

    /// Moves the grid cursor down (wraps to top).
    SelectNext,
    /// Moves the grid cursor up (wraps to bottom).
    SelectPrevious,

    /// Requests the following page.
    NextPage,
    /// Requests the preceding page.
    PreviousPage,
    /// Requests page 1.
    FirstPage,
    /// Requests the last page.
    LastPage,

    /// Opens the detail overlay for the movie under the cursor.
    OpenDetail,
    /// Closes the detail overlay.
    CloseDetail,

    /// A web request finished.
    ///
    /// `context` is the map attached to the request; it identifies which
    /// (query, page) the response answers.
    FetchCompleted {
        /// Request context echoed back by the host.
        context: BTreeMap<String, String>,
        /// HTTP status reported by the host.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// A notification timer fired.
    NotificationExpired,

    /// The user granted web access.
    PermissionsGranted,
    /// The user declined web access.
    PermissionsDenied,

    /// Hides the plugin.
    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the UI needs re-rendering together with the actions to
/// execute in order.
///
/// # Errors
///
/// The current transitions are infallible; the `Result` keeps the plugin shim
/// uniform with fallible handlers.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    if state.selected_movie().is_some() && !passes_overlay(event) {
        tracing::trace!("event ignored while detail overlay is open");
        return Ok((false, vec![]));
    }

    match event {
        Event::Char(c) => {
            if state.input_mode != InputMode::Typing {
                return Ok((false, vec![]));
            }
            state.input.push(*c);
            tracing::trace!(input = %state.input, char = %c, "search input updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Typing {
                return Ok((false, vec![]));
            }
            Ok((state.input.pop().is_some(), vec![]))
        }
        Event::FocusSearch => {
            let changed = state.input_mode != InputMode::Typing;
            state.input_mode = InputMode::Typing;
            Ok((changed, vec![]))
        }
        Event::LeaveSearch => {
            let changed = state.input_mode != InputMode::Browsing;
            state.input_mode = InputMode::Browsing;
            Ok((changed, vec![]))
        }
        Event::Submit => Ok((true, state.submit_query())),

        Event::SelectNext => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::SelectPrevious => {
            state.move_selection_up();
            Ok((true, vec![]))
        }

        Event::NextPage => Ok(page_change(state.next_page())),
        Event::PreviousPage => Ok(page_change(state.previous_page())),
        Event::FirstPage => Ok(page_change(state.first_page())),
        Event::LastPage => Ok(page_change(state.last_page())),

        Event::OpenDetail => Ok((state.open_detail(), vec![])),
        Event::CloseDetail => Ok((state.close_detail(), vec![])),

        Event::FetchCompleted { context, status, body } => {
            let Some(tag) = RequestTag::from_context(context) else {
                tracing::debug!(status = status, "response without a search context ignored");
                return Ok((false, vec![]));
            };

            if let Some(trace) = &tag.trace_context {
                tracing::debug!(
                    trace_id = %trace.trace_id,
                    parent_span_id = %trace.parent_span_id,
                    seq = tag.seq,
                    "search response received"
                );
            }

            Ok(state
                .accept_response(&tag, *status, body)
                .map_or((false, vec![]), |actions| (true, actions)))
        }

        Event::NotificationExpired => Ok((state.notifications.expire_oldest(), vec![])),

        Event::PermissionsGranted => {
            tracing::debug!("web access granted");
            state.web_access = WebAccess::Granted;
            Ok((true, state.sync_fetch().into_iter().collect()))
        }
        Event::PermissionsDenied => {
            tracing::warn!("web access denied");
            state.web_access = WebAccess::Denied;
            if state.fetch == FetchStatus::AwaitingPermission {
                state.sync_fetch();
            }
            let expiry = state.notify(NotificationKind::Error, PERMISSION_DENIED_MESSAGE);
            Ok((true, vec![expiry]))
        }

        Event::Quit => Ok((false, vec![Action::CloseFocus])),
    }
}

/// Events still handled while the detail overlay covers the grid.
const fn passes_overlay(event: &Event) -> bool {
    matches!(
        event,
        Event::CloseDetail
            | Event::Quit
            | Event::FetchCompleted { .. }
            | Event::NotificationExpired
            | Event::PermissionsGranted
            | Event::PermissionsDenied
    )
}

fn page_change(result: Option<Vec<Action>>) -> (bool, Vec<Action>) {
    result.map_or((false, vec![]), |actions| (true, actions))
}

/// Short event name for span fields, without payloads such as response bodies.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Char(_) => "char",
        Event::Backspace => "backspace",
        Event::FocusSearch => "focus_search",
        Event::LeaveSearch => "leave_search",
        Event::Submit => "submit",
        Event::SelectNext => "select_next",
        Event::SelectPrevious => "select_previous",
        Event::NextPage => "next_page",
        Event::PreviousPage => "previous_page",
        Event::FirstPage => "first_page",
        Event::LastPage => "last_page",
        Event::OpenDetail => "open_detail",
        Event::CloseDetail => "close_detail",
        Event::FetchCompleted { .. } => "fetch_completed",
        Event::NotificationExpired => "notification_expired",
        Event::PermissionsGranted => "permissions_granted",
        Event::PermissionsDenied => "permissions_denied",
        Event::Quit => "quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::MovieFetcher;
    use crate::ui::theme::Theme;

    fn state() -> AppState {
        AppState::new(MovieFetcher::default(), Theme::default())
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn typing_edits_only_in_typing_mode() {
        let mut state = state();
        type_text(&mut state, "dune");
        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.input, "dun");

        handle_event(&mut state, &Event::LeaveSearch).unwrap();
        assert_eq!(handle_event(&mut state, &Event::Char('x')).unwrap(), (false, vec![]));
        assert_eq!(state.input, "dun");

        handle_event(&mut state, &Event::FocusSearch).unwrap();
        assert_eq!(state.input_mode, InputMode::Typing);
    }

    #[test]
    fn submission_before_permission_fetches_once_granted() {
        let mut state = state();
        type_text(&mut state, "dune");

        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(actions.is_empty());

        let (render, actions) = handle_event(&mut state, &Event::PermissionsGranted).unwrap();
        assert!(render);
        assert!(matches!(actions.as_slice(), [Action::Fetch(request)] if request.url.contains("query=dune")));
    }

    #[test]
    fn permission_denial_notifies_and_fails_the_pending_fetch() {
        let mut state = state();
        type_text(&mut state, "dune");
        handle_event(&mut state, &Event::Submit).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::PermissionsDenied).unwrap();
        assert_eq!(actions, vec![Action::ScheduleNotificationExpiry { seconds: 3 }]);
        assert!(matches!(state.fetch, FetchStatus::Failed(_)));
        assert_eq!(
            state.notifications.current().map(|n| n.message.as_str()),
            Some(PERMISSION_DENIED_MESSAGE)
        );
    }

    #[test]
    fn foreign_responses_are_ignored() {
        let mut state = state();
        let event = Event::FetchCompleted {
            context: BTreeMap::new(),
            status: 200,
            body: b"{}".to_vec(),
        };
        assert_eq!(handle_event(&mut state, &event).unwrap(), (false, vec![]));
    }

    #[test]
    fn expiring_with_nothing_pending_skips_render() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, &Event::NotificationExpired).unwrap(), (false, vec![]));
    }

    #[test]
    fn quit_hides_the_plugin() {
        let mut state = state();
        assert_eq!(
            handle_event(&mut state, &Event::Quit).unwrap(),
            (false, vec![Action::CloseFocus])
        );
    }
}
