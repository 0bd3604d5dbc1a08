//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never calls Zellij directly. It returns a list of
//! [`Action`]s, and the shim in `main.rs` turns each one into a host call.
//! This keeps every state transition testable without a Zellij host.
//!
//! # Example
//!
//! ```rust
//! use zinema::app::Action;
//!
//! let actions = vec![Action::ScheduleNotificationExpiry { seconds: 3 }];
//! ```

use crate::fetcher::FetchRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Sends an HTTP GET through the host's `web_request`.
    ///
    /// The response arrives later as a `WebRequestResult` event carrying the
    /// request's context map.
    Fetch(FetchRequest),

    /// Arms a host timer that retires the oldest notification when it fires.
    ScheduleNotificationExpiry {
        /// Delay before the notification disappears.
        seconds: u32,
    },
}
