//! Input, permission and fetch status state types.
//!
//! These enums decide which keybindings are active and which of the idle,
//! loading, results, empty and error views is rendered.
//!
//! # Example
//!
//! ```rust
//! use zinema::app::modes::{FetchStatus, InputMode};
//!
//! let input_mode = InputMode::Typing;
//! assert_eq!(FetchStatus::default(), FetchStatus::Idle);
//! ```

use crate::domain::FetchError;
use crate::fetcher::RequestKey;

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// The search box has focus.
    ///
    /// Characters edit the query, Enter submits, Esc switches to browsing.
    Typing,

    /// The result grid has focus.
    ///
    /// Available keybindings: j/k (move), h/l (page), g/G (first/last page),
    /// Enter (details), / (edit query), q (quit).
    Browsing,
}

/// State of Zellij's web access permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebAccess {
    /// The permission prompt has not been answered yet. Fetches wait.
    Pending,
    /// Requests may be issued.
    Granted,
    /// The user declined. Every fetch fails immediately.
    Denied,
}

/// Progress of the fetch for the current (query, page) key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// No query has been submitted.
    #[default]
    Idle,

    /// A key is set but the request is held until web access is granted.
    AwaitingPermission,

    /// A request for `key` is on the wire.
    InFlight {
        /// Request sequence number, for logs.
        seq: u64,
        /// Key the response must match to be accepted.
        key: RequestKey,
    },

    /// The last-good cache holds the page for the current key.
    Loaded,

    /// The fetch for the current key failed.
    Failed(FetchError),
}

impl FetchStatus {
    /// Returns `true` while the current key has no answer yet.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::InFlight { .. } | Self::AwaitingPermission)
    }
}
