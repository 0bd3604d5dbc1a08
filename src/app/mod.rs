//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain and
//! fetcher layers. It implements the event-driven search controller.
//!
//! # Architecture
//!
//! ```text
//! Host Event → Event → handle_event → State Mutations → Actions → Host Calls
//!                          ↑                                          ↓
//!                          └──────── WebRequestResult / Timer ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`cache`]: Size-one last-good result cache
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`keys`]: Key press to event mapping per input mode
//! - [`modes`]: Input, permission and fetch status types
//! - [`notifications`]: Transient notification queue
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod cache;
pub mod handler;
pub mod keys;
pub mod modes;
pub mod notifications;
pub mod state;

pub use actions::Action;
pub use cache::LastGood;
pub use handler::{handle_event, Event};
pub use modes::{FetchStatus, InputMode, WebAccess};
pub use notifications::{Notification, NotificationKind, Notifications};
pub use state::AppState;
