//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Zinema library
//! and the Zellij plugin system. It implements the `ZellijPlugin` trait, turns
//! host events into library events and library actions into host calls.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │      Zellij Main Thread      │
//! │  ┌────────────────────────┐  │
//! │  │     State (plugin)     │  │  ← UI state, event handling
//! │  └────────────────────────┘  │
//! │        │            ▲        │
//! │  web_request   WebRequestResult
//! │        ▼            │        │
//! │  ┌────────────────────────┐  │
//! │  │   Zellij web client    │  │  ← HTTP to api.themoviedb.org
//! │  └────────────────────────┘  │
//! └──────────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`; searches wait until it is answered
//! 3. **Subscribe**: Register for Key, `WebRequestResult`, `Timer` and
//!    `PermissionRequestResult` events
//! 4. **Update**: Handle events, delegate to library layer, run actions
//! 5. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Key(..)` → query input, grid, paging or detail events (see below)
//! - `WebRequestResult` → `Event::FetchCompleted { context, status, body }`
//! - `Timer` → `Event::NotificationExpired`
//! - `PermissionRequestResult` → `Event::PermissionsGranted` / `PermissionsDenied`
//!
//! # Keybindings
//!
//! Global (outside the detail overlay):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! In typing mode:
//! - Characters: Type into the search box
//! - `Enter`: Submit query
//! - `Backspace`: Delete character
//! - `Esc`: Switch to browsing
//!
//! In browsing mode:
//! - `j`/`Down`: Move down
//! - `k`/`Up`: Move up
//! - `Enter`: Open details
//! - `l`/`Right`: Next page
//! - `h`/`Left`: Previous page
//! - `g`: First page
//! - `G` (shift): Last page
//! - `/`: Edit query
//! - `q`/`Esc`: Close plugin
//!
//! In the detail overlay:
//! - `Esc`/`Enter`/`q`: Close overlay

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use std::collections::BTreeMap;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
use zinema::app::keys::map_key;
#[cfg(target_family = "wasm")]
use zinema::{handle_event, Action, Config, Event};

// Register plugin with Zellij
#[cfg(target_family = "wasm")]
register_plugin!(State);

/// Native builds only link the library; the plugin itself targets wasm.
#[cfg(not(target_family = "wasm"))]
fn main() {}

/// Plugin state wrapper.
///
/// Wraps the library's `AppState`. All search state lives there; the wrapper
/// only owns what is needed to talk to Zellij.
#[cfg(target_family = "wasm")]
struct State {
    /// Core application state from library layer.
    app: zinema::AppState,
}

#[cfg(target_family = "wasm")]
impl Default for State {
    fn default() -> Self {
        Self {
            app: zinema::initialize(&Config::default()),
        }
    }
}

#[cfg(target_family = "wasm")]
impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Called once during plugin startup. Parses configuration, initializes
    /// application state, requests permissions and subscribes to events.
    ///
    /// # Tracing
    ///
    /// The entire load process is instrumented with OpenTelemetry spans.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `WebAccess`: Send search requests to the movie API
    ///
    /// # Subscriptions
    ///
    /// - `Key`: Keyboard input
    /// - `WebRequestResult`: Search responses
    /// - `Timer`: Notification expiry
    /// - `PermissionRequestResult`: Answer to the permission prompt
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zinema::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        tracing::debug!(config = ?config, "parsed configuration");
        self.app = zinema::initialize(&config);
        tracing::debug!("app state initialized");

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess]);

        tracing::debug!("subscribing to events");
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to `handle_event`,
    /// and executes resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        tracing::debug!(event = %event_name, "processing event");

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                tracing::debug!(status = status, body_len = body.len(), "web request result");
                Event::FetchCompleted {
                    context,
                    status,
                    body,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::NotificationExpired,
            zellij_tile::prelude::Event::PermissionRequestResult(status) => match status {
                PermissionStatus::Granted => Event::PermissionsGranted,
                PermissionStatus::Denied => Event::PermissionsDenied,
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Delegates to the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        zinema::ui::render(&self.app, rows, cols);
    }
}

#[cfg(target_family = "wasm")]
impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(key = ?key, "key event");
        map_key(key, self.app.input_mode, self.app.selected_movie().is_some())
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Close plugin pane
    /// - `Fetch`: Send the search request through the host's web client
    /// - `ScheduleNotificationExpiry`: Arm a timer for the oldest notification
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Fetch(request) => {
                tracing::debug!(url = %request.url, "sending search request");
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    request.headers.clone(),
                    vec![],
                    request.context.clone(),
                );
            }
            Action::ScheduleNotificationExpiry { seconds } => {
                tracing::debug!(seconds = seconds, "scheduling notification expiry");
                set_timeout(f64::from(*seconds));
            }
        }
    }
}
