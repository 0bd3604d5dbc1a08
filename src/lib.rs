//! Zinema: a Zellij plugin for searching movies on The Movie Database.
//!
//! Type a title, press Enter, and browse the matching movies as a paginated
//! table right inside a Zellij pane:
//! - One TMDB `search/movie` request per (query, page), sent through Zellij's
//!   `web_request` host call
//! - Windowed page strip with first/previous/next/last navigation
//! - Detail overlay with release date, rating, poster link and overview
//! - Transient notifications for rejected queries and empty results
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Host events / host calls
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Search controller
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Fetcher       │   │ Domain        │
//! │ (ui/)         │   │ (fetcher/)    │   │ (domain/)     │
//! │ - Rendering   │   │ - Request     │   │ - Query, page │
//! │ - Theming     │   │ - Decode      │   │ - Movies      │
//! │ - Pagination  │   │ - Tagging     │   │ - Errors      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure (paths) and Observability (OTLP)    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zinema.wasm" {
//!         api_token "eyJhbGciOiJIUzI1NiJ9..."
//!         language "en-US"
//!         include_adult "false"
//!         notification_seconds "3"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    build `AppState`, request web access, subscribe to events
//! 2. **Submit**: the query is validated and a tagged request is issued
//! 3. **Response**: `WebRequestResult` is matched to the current key, decoded
//!    and stored, or discarded if the user has moved on
//! 4. **Render**: view model computed from state, components print ANSI
//!
//! # Example
//!
//! ```rust
//! use zinema::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for c in "alien".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_render, _actions) = handle_event(&mut state, &Event::Submit)?;
//! assert_eq!(state.query.as_ref().map(|q| q.as_str()), Some("alien"));
//! # Ok::<(), zinema::ZinemaError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod fetcher;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{FetchError, Result, ValidationError, ZinemaError};
pub use fetcher::{FetcherConfig, MovieFetcher, DEFAULT_BASE_URL};
pub use ui::Theme;

use app::state::DEFAULT_NOTIFICATION_SECONDS;
use std::collections::BTreeMap;
use std::fmt;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/zinema.wasm" {
///     api_token "eyJhbGciOiJIUzI1NiJ9..."
///     api_base_url "https://api.themoviedb.org/3"
///     theme_file "~/.config/zinema/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Clone, Default)]
pub struct Config {
    /// TMDB v4 read access token, sent as a bearer credential.
    pub api_token: Option<String>,

    /// API base URL. Default: [`DEFAULT_BASE_URL`].
    pub api_base_url: Option<String>,

    /// `language` query parameter, e.g. `en-US`.
    pub language: Option<String>,

    /// `include_adult` query parameter. Omitted when unset.
    pub include_adult: Option<bool>,

    /// Notification lifetime in seconds. Default: 3.
    pub notification_seconds: Option<u32>,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url)
            .field("language", &self.language)
            .field("include_adult", &self.include_adult)
            .field("notification_seconds", &self.notification_seconds)
            .field("theme_name", &self.theme_name)
            .field("theme_file", &self.theme_file)
            .field("trace_level", &self.trace_level)
            .finish()
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as unset. `include_adult` accepts `true`/`false`
    /// and `notification_seconds` a positive integer; anything else falls
    /// back to the default.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zinema::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_token".to_string(), "secret".to_string());
    /// map.insert("include_adult".to_string(), "false".to_string());
    /// map.insert("notification_seconds".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_token.as_deref(), Some("secret"));
    /// assert_eq!(config.include_adult, Some(false));
    /// assert_eq!(config.notification_seconds, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            api_token: get("api_token"),
            api_base_url: get("api_base_url"),
            language: get("language"),
            include_adult: get("include_adult").and_then(|v| v.parse::<bool>().ok()),
            notification_seconds: get("notification_seconds")
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|seconds| *seconds > 0),
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }

    /// Builds the fetcher configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ZinemaError::Config`] when `api_base_url` is not an HTTP URL.
    pub fn fetcher_config(&self) -> Result<FetcherConfig> {
        let base_url = self.api_base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        Ok(FetcherConfig::new(base_url, self.api_token.clone())?
            .with_language(self.language.clone())
            .with_include_adult(self.include_adult))
    }

    /// Loads the configured theme, falling back to the default on any failure.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Initializes the plugin state from configuration.
///
/// Configuration problems never abort the plugin: an invalid base URL falls
/// back to the TMDB default and a missing token is logged, after which every
/// search surfaces the API's 401 in the error view.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(config = ?config, "initializing zinema plugin");

    let fetcher_config = config
        .fetcher_config()
        .or_else(|e| {
            tracing::warn!(error = %e, fallback = DEFAULT_BASE_URL, "invalid api_base_url, using the default");
            Config {
                api_base_url: None,
                ..config.clone()
            }
            .fetcher_config()
        })
        .unwrap_or_default();

    if !fetcher_config.has_token() {
        tracing::warn!("no api_token configured; searches will be rejected by the API");
    }

    let mut state = AppState::new(MovieFetcher::new(fetcher_config), config.theme());
    state.notification_seconds = config
        .notification_seconds
        .unwrap_or(DEFAULT_NOTIFICATION_SECONDS);
    state
}
