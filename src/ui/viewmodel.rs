//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data, so
//! every rendering decision can be asserted on without a terminal.
//!
//! # Example
//!
//! ```rust
//! use zinema::ui::viewmodel::{ResultsBody, UIViewModel};
//!
//! fn is_showing_results(vm: &UIViewModel) -> bool {
//!     matches!(vm.body, ResultsBody::Results(_))
//! }
//! ```

use crate::app::notifications::Notification;
use crate::domain::MovieSummary;
use crate::ui::pagination::PageSlot;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (title, result totals).
    pub header: HeaderInfo,

    /// Search input box.
    pub search_bar: SearchBarInfo,

    /// What the results area shows.
    pub body: ResultsBody,

    /// Detail overlay for the selected movie, drawn over everything else.
    pub detail: Option<DetailView>,

    /// Transient notification currently on screen.
    pub notification: Option<Notification>,

    /// Footer information (keybindings).
    pub footer: FooterInfo,
}

/// The rendered state of the results area.
#[derive(Debug, Clone)]
pub enum ResultsBody {
    /// No query submitted yet.
    Idle,

    /// A fetch is pending and there is nothing to show in the meantime.
    Loading {
        /// Query being fetched.
        query: String,
    },

    /// The search succeeded with zero movies.
    Empty {
        /// Query that matched nothing.
        query: String,
    },

    /// The fetch failed.
    Error {
        /// Primary message.
        message: String,
        /// Failure detail and recovery hint.
        detail: String,
    },

    /// A page of movies with pagination.
    Results(ResultsView),
}

/// A page of results, windowed to the available rows.
#[derive(Debug, Clone)]
pub struct ResultsView {
    /// Visible rows.
    pub rows: Vec<DisplayItem>,

    /// Index of the cursor row within `rows`.
    pub selected_index: usize,

    /// Number of movies on the page, visible or not.
    pub item_count: usize,

    /// Page strip state.
    pub pagination: PaginationInfo,

    /// `true` while these results belong to a previous key and a newer fetch
    /// is still in flight.
    pub is_stale: bool,
}

/// Display information for a single movie row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Movie title, truncated to the title column.
    pub title: String,

    /// Release year, or blank when unknown.
    pub year: String,

    /// Vote average, one decimal.
    pub rating: String,

    /// Whether this row has the cursor.
    pub is_selected: bool,

    /// Character ranges of the title matching the query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Pagination control state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Active page.
    pub current: u32,

    /// Total navigable pages.
    pub total_pages: u32,

    /// Windowed page numbers.
    pub slots: Vec<PageSlot>,

    /// Whether the previous arrow is enabled.
    pub has_previous: bool,

    /// Whether the next arrow is enabled.
    pub has_next: bool,
}

/// Every field of the selected movie, formatted for the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub original_title: Option<String>,
    pub release_date: String,
    pub rating: String,
    pub vote_count: u32,
    pub poster_url: Option<String>,
    pub overview: String,
}

impl From<&MovieSummary> for DetailView {
    fn from(movie: &MovieSummary) -> Self {
        Self {
            title: movie.title.clone(),
            original_title: movie.distinct_original_title().map(String::from),
            release_date: movie.release_date_display(),
            rating: movie.rating_display(),
            vote_count: movie.vote_count,
            poster_url: movie.poster_url(),
            overview: if movie.overview.trim().is_empty() {
                "No overview available.".to_string()
            } else {
                movie.overview.clone()
            },
        }
    }
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Search input box state.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current input buffer.
    pub query: String,

    /// Whether keystrokes go to the input.
    pub is_focused: bool,
}
