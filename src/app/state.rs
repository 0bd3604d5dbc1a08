//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin,
//! along with the search controller transitions (submission, pagination, response
//! acceptance, detail overlay) and UI view model generation. It is the single
//! source of truth for the current query, page, fetch status and selection.
//!
//! # Architecture
//!
//! `AppState` separates the *current key* (query and page) from the *displayed
//! data* (the [`LastGood`] cache). A fetch moves the key forward immediately;
//! the displayed page only changes when a response for the current key is
//! accepted. Anything a response carries for an older key is discarded.
//!
//! # View Model Computation
//!
//! The `compute_viewmodel` method transforms state into a renderable UI
//! representation, handling windowing, query match highlighting, and the
//! idle/loading/results/empty/error body selection.
//!
//! # Example
//!
//! ```rust
//! use zinema::app::AppState;
//! use zinema::fetcher::MovieFetcher;
//! use zinema::ui::theme::Theme;
//!
//! let state = AppState::new(MovieFetcher::default(), Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.detail.is_none());
//! ```

use super::cache::LastGood;
use super::modes::{FetchStatus, InputMode, WebAccess};
use super::notifications::{NotificationKind, Notifications, NO_RESULTS_MESSAGE};
use super::Action;
use crate::domain::{FetchError, MovieSummary, PageNumber, ResultPage, SearchQuery, ValidationError};
use crate::fetcher::{MovieFetcher, RequestKey, RequestTag};
use crate::ui::pagination::{page_window, MARGIN_PAGES_DISPLAYED, PAGE_RANGE_DISPLAYED};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailView, DisplayItem, FooterInfo, HeaderInfo, PaginationInfo, ResultsBody, ResultsView,
    SearchBarInfo, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Default lifetime of a notification, in seconds.
pub const DEFAULT_NOTIFICATION_SECONDS: u32 = 3;

/// Rows used by everything except the result table.
///
/// Blank line, header, border, search box (3), table headers, pagination,
/// notification line, border, footer and the trailing blank line.
const CHROME_ROWS: usize = 12;

/// Central application state container.
///
/// Mutated by the event handler in response to user input and host events.
/// View models are computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search box line buffer.
    ///
    /// Edited by `Char` and `Backspace` events. Only becomes the current query
    /// when submitted.
    pub input: String,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// The last accepted query. `None` until the first valid submission.
    pub query: Option<SearchQuery>,

    /// The active page for `query`.
    pub page: PageNumber,

    /// Progress of the fetch for the current key.
    pub fetch: FetchStatus,

    /// Last successful (key, page) pair, shown while newer fetches are pending.
    pub last_good: LastGood,

    /// Zero-based cursor within the displayed page.
    pub cursor: usize,

    /// Pending transient notifications.
    pub notifications: Notifications,

    /// Zellij web access permission state.
    pub web_access: WebAccess,

    /// How long each notification stays on screen.
    pub notification_seconds: u32,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    selected_movie: Option<MovieSummary>,
    fetcher: MovieFetcher,
    next_seq: u64,
}

impl AppState {
    /// Creates a new application state around a configured fetcher.
    ///
    /// The search box starts focused and web access starts pending until the
    /// host answers the permission request.
    #[must_use]
    pub fn new(fetcher: MovieFetcher, theme: Theme) -> Self {
        Self {
            input: String::new(),
            input_mode: InputMode::Typing,
            query: None,
            page: PageNumber::FIRST,
            fetch: FetchStatus::Idle,
            last_good: LastGood::default(),
            cursor: 0,
            notifications: Notifications::default(),
            web_access: WebAccess::Pending,
            notification_seconds: DEFAULT_NOTIFICATION_SECONDS,
            theme,
            selected_movie: None,
            fetcher,
            next_seq: 0,
        }
    }

    /// The (query, page) pair the UI currently asks for.
    #[must_use]
    pub fn current_key(&self) -> Option<RequestKey> {
        self.query
            .as_ref()
            .map(|query| RequestKey::new(query.clone(), self.page))
    }

    /// The movie shown in the detail overlay, if open.
    #[must_use]
    pub const fn selected_movie(&self) -> Option<&MovieSummary> {
        self.selected_movie.as_ref()
    }

    /// The fetcher requests are built with.
    #[must_use]
    pub const fn fetcher(&self) -> &MovieFetcher {
        &self.fetcher
    }

    /// Queues a notification and returns the timer action that retires it.
    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) -> Action {
        self.notifications.push(kind, message);
        Action::ScheduleNotificationExpiry {
            seconds: self.notification_seconds,
        }
    }

    /// Brings the fetch status in line with the current key.
    ///
    /// Returns the request to send, if one is needed. A key the last-good
    /// cache already answers, or one already on the wire, issues nothing.
    pub fn sync_fetch(&mut self) -> Option<Action> {
        let Some(key) = self.current_key() else {
            self.fetch = FetchStatus::Idle;
            return None;
        };

        if self.last_good.holds(&key) {
            tracing::debug!(query = %key.query, page = %key.page, "key already loaded");
            self.fetch = FetchStatus::Loaded;
            return None;
        }

        if let FetchStatus::InFlight { key: in_flight, .. } = &self.fetch {
            if *in_flight == key {
                tracing::debug!(query = %key.query, page = %key.page, "request already in flight");
                return None;
            }
        }

        match self.web_access {
            WebAccess::Pending => {
                tracing::debug!("holding request until web access is granted");
                self.fetch = FetchStatus::AwaitingPermission;
                None
            }
            WebAccess::Denied => {
                self.fetch = FetchStatus::Failed(FetchError::PermissionDenied);
                None
            }
            WebAccess::Granted => {
                self.next_seq += 1;
                let seq = self.next_seq;
                let tag = RequestTag::new(seq, key.clone());
                let request = self.fetcher.request(&tag);

                tracing::debug!(
                    seq = seq,
                    query = %key.query,
                    page = %key.page,
                    "issuing search request"
                );

                self.fetch = FetchStatus::InFlight { seq, key };
                Some(Action::Fetch(request))
            }
        }
    }

    /// Submits the input buffer as the new query.
    ///
    /// A blank buffer raises the validation notification and changes nothing
    /// else. A valid query resets the page to 1, moves focus to the grid and
    /// starts a fetch unless the key is already covered.
    pub fn submit_query(&mut self) -> Vec<Action> {
        let query = match SearchQuery::parse(&self.input) {
            Ok(query) => query,
            Err(err @ ValidationError::EmptyQuery) => {
                tracing::debug!("rejected blank query");
                return vec![self.notify(NotificationKind::Error, err.to_string())];
            }
        };

        tracing::debug!(query = %query, "query submitted");

        self.input = query.as_str().to_string();
        self.query = Some(query);
        self.page = PageNumber::FIRST;
        self.input_mode = InputMode::Browsing;

        self.sync_fetch().into_iter().collect()
    }

    /// Applies a host response to state.
    ///
    /// The response is only accepted if its tag names the key currently in
    /// flight; anything else is logged and dropped without touching state.
    /// Returns `None` for a discarded response, otherwise the follow-up
    /// actions (a notification timer for an empty result).
    pub fn accept_response(&mut self, tag: &RequestTag, status: u16, body: &[u8]) -> Option<Vec<Action>> {
        let expected = match &self.fetch {
            FetchStatus::InFlight { seq, key } if *key == tag.key => *seq,
            _ => {
                tracing::debug!(
                    seq = tag.seq,
                    query = %tag.key.query,
                    page = %tag.key.page,
                    "stale response discarded"
                );
                return None;
            }
        };

        if expected != tag.seq {
            tracing::debug!(seq = tag.seq, expected = expected, "accepting response from an earlier request for the same key");
        }

        match MovieFetcher::decode(status, body) {
            Ok(page) => {
                tracing::debug!(
                    seq = tag.seq,
                    status = status,
                    results = page.movies.len(),
                    total_pages = page.total_pages,
                    "search response accepted"
                );

                let empty = page.is_empty();
                self.last_good.replace(tag.key.clone(), page);
                self.fetch = FetchStatus::Loaded;
                self.cursor = 0;

                if empty {
                    return Some(vec![self.notify(NotificationKind::Info, NO_RESULTS_MESSAGE)]);
                }
                Some(vec![])
            }
            Err(err) => {
                tracing::warn!(seq = tag.seq, status = status, error = %err, "search request failed");
                self.fetch = FetchStatus::Failed(err);
                Some(vec![])
            }
        }
    }

    /// The page currently on screen, if results are showing.
    ///
    /// While a newer key is pending this is the previous page
    /// (stale-while-revalidate). Failed and idle states show nothing.
    #[must_use]
    pub fn displayed_page(&self) -> Option<&ResultPage> {
        match self.fetch {
            FetchStatus::Loaded | FetchStatus::InFlight { .. } | FetchStatus::AwaitingPermission => {
                self.last_good.page()
            }
            FetchStatus::Idle | FetchStatus::Failed(_) => None,
        }
    }

    /// Total pages navigable for the current query.
    ///
    /// Page controls are only live when the displayed results belong to the
    /// current query.
    fn navigable_pages(&self) -> Option<u32> {
        let query = self.query.as_ref()?;
        if matches!(self.fetch, FetchStatus::Failed(_) | FetchStatus::Idle) {
            return None;
        }
        let key = self.last_good.key()?;
        if key.query != *query {
            return None;
        }
        self.last_good
            .page()
            .filter(|page| !page.is_empty())
            .map(|page| page.total_pages)
    }

    /// Moves to `target` and fetches it. No-op when the page is unchanged.
    fn go_to_page(&mut self, target: PageNumber) -> Option<Vec<Action>> {
        if target == self.page {
            return None;
        }
        tracing::debug!(from = %self.page, to = %target, "changing page");
        self.page = target;
        Some(self.sync_fetch().into_iter().collect())
    }

    /// Advances one page. Returns `None` when nothing changed.
    pub fn next_page(&mut self) -> Option<Vec<Action>> {
        let total = self.navigable_pages()?;
        let target = self.page.next_within(total)?;
        self.go_to_page(target)
    }

    /// Goes back one page. Returns `None` when nothing changed.
    pub fn previous_page(&mut self) -> Option<Vec<Action>> {
        self.navigable_pages()?;
        let target = self.page.previous()?;
        self.go_to_page(target)
    }

    /// Jumps to page 1. Returns `None` when nothing changed.
    pub fn first_page(&mut self) -> Option<Vec<Action>> {
        self.navigable_pages()?;
        self.go_to_page(PageNumber::FIRST)
    }

    /// Jumps to the last page. Returns `None` when nothing changed.
    pub fn last_page(&mut self) -> Option<Vec<Action>> {
        let total = self.navigable_pages()?;
        self.go_to_page(PageNumber::last_of(total))
    }

    /// Moves the grid cursor down by one position, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let Some(len) = self.displayed_page().map(|page| page.movies.len()) else {
            return;
        };
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
    }

    /// Moves the grid cursor up by one position, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let Some(len) = self.displayed_page().map(|page| page.movies.len()) else {
            return;
        };
        if len == 0 {
            return;
        }
        if self.cursor == 0 {
            self.cursor = len - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Returns the movie under the cursor, if any.
    #[must_use]
    pub fn movie_at_cursor(&self) -> Option<&MovieSummary> {
        self.displayed_page()?.movies.get(self.cursor)
    }

    /// Opens the detail overlay for the movie under the cursor.
    ///
    /// Returns `true` if an overlay was opened. Query, page and fetch state are
    /// left untouched.
    pub fn open_detail(&mut self) -> bool {
        let Some(movie) = self.movie_at_cursor().cloned() else {
            return false;
        };
        tracing::debug!(movie_id = movie.id, title = %movie.title, "opening detail");
        self.selected_movie = Some(movie);
        true
    }

    /// Closes the detail overlay. Returns `true` if one was open.
    pub fn close_detail(&mut self) -> bool {
        self.selected_movie.take().is_some()
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate available rows after subtracting UI chrome
    /// 2. Center window around the cursor
    /// 3. Adjust window if near start/end to maximize visible items
    /// 4. Compute relative selection index within visible window
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            body: self.compute_body(rows, cols),
            detail: self.selected_movie.as_ref().map(DetailView::from),
            notification: self.notifications.current().cloned(),
            footer: self.compute_footer(),
        }
    }

    fn compute_body(&self, rows: usize, cols: usize) -> ResultsBody {
        let query_text = || self.query.as_ref().map(ToString::to_string).unwrap_or_default();

        if let FetchStatus::Failed(err) = &self.fetch {
            return ResultsBody::Error {
                message: "There was an error, please try again...".to_string(),
                detail: Self::error_detail(err),
            };
        }

        let Some(page) = self.displayed_page() else {
            return if self.fetch.is_pending() {
                ResultsBody::Loading { query: query_text() }
            } else {
                ResultsBody::Idle
            };
        };

        if page.is_empty() {
            if self.fetch.is_pending() {
                return ResultsBody::Loading { query: query_text() };
            }
            return ResultsBody::Empty { query: query_text() };
        }

        ResultsBody::Results(self.compute_results(page, rows, cols))
    }

    fn error_detail(err: &FetchError) -> String {
        if err.is_unauthorized() {
            format!("{err}. Check the api_token setting in the plugin configuration.")
        } else if *err == FetchError::PermissionDenied {
            format!("{err}. Reload the plugin and grant web access to search.")
        } else {
            format!("{err}. Submit the query again to retry.")
        }
    }

    fn compute_results(&self, page: &ResultPage, rows: usize, cols: usize) -> ResultsView {
        let available_rows = Self::calculate_available_rows(rows);
        let len = page.movies.len();
        let cursor = self.cursor.min(len.saturating_sub(1));

        let mut visible_start = cursor.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(len);

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && len >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let matcher = self.query.as_ref().map(|_| SkimMatcherV2::default());
        let title_width = crate::ui::helpers::title_column_width(cols);

        let items: Vec<DisplayItem> = page.movies[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, movie)| {
                let absolute_idx = visible_start + relative_idx;
                self.compute_display_item(movie, absolute_idx == cursor, title_width, matcher.as_ref())
            })
            .collect();

        let displayed_page = self
            .last_good
            .key()
            .map_or(page.page, |key| key.page.get());
        let is_stale = self
            .current_key()
            .is_some_and(|key| !self.last_good.holds(&key));

        ResultsView {
            rows: items,
            selected_index: cursor.saturating_sub(visible_start),
            item_count: len,
            pagination: Self::compute_pagination(displayed_page, page.total_pages),
            is_stale,
        }
    }

    /// The strip reports the server's page count; only navigation stops at
    /// the API's last reachable page.
    fn compute_pagination(current: u32, total_pages: u32) -> PaginationInfo {
        let total = total_pages.max(1);
        let reachable = PageNumber::last_of(total_pages).get();
        let current = current.clamp(1, total);
        PaginationInfo {
            current,
            total_pages: total,
            slots: page_window(current, total, PAGE_RANGE_DISPLAYED, MARGIN_PAGES_DISPLAYED),
            has_previous: current > 1,
            has_next: current < reachable,
        }
    }

    fn compute_display_item(
        &self,
        movie: &MovieSummary,
        is_selected: bool,
        title_width: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> DisplayItem {
        let title = crate::ui::helpers::truncate(&movie.title, title_width);
        let highlight_ranges = matcher.map_or_else(Vec::new, |m| {
            let visible = title.chars().count();
            self.compute_highlight_ranges(&movie.title, m)
                .into_iter()
                .filter(|(start, _)| *start < visible)
                .map(|(start, end)| (start, end.min(visible)))
                .collect()
        });

        DisplayItem {
            title,
            year: movie.release_year().map(|y| y.to_string()).unwrap_or_default(),
            rating: format!("{:.1}", movie.vote_average),
            is_selected,
            highlight_ranges,
        }
    }

    /// Computes character index ranges of `text` matching the current query.
    ///
    /// Consecutive match indices are coalesced into `(start, end)` ranges with
    /// an exclusive end.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let Some(query) = &self.query else {
            return vec![];
        };

        let Some((_score, indices)) = matcher.fuzzy_indices(text, query.as_str()) else {
            return vec![];
        };

        let mut ranges = Vec::new();
        let mut start = None;
        let mut prev = None;

        for &idx in &indices {
            match (start, prev) {
                (None, _) => {
                    start = Some(idx);
                    prev = Some(idx);
                }
                (Some(_), Some(p)) if idx == p + 1 => {
                    prev = Some(idx);
                }
                (Some(s), Some(p)) => {
                    ranges.push((s, p + 1));
                    start = Some(idx);
                    prev = Some(idx);
                }
                _ => {}
            }
        }

        if let (Some(s), Some(p)) = (start, prev) {
            ranges.push((s, p + 1));
        }

        ranges
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match (&self.query, self.displayed_page()) {
            (Some(query), Some(page)) if !page.is_empty() => format!(
                " Zinema: \"{query}\" ({} results, page {}/{}) ",
                page.total_results,
                self.last_good.key().map_or(page.page, |key| key.page.get()),
                page.total_pages
            ),
            (Some(query), _) => format!(" Zinema: \"{query}\" "),
            (None, _) => " Zinema ".to_string(),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.selected_movie.is_some() {
            "ESC/Enter/q: close details"
        } else {
            match self.input_mode {
                InputMode::Typing => "Type to edit  Enter: search  ESC: browse results",
                InputMode::Browsing => {
                    "j/k: move  h/l: page  g/G: first/last  Enter: details  /: search  q: quit"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        SearchBarInfo {
            query: self.input.clone(),
            is_focused: self.input_mode == InputMode::Typing && self.selected_movie.is_none(),
        }
    }

    const fn calculate_available_rows(total_rows: usize) -> usize {
        let available = total_rows.saturating_sub(CHROME_ROWS);
        if available == 0 {
            1
        } else {
            available
        }
    }
}
