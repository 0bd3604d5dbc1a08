//! Movie and result page domain models.
//!
//! [`MovieSummary`] is one search hit as the rest of the plugin sees it. The
//! TMDB wire format lives in `fetcher::wire` and is converted into these types
//! once, at the decode boundary.

use chrono::{Datelike, NaiveDate};

/// Base URL for poster images served by the TMDB image CDN.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Poster size used for the detail overlay link.
pub const POSTER_SIZE: &str = "w500";

/// One movie in a search result page.
///
/// All fields are passed through from the API. Optional values stay `None`
/// rather than being invented.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    pub original_title: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: f64,
    pub vote_count: u32,
    pub overview: String,
}

impl MovieSummary {
    /// Parses `release_date` (`YYYY-MM-DD`) into a calendar date.
    ///
    /// TMDB sends an empty string for unreleased titles, which yields `None`.
    #[must_use]
    pub fn released_on(&self) -> Option<NaiveDate> {
        self.release_date
            .as_deref()
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
    }

    /// Release year, if the date is known.
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        self.released_on().map(|date| date.year())
    }

    /// Long-form release date for the detail overlay, e.g. `July 16, 2008`.
    #[must_use]
    pub fn release_date_display(&self) -> String {
        self.released_on()
            .map_or_else(|| "Unknown".to_string(), |date| date.format("%B %-d, %Y").to_string())
    }

    /// Vote average with one decimal, e.g. `8.5/10`.
    #[must_use]
    pub fn rating_display(&self) -> String {
        format!("{:.1}/10", self.vote_average)
    }

    /// Full poster URL at [`POSTER_SIZE`], if the movie has a poster.
    #[must_use]
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{POSTER_BASE_URL}/{POSTER_SIZE}{path}"))
    }

    /// Original title, only when it differs from the localized one.
    #[must_use]
    pub fn distinct_original_title(&self) -> Option<&str> {
        self.original_title
            .as_deref()
            .filter(|original| *original != self.title)
    }
}

/// One page of search results plus pagination totals.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage {
    /// Page number echoed back by the server.
    pub page: u32,
    /// Results in server order.
    pub movies: Vec<MovieSummary>,
    /// Total number of pages for the query.
    pub total_pages: u32,
    /// Total number of matching movies.
    pub total_results: u32,
}

impl ResultPage {
    /// Returns `true` when the page carries no movies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
