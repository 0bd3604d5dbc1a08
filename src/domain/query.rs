//! Search query and page number value types.
//!
//! Both types are only constructible in a valid state, so the rest of the
//! plugin never has to re-check "is the query empty?" or "is the page zero?".

use super::error::ValidationError;
use std::fmt;

/// Highest page TMDB will serve for a search, regardless of `total_pages`.
pub const MAX_API_PAGE: u32 = 500;

/// A non-empty, trimmed search query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trims the raw input and rejects it when nothing remains.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyQuery`] for empty or whitespace-only
    /// input.
    ///
    /// # Example
    ///
    /// ```
    /// use zinema::domain::SearchQuery;
    ///
    /// let query = SearchQuery::parse("  batman ").unwrap();
    /// assert_eq!(query.as_str(), "batman");
    /// assert!(SearchQuery::parse(" \t").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A 1-based page index into a paginated result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(u32);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(1);

    /// Creates a page number, rejecting zero.
    #[must_use]
    pub const fn new(page: u32) -> Option<Self> {
        if page == 0 {
            None
        } else {
            Some(Self(page))
        }
    }

    /// Returns the raw page index.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Highest navigable page for a result set reporting `total_pages`.
    ///
    /// Capped at [`MAX_API_PAGE`]. Returns [`PageNumber::FIRST`] when the
    /// result set is empty.
    #[must_use]
    pub fn last_of(total_pages: u32) -> Self {
        Self(total_pages.clamp(1, MAX_API_PAGE))
    }

    /// The following page, or `None` past the last page.
    #[must_use]
    pub fn next_within(self, total_pages: u32) -> Option<Self> {
        let next = self.0.checked_add(1)?;
        (next <= Self::last_of(total_pages).0).then_some(Self(next))
    }

    /// The preceding page, or `None` on the first page.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        Self::new(self.0 - 1)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let query = SearchQuery::parse("\n  the matrix  ").unwrap();
        assert_eq!(query.as_str(), "the matrix");
        assert_eq!(query.to_string(), "the matrix");
    }

    #[test]
    fn parse_rejects_blank_input() {
        for raw in ["", " ", "\t\n", "   \u{3000}"] {
            assert_eq!(SearchQuery::parse(raw), Err(ValidationError::EmptyQuery), "{raw:?}");
        }
    }

    #[test]
    fn page_zero_is_not_a_page() {
        assert!(PageNumber::new(0).is_none());
        assert_eq!(PageNumber::new(3).map(PageNumber::get), Some(3));
    }

    #[test]
    fn next_stops_at_total_pages() {
        let page = PageNumber::new(4).unwrap();
        assert_eq!(page.next_within(5), PageNumber::new(5));
        assert_eq!(PageNumber::new(5).unwrap().next_within(5), None);
    }

    #[test]
    fn previous_stops_at_first_page() {
        assert_eq!(PageNumber::new(2).unwrap().previous(), Some(PageNumber::FIRST));
        assert_eq!(PageNumber::FIRST.previous(), None);
    }

    #[test]
    fn last_page_is_capped_by_the_api_limit() {
        assert_eq!(PageNumber::last_of(0), PageNumber::FIRST);
        assert_eq!(PageNumber::last_of(12).get(), 12);
        assert_eq!(PageNumber::last_of(9_000).get(), MAX_API_PAGE);
        assert_eq!(PageNumber::new(MAX_API_PAGE).unwrap().next_within(9_000), None);
    }
}
