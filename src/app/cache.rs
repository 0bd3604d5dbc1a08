//! Size-one result cache backing stale-while-revalidate.
//!
//! Holds the most recent successfully decoded page together with the key it
//! answers. While a fetch for a different key is in flight the view keeps
//! rendering this page instead of collapsing to a bare loading indicator.

use crate::domain::ResultPage;
use crate::fetcher::RequestKey;

/// The last successful (key, page) pair.
#[derive(Debug, Clone, Default)]
pub struct LastGood {
    entry: Option<(RequestKey, ResultPage)>,
}

impl LastGood {
    /// Replaces the cached entry.
    ///
    /// The key and page are swapped in together; there is no state in which
    /// one belongs to a different fetch than the other.
    pub fn replace(&mut self, key: RequestKey, page: ResultPage) {
        self.entry = Some((key, page));
    }

    /// Returns `true` if the cached page answers `key`.
    #[must_use]
    pub fn holds(&self, key: &RequestKey) -> bool {
        self.entry.as_ref().is_some_and(|(cached, _)| cached == key)
    }

    /// The cached page regardless of key.
    #[must_use]
    pub fn page(&self) -> Option<&ResultPage> {
        self.entry.as_ref().map(|(_, page)| page)
    }

    /// The key of the cached page.
    #[must_use]
    pub fn key(&self) -> Option<&RequestKey> {
        self.entry.as_ref().map(|(key, _)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PageNumber, SearchQuery};

    fn key(query: &str, page: u32) -> RequestKey {
        RequestKey::new(SearchQuery::parse(query).unwrap(), PageNumber::new(page).unwrap())
    }

    fn page(total_pages: u32) -> ResultPage {
        ResultPage {
            page: 1,
            movies: vec![],
            total_pages,
            total_results: 0,
        }
    }

    #[test]
    fn starts_empty() {
        let cache = LastGood::default();
        assert!(cache.page().is_none());
        assert!(!cache.holds(&key("alien", 1)));
    }

    #[test]
    fn replacement_swaps_key_and_page_together() {
        let mut cache = LastGood::default();
        cache.replace(key("alien", 1), page(3));
        cache.replace(key("aliens", 2), page(7));

        assert!(!cache.holds(&key("alien", 1)));
        assert!(cache.holds(&key("aliens", 2)));
        assert_eq!(cache.key(), Some(&key("aliens", 2)));
        assert_eq!(cache.page().map(|p| p.total_pages), Some(7));
    }
}
