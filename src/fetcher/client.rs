//! Search request construction and response decoding.
//!
//! A Zellij plugin cannot block on I/O. A fetch is therefore split in two:
//! [`MovieFetcher::request`] builds a [`FetchRequest`] that the plugin shim
//! hands to the host's `web_request`, and [`MovieFetcher::decode`] turns the
//! host's `WebRequestResult` back into a [`ResultPage`].

use super::context::{RequestKey, RequestTag};
use super::wire;
use crate::domain::{FetchError, Result, ResultPage, ZinemaError};
use std::collections::BTreeMap;
use std::fmt;

/// Default TMDB API v3 base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

const SEARCH_PATH: &str = "/search/movie";

/// Connection settings for the search endpoint.
///
/// Built once from plugin configuration and injected into [`MovieFetcher`].
#[derive(Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    base_url: String,
    api_token: Option<String>,
    language: Option<String>,
    include_adult: Option<bool>,
}

impl FetcherConfig {
    /// Creates a configuration for `base_url` with an optional bearer token.
    ///
    /// Trailing slashes are stripped from the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ZinemaError::Config`] when `base_url` is not an `http://` or
    /// `https://` URL.
    pub fn new(base_url: &str, api_token: Option<String>) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ZinemaError::Config(format!(
                "api_base_url must start with http:// or https://, got {base_url:?}"
            )));
        }

        Ok(Self {
            base_url: base_url.to_string(),
            api_token: api_token.filter(|token| !token.trim().is_empty()),
            language: None,
            include_adult: None,
        })
    }

    /// Sets the `language` query parameter (e.g. `en-US`).
    #[must_use]
    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language.filter(|l| !l.is_empty());
        self
    }

    /// Sets the `include_adult` query parameter.
    #[must_use]
    pub const fn with_include_adult(mut self, include_adult: Option<bool>) -> Self {
        self.include_adult = include_adult;
        self
    }

    /// Returns `true` when a bearer token is configured.
    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.api_token.is_some()
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
            language: None,
            include_adult: None,
        }
    }
}

impl fmt::Debug for FetcherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetcherConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("language", &self.language)
            .field("include_adult", &self.include_adult)
            .finish()
    }
}

/// An outgoing HTTP GET, ready for the host's `web_request`.
#[derive(Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Fully encoded request URL.
    pub url: String,
    /// Request headers, including the bearer credential.
    pub headers: BTreeMap<String, String>,
    /// Context map echoed back with the response.
    pub context: BTreeMap<String, String>,
}

impl FetchRequest {
    /// Recovers the tag this request was built with.
    #[must_use]
    pub fn tag(&self) -> Option<RequestTag> {
        RequestTag::from_context(&self.context)
    }
}

impl fmt::Debug for FetchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: BTreeMap<&str, &str> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case("authorization") {
                    (name.as_str(), "<redacted>")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("FetchRequest")
            .field("url", &self.url)
            .field("headers", &headers)
            .field("context", &self.context)
            .finish()
    }
}

/// Result Fetcher for the TMDB movie search endpoint.
#[derive(Debug, Clone, Default)]
pub struct MovieFetcher {
    config: FetcherConfig,
}

impl MovieFetcher {
    /// Creates a fetcher bound to `config`.
    #[must_use]
    pub const fn new(config: FetcherConfig) -> Self {
        Self { config }
    }

    /// Returns the fetcher's configuration.
    #[must_use]
    pub const fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Builds the search URL for a key.
    ///
    /// # Example
    ///
    /// ```
    /// use zinema::domain::{PageNumber, SearchQuery};
    /// use zinema::fetcher::{FetcherConfig, MovieFetcher, RequestKey};
    ///
    /// let fetcher = MovieFetcher::new(FetcherConfig::default());
    /// let key = RequestKey::new(SearchQuery::parse("star wars").unwrap(), PageNumber::FIRST);
    /// assert_eq!(
    ///     fetcher.search_url(&key),
    ///     "https://api.themoviedb.org/3/search/movie?query=star%20wars&page=1"
    /// );
    /// ```
    #[must_use]
    pub fn search_url(&self, key: &RequestKey) -> String {
        let mut url = format!(
            "{}{SEARCH_PATH}?query={}&page={}",
            self.config.base_url,
            urlencoding::encode(key.query.as_str()),
            key.page
        );

        if let Some(language) = &self.config.language {
            url.push_str("&language=");
            url.push_str(&urlencoding::encode(language));
        }
        if let Some(include_adult) = self.config.include_adult {
            url.push_str(&format!("&include_adult={include_adult}"));
        }

        url
    }

    /// Builds the complete request for a tagged key.
    ///
    /// Without a configured token the `Authorization` header carries an empty
    /// bearer, and the API's 401 surfaces through [`Self::decode`].
    #[must_use]
    pub fn request(&self, tag: &RequestTag) -> FetchRequest {
        let mut headers = BTreeMap::new();
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.config.api_token.as_deref().unwrap_or_default()),
        );
        headers.insert("accept".to_string(), "application/json".to_string());

        FetchRequest {
            url: self.search_url(&tag.key),
            headers,
            context: tag.to_context(),
        }
    }

    /// Decodes a host `WebRequestResult` into a result page.
    ///
    /// # Errors
    ///
    /// See [`wire::decode_search`].
    pub fn decode(status: u16, body: &[u8]) -> std::result::Result<ResultPage, FetchError> {
        wire::decode_search(status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PageNumber, SearchQuery};

    fn tag(query: &str, page: u32) -> RequestTag {
        RequestTag::new(
            9,
            RequestKey::new(SearchQuery::parse(query).unwrap(), PageNumber::new(page).unwrap()),
        )
    }

    #[test]
    fn base_url_must_be_http() {
        assert!(matches!(
            FetcherConfig::new("ftp://example.com", None),
            Err(ZinemaError::Config(_))
        ));
        assert!(FetcherConfig::new("http://localhost:8080/", None).is_ok());
    }

    #[test]
    fn request_carries_bearer_and_parameters() {
        let config = FetcherConfig::new("https://api.example.test/3/", Some("s3cret".to_string()))
            .unwrap()
            .with_language(Some("de-DE".to_string()))
            .with_include_adult(Some(false));
        let fetcher = MovieFetcher::new(config);

        let request = fetcher.request(&tag("amélie & co", 2));

        assert_eq!(
            request.url,
            "https://api.example.test/3/search/movie?query=am%C3%A9lie%20%26%20co&page=2&language=de-DE&include_adult=false"
        );
        assert_eq!(request.headers.get("Authorization").map(String::as_str), Some("Bearer s3cret"));
        assert_eq!(request.headers.get("accept").map(String::as_str), Some("application/json"));
    }

    #[test]
    fn request_context_round_trips_the_key() {
        let fetcher = MovieFetcher::default();
        let original = tag("heat", 4);
        let request = fetcher.request(&original);

        assert_eq!(request.tag(), Some(original));
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let config = FetcherConfig::new(DEFAULT_BASE_URL, Some("  ".to_string())).unwrap();
        assert!(!config.has_token());

        let request = MovieFetcher::new(config).request(&tag("heat", 1));
        assert_eq!(request.headers.get("Authorization").map(String::as_str), Some("Bearer "));
    }

    #[test]
    fn debug_output_never_shows_the_token() {
        let config = FetcherConfig::new(DEFAULT_BASE_URL, Some("s3cret".to_string())).unwrap();
        let request = MovieFetcher::new(config.clone()).request(&tag("heat", 1));

        assert!(!format!("{config:?}").contains("s3cret"));
        assert!(!format!("{request:?}").contains("s3cret"));
    }
}
