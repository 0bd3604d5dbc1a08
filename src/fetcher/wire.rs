//! TMDB wire format for `search/movie`.
//!
//! These types mirror the JSON the API sends and are converted into domain
//! types immediately after decoding.

use crate::domain::{FetchError, MovieSummary, ResultPage};
use serde::Deserialize;

/// Longest error body echoed into a user-visible message.
const MAX_ERROR_BODY_CHARS: usize = 160;

/// Response from the `search/movie` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Current page number.
    pub page: u32,
    /// Search results.
    pub results: Vec<MovieRecord>,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of results.
    pub total_results: u32,
}

/// A single movie search result.
///
/// Only `id` is required. TMDB omits or nulls the rest for sparse entries,
/// which must not fail the whole page.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieRecord {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u32>,
    #[serde(default)]
    pub overview: Option<String>,
}

/// Error body TMDB sends with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
struct ApiErrorBody {
    status_message: Option<String>,
}

impl From<MovieRecord> for MovieSummary {
    fn from(record: MovieRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.unwrap_or_default(),
            original_title: record.original_title,
            poster_path: record.poster_path,
            release_date: record.release_date,
            vote_average: record.vote_average.unwrap_or_default(),
            vote_count: record.vote_count.unwrap_or_default(),
            overview: record.overview.unwrap_or_default(),
        }
    }
}

impl From<SearchResponse> for ResultPage {
    fn from(response: SearchResponse) -> Self {
        Self {
            page: response.page,
            movies: response.results.into_iter().map(MovieSummary::from).collect(),
            total_pages: response.total_pages,
            total_results: response.total_results,
        }
    }
}

/// Maps a host `WebRequestResult` (status + body) to a result page.
///
/// # Errors
///
/// - [`FetchError::Status`] for any status outside `200..=299`
/// - [`FetchError::Malformed`] when a 2xx body is not a search payload
pub fn decode_search(status: u16, body: &[u8]) -> Result<ResultPage, FetchError> {
    if !(200..=299).contains(&status) {
        return Err(FetchError::Status {
            status,
            message: error_message(body),
        });
    }

    serde_json::from_slice::<SearchResponse>(body)
        .map(ResultPage::from)
        .map_err(|e| FetchError::Malformed {
            reason: e.to_string(),
        })
}

/// Extracts a readable message from an error body.
///
/// Prefers TMDB's `status_message`. Falls back to the raw text (the Zellij
/// host puts transport errors there), then to a generic label.
fn error_message(body: &[u8]) -> String {
    if let Ok(ApiErrorBody {
        status_message: Some(message),
    }) = serde_json::from_slice(body)
    {
        return message;
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return "request failed".to_string();
    }

    if text.chars().count() > MAX_ERROR_BODY_CHARS {
        let truncated: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{truncated}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BATMAN_PAGE: &str = r#"{
        "page": 1,
        "results": [
            {
                "adult": false,
                "id": 268,
                "original_title": "Batman",
                "overview": "Batman must face his most ruthless nemesis.",
                "poster_path": "/cij4dd21v2Rk2YtUQbV5kW69WB2.jpg",
                "release_date": "1989-06-21",
                "title": "Batman",
                "vote_average": 7.2,
                "vote_count": 7800
            },
            { "id": 1, "title": "Sparse", "poster_path": null, "overview": null }
        ],
        "total_pages": 5,
        "total_results": 97
    }"#;

    #[test]
    fn success_body_becomes_a_result_page() {
        let page = decode_search(200, BATMAN_PAGE.as_bytes()).unwrap();

        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.total_results, 97);
        assert_eq!(page.movies.len(), 2);

        let batman = &page.movies[0];
        assert_eq!(batman.id, 268);
        assert_eq!(batman.title, "Batman");
        assert_eq!(batman.release_date.as_deref(), Some("1989-06-21"));
        assert_eq!(batman.vote_count, 7800);

        let sparse = &page.movies[1];
        assert_eq!(sparse.poster_path, None);
        assert_eq!(sparse.overview, "");
        assert!(sparse.vote_average.abs() < f64::EPSILON);
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let body = br#"{
            "page": 1,
            "results": [
                { "id": 1, "title": null, "vote_average": null, "vote_count": null, "release_date": null },
                { "id": 2, "title": "Alien", "vote_average": 8.1, "vote_count": 14000 }
            ],
            "total_pages": 1,
            "total_results": 2
        }"#;

        let page = decode_search(200, body).unwrap();
        assert_eq!(page.movies.len(), 2);

        let sparse = &page.movies[0];
        assert_eq!(sparse.title, "");
        assert_eq!(sparse.vote_count, 0);
        assert!(sparse.vote_average.abs() < f64::EPSILON);
        assert_eq!(sparse.release_date, None);
        assert_eq!(page.movies[1].title, "Alien");
    }

    #[test]
    fn unauthorized_uses_the_api_status_message() {
        let body = br#"{"status_code":7,"status_message":"Invalid API key: You must be granted a valid key.","success":false}"#;
        let err = decode_search(401, body).unwrap_err();

        assert_eq!(
            err,
            FetchError::Status {
                status: 401,
                message: "Invalid API key: You must be granted a valid key.".to_string(),
            }
        );
        assert!(err.is_unauthorized());
    }

    #[test]
    fn host_transport_errors_keep_their_text() {
        let err = decode_search(400, b"error sending request: dns error").unwrap_err();
        assert_eq!(
            err,
            FetchError::Status {
                status: 400,
                message: "error sending request: dns error".to_string(),
            }
        );
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(500);
        let Err(FetchError::Status { message, .. }) = decode_search(502, body.as_bytes()) else {
            panic!("expected a status error");
        };
        assert_eq!(message.len(), MAX_ERROR_BODY_CHARS + 3);
        assert!(message.ends_with("..."));
    }

    #[test]
    fn empty_error_body_gets_a_generic_message() {
        let err = decode_search(503, b"").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 503: request failed");
    }

    #[test]
    fn malformed_success_body_is_an_error() {
        for body in [&b"<html>oops</html>"[..], br#"{"page":1}"#, b""] {
            assert!(
                matches!(decode_search(200, body), Err(FetchError::Malformed { .. })),
                "{:?}",
                String::from_utf8_lossy(body)
            );
        }
    }
}
