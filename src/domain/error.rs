//! Error types for the Zinema plugin.
//!
//! Three layers of failure exist:
//!
//! - [`ValidationError`]: the user submitted something the search box rejects.
//!   Recovered locally with a transient notification.
//! - [`FetchError`]: a search request did not produce a usable result page.
//!   Rendered as a persistent error state in the results area.
//! - [`ZinemaError`]: the crate-wide error, wrapping the two above plus
//!   configuration, theme and I/O failures.

use thiserror::Error;

/// Rejection of a submitted search query.
///
/// The `Display` text is the exact message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The query was empty or contained only whitespace.
    #[error("Please enter your search query.")]
    EmptyQuery,
}

/// Failure of a single search round trip.
///
/// Every variant is recoverable: the user submits another query and the
/// plugin starts a fresh fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server (or the Zellij host, for transport failures) answered with
    /// a non-2xx status.
    ///
    /// `message` is TMDB's `status_message` when the body carried one,
    /// otherwise the raw body text, truncated.
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code reported by the host.
        status: u16,
        /// Human-readable failure description.
        message: String,
    },

    /// The response had a 2xx status but the body was not a search payload.
    #[error("malformed response: {reason}")]
    Malformed {
        /// Decoder error description.
        reason: String,
    },

    /// The user declined the web access permission, so no request can leave
    /// the plugin.
    #[error("web access permission was denied")]
    PermissionDenied,
}

impl FetchError {
    /// Returns `true` when the failure is an authentication problem (401).
    ///
    /// Used by the error view to hint at the `api_token` setting.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

/// The main error type for Zinema plugin operations.
#[derive(Debug, Error)]
pub enum ZinemaError {
    /// A submitted query was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A search request failed.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    ///
    /// Raised for values that cannot be used even with fallbacks, such as an
    /// API base URL without an `http(s)://` scheme.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Zinema operations.
pub type Result<T> = std::result::Result<T, ZinemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_user_facing() {
        assert_eq!(
            ValidationError::EmptyQuery.to_string(),
            "Please enter your search query."
        );
    }

    #[test]
    fn unauthorized_is_detected_by_status() {
        let err = FetchError::Status {
            status: 401,
            message: "Invalid API key".to_string(),
        };
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "HTTP 401: Invalid API key");

        let err = FetchError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn wrapped_errors_keep_their_source_text() {
        let err: ZinemaError = ValidationError::EmptyQuery.into();
        assert_eq!(err.to_string(), "Please enter your search query.");

        let err: ZinemaError = FetchError::PermissionDenied.into();
        assert_eq!(err.to_string(), "Fetch error: web access permission was denied");
    }
}
