//! Domain layer for the Zinema plugin.
//!
//! Core types for movie search, independent of Zellij APIs and of the TMDB
//! wire format.
//!
//! # Organization
//!
//! - [`error`]: Error taxonomy and result alias
//! - [`movie`]: Movie summaries and result pages
//! - [`query`]: Validated search query and page number types
//!
//! # Examples
//!
//! ```
//! use zinema::domain::{PageNumber, SearchQuery};
//!
//! let query = SearchQuery::parse("alien")?;
//! let page = PageNumber::FIRST;
//! assert_eq!(page.next_within(3), PageNumber::new(2));
//! # Ok::<(), zinema::domain::ValidationError>(())
//! ```

pub mod error;
pub mod movie;
pub mod query;

pub use error::{FetchError, Result, ValidationError, ZinemaError};
pub use movie::{MovieSummary, ResultPage};
pub use query::{PageNumber, SearchQuery, MAX_API_PAGE};
