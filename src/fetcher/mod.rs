//! Result Fetcher for the TMDB `search/movie` endpoint.
//!
//! Requests leave the plugin through Zellij's `web_request` host call and
//! come back as `WebRequestResult` events. This module owns both ends of that
//! round trip without performing any I/O itself:
//!
//! - `client`: [`MovieFetcher`] builds requests and decodes responses
//! - `context`: [`RequestTag`] encodes the request key into the context map
//!   the host echoes back
//! - `wire`: TMDB JSON types

mod client;
mod context;
pub mod wire;

pub use client::{FetchRequest, FetcherConfig, MovieFetcher, DEFAULT_BASE_URL};
pub use context::{RequestKey, RequestTag, TraceContext};
