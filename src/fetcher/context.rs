//! Request tagging carried through Zellij's web request context map.
//!
//! Zellij echoes the `context` map of a `web_request` back verbatim in the
//! matching `WebRequestResult` event. The plugin uses it to recover which
//! (query, page) key a response belongs to, so late responses for superseded
//! keys can be discarded, and to link the response span to the request span.

use crate::domain::{PageNumber, SearchQuery};
use std::collections::BTreeMap;

const SEQ_KEY: &str = "zinema.seq";
const QUERY_KEY: &str = "zinema.query";
const PAGE_KEY: &str = "zinema.page";
const TRACE_ID_KEY: &str = "zinema.trace_id";
const PARENT_SPAN_KEY: &str = "zinema.parent_span_id";

/// Identity of a fetch: the (query, page) pair the results belong to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestKey {
    pub query: SearchQuery,
    pub page: PageNumber,
}

impl RequestKey {
    #[must_use]
    pub const fn new(query: SearchQuery, page: PageNumber) -> Self {
        Self { query, page }
    }
}

/// Distributed tracing context for request/response span correlation.
///
/// Captures the current OpenTelemetry trace and span IDs when a request is
/// built. The response handler logs them again so both ends of the round
/// trip land in the same trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Span ID of the span that issued the request.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` when no valid OpenTelemetry span is active (tracing
    /// disabled, or called outside any span).
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Everything attached to one outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTag {
    /// Monotonic request number, for logs.
    pub seq: u64,
    /// Key the response will be filed under.
    pub key: RequestKey,
    /// Trace context captured at request time.
    pub trace_context: Option<TraceContext>,
}

impl RequestTag {
    /// Tags a new request, capturing the current trace context.
    #[must_use]
    pub fn new(seq: u64, key: RequestKey) -> Self {
        Self {
            seq,
            key,
            trace_context: TraceContext::from_current(),
        }
    }

    /// Encodes the tag as a Zellij context map.
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(SEQ_KEY.to_string(), self.seq.to_string());
        context.insert(QUERY_KEY.to_string(), self.key.query.as_str().to_string());
        context.insert(PAGE_KEY.to_string(), self.key.page.get().to_string());
        if let Some(trace) = &self.trace_context {
            context.insert(TRACE_ID_KEY.to_string(), trace.trace_id.clone());
            context.insert(PARENT_SPAN_KEY.to_string(), trace.parent_span_id.clone());
        }
        context
    }

    /// Decodes a tag from a context map echoed back by the host.
    ///
    /// Returns `None` for maps this plugin did not produce.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        let seq = context.get(SEQ_KEY)?.parse().ok()?;
        let query = SearchQuery::parse(context.get(QUERY_KEY)?).ok()?;
        let page = context
            .get(PAGE_KEY)?
            .parse()
            .ok()
            .and_then(PageNumber::new)?;

        let trace_context = match (context.get(TRACE_ID_KEY), context.get(PARENT_SPAN_KEY)) {
            (Some(trace_id), Some(parent_span_id)) => Some(TraceContext {
                trace_id: trace_id.clone(),
                parent_span_id: parent_span_id.clone(),
            }),
            _ => None,
        };

        Some(Self {
            seq,
            key: RequestKey::new(query, page),
            trace_context,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(query: &str, page: u32) -> RequestKey {
        RequestKey::new(SearchQuery::parse(query).unwrap(), PageNumber::new(page).unwrap())
    }

    #[test]
    fn tag_survives_the_context_map() {
        let tag = RequestTag {
            seq: 42,
            key: key("blade runner", 3),
            trace_context: Some(TraceContext {
                trace_id: "0af7651916cd43dd8448eb211c80319c".to_string(),
                parent_span_id: "b7ad6b7169203331".to_string(),
            }),
        };

        let decoded = RequestTag::from_context(&tag.to_context()).unwrap();
        assert_eq!(decoded, tag);
    }

    #[test]
    fn foreign_context_maps_are_ignored() {
        let mut context = BTreeMap::new();
        assert_eq!(RequestTag::from_context(&context), None);

        context.insert(SEQ_KEY.to_string(), "1".to_string());
        context.insert(QUERY_KEY.to_string(), "alien".to_string());
        context.insert(PAGE_KEY.to_string(), "0".to_string());
        assert_eq!(RequestTag::from_context(&context), None);
    }

    #[test]
    fn tag_without_tracing_has_no_trace_context() {
        let tag = RequestTag::new(7, key("heat", 1));
        assert_eq!(tag.trace_context, None);
        assert!(!tag.to_context().contains_key(TRACE_ID_KEY));
    }
}
