//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! - Traces are written to `~/.local/share/zellij/zinema/zinema-otlp.json`
//!   (seen as `/host/...` inside the sandbox)
//! - The file rotates at 5 MB and keeps two numbered backups
//! - Every line is a complete OTLP/JSON `resourceSpans` document
//!
//! Each search request carries the trace and parent span id of the span that
//! issued it in its Zellij context map, so the handler can log them again when
//! the response lands and the two ends of a fetch can be joined in the file.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - `tracer`: Tracer provider with the file exporter
//! - `span_formatter`: OTLP JSON serialization
//! - `file_writer`: Size-rotated file

mod file_writer;
pub mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
