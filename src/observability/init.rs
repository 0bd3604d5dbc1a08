//! Tracing initialization and subscriber setup.
//!
//! Wires `tracing` macros through `tracing-opentelemetry` into the file span
//! exporter.

use super::file_writer::RotatingFile;
use super::span_formatter::SCOPE_NAME;
use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the OTLP trace log inside the data directory.
pub const TRACE_FILE_NAME: &str = "zinema-otlp.json";

/// Default filter when `trace_level` is not configured.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// Spans are filtered with an [`EnvFilter`] built from `config.trace_level`
/// (default `info`) and exported to
/// `/host/.local/share/zellij/zinema/zinema-otlp.json`.
///
/// Observability is optional: if the data directory cannot be created, or a
/// subscriber is already installed, the call does nothing.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", SCOPE_NAME),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let file = RotatingFile::with_defaults(data_dir.join(TRACE_FILE_NAME));
    let provider = tracer::create_tracer_provider(file, resource);

    let tracer = provider.tracer(SCOPE_NAME);
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer);

    let _ = subscriber.try_init();
}
