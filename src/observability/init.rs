//! Tracing subscriber setup.

use super::exporter::{self, SCOPE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "listkeeper-otlp.json";

/// Level used when the configuration names none.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber exporting spans to the trace file.
///
/// The filter comes from `config.trace_level` (default `"info"`) and accepts
/// any `EnvFilter` directive such as `"listkeeper::storage=trace"`. The trace file
/// lives at `<data_dir>/listkeeper-otlp.json` and rotates per the configured
/// size and backup count.
///
/// Tracing is optional: if the data directory cannot be created, nothing is
/// installed. Only the first call in a process takes effect.
///
/// # Example
///
/// ```no_run
/// use listkeeper::observability::init_tracing;
/// use listkeeper::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);

    let data_dir = config.resolved_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SCOPE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = exporter::tracer_provider(data_dir.join(TRACE_FILE_NAME), config.rotation_policy(), resource);

    let layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(layer)
        .try_init();
}
