//! Tracing initialization and subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and instrumentation scope name on every exported span.
pub const SERVICE_NAME: &str = "Zontacts";

/// File name of the trace output inside the data directory.
pub const TRACE_FILE_NAME: &str = "zontacts-otlp.json";

/// Installs the global subscriber with file-based OTLP export.
///
/// Does nothing unless `trace_level` is configured; the value is an
/// `EnvFilter` directive such as `debug` or `zontacts=trace`. Traces go to
/// `~/.local/share/zellij/zontacts/zontacts-otlp.json`.
///
/// Observability is optional: if the data directory cannot be created, or a
/// subscriber is already installed, the call returns quietly.
///
/// # Example
///
/// ```rust
/// use zontacts::observability::init_tracing;
/// use zontacts::Config;
///
/// init_tracing(&Config::default()); // no trace_level, no-op
/// ```
pub fn init_tracing(config: &Config) {
    let Some(level) = config.trace_level.as_deref() else {
        return;
    };

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider =
        tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);

    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
