//! Subscriber setup.

use super::exporter;
use super::rotation::{RotatingFile, DEFAULT_MAX_BACKUPS, DEFAULT_MAX_BYTES};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name recorded on every span.
pub const SERVICE_NAME: &str = "StyleHub";

/// Span log file inside the plugin data directory.
pub const SPAN_FILE_NAME: &str = "stylehub-spans.jsonl";

/// Installs the global subscriber: an `EnvFilter` built from
/// `config.trace_level` feeding an OpenTelemetry layer that writes spans to
/// [`SPAN_FILE_NAME`].
///
/// Observability is optional. If the data directory cannot be created or a
/// subscriber is already installed, this returns without doing anything.
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", SERVICE_NAME)]);
    let file = RotatingFile::new(data_dir.join(SPAN_FILE_NAME), DEFAULT_MAX_BYTES, DEFAULT_MAX_BACKUPS);
    let provider = exporter::create_tracer_provider(file, resource);

    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
