//! OpenTelemetry span exporter writing one JSON object per line.
//!
//! Each finished span becomes a flat record:
//!
//! ```json
//! {"time":"2024-05-01T10:00:00.120+00:00","service":"StyleHub","name":"derive_view",
//!  "trace_id":"…","span_id":"…","parent_span_id":null,"duration_us":84,
//!  "status":"unset","attributes":{"view_count":20},"events":[]}
//! ```

use super::rotation::RotatingFile;
use chrono::{DateTime, Utc};
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Map, Value as JsonValue};
use std::sync::atomic::{AtomicBool, Ordering};

struct JsonLinesExporter {
    file: RotatingFile,
    service: String,
    is_shutdown: AtomicBool,
}

impl JsonLinesExporter {
    fn new(file: RotatingFile, resource: &Resource) -> Self {
        let service = resource
            .get(opentelemetry::Key::from_static_str("service.name"))
            .map_or_else(|| "unknown".to_string(), |value| value.to_string());

        Self {
            file,
            service,
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> std::io::Result<()> {
        for span in batch {
            self.file.write_line(&span_record(span, &self.service).to_string())?;
        }
        Ok(())
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown.load(Ordering::SeqCst) {
            Err(TraceError::from("exporter is shut down"))
        } else {
            self.write_batch(&batch).map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for JsonLinesExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesExporter")
            .field("file", &self.file)
            .field("service", &self.service)
            .finish_non_exhaustive()
    }
}

/// Builds a provider that exports every span synchronously to `file`.
pub fn create_tracer_provider(file: RotatingFile, resource: Resource) -> TracerProvider {
    let exporter = JsonLinesExporter::new(file, &resource);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

fn span_record(span: &SpanData, service: &str) -> JsonValue {
    let time: DateTime<Utc> = span.end_time.into();
    let duration_us = span
        .end_time
        .duration_since(span.start_time)
        .map_or(0, |d| d.as_micros());

    let parent = if span.parent_span_id == SpanId::INVALID {
        JsonValue::Null
    } else {
        JsonValue::String(format!("{:016x}", span.parent_span_id))
    };

    let events: Vec<JsonValue> = span
        .events
        .iter()
        .map(|event| {
            let time: DateTime<Utc> = event.timestamp.into();
            json!({
                "time": time.to_rfc3339(),
                "name": event.name,
                "attributes": attributes(&event.attributes),
            })
        })
        .collect();

    json!({
        "time": time.to_rfc3339(),
        "service": service,
        "name": span.name,
        "trace_id": format!("{:032x}", span.span_context.trace_id()),
        "span_id": format!("{:016x}", span.span_context.span_id()),
        "parent_span_id": parent,
        "duration_us": u64::try_from(duration_us).unwrap_or(u64::MAX),
        "status": status(&span.status),
        "attributes": attributes(&span.attributes),
        "events": events,
    })
}

fn attributes(pairs: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = pairs
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect();
    JsonValue::Object(map)
}

fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!(b),
        Value::I64(i) => json!(i),
        Value::F64(f) => json!(f),
        Value::String(s) => json!(s.as_str()),
        Value::Array(_) => json!(value.to_string()),
    }
}

fn status(status: &Status) -> String {
    match status {
        Status::Unset => "unset".to_string(),
        Status::Ok => "ok".to_string(),
        Status::Error { description } => format!("error: {description}"),
    }
}
