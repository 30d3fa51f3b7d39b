//! Span export to a local JSON-lines file.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → OpenTelemetry SDK → JsonLinesExporter → stylehub-spans.jsonl
//! ```
//!
//! The file lives in the plugin data directory and is rotated by size. The
//! filter directive comes from the `trace_level` plugin option (default
//! `info`).
//!
//! - [`init`]: subscriber installation
//! - [`exporter`]: span-to-JSON exporter and tracer provider
//! - [`rotation`]: size-rotated file writer

mod exporter;
mod init;
mod rotation;

pub use init::{init_tracing, SERVICE_NAME, SPAN_FILE_NAME};
