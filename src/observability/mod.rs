//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! - **File-Based Export**: `~/.local/share/zellij/zontacts/zontacts-otlp.json`
//! - **Automatic Rotation**: 10MB per file, 3 backups
//! - **OTLP Format**: one OTLP JSON document per exported batch
//!
//! Tracing is opt-in through the `trace_level` plugin option. The worker
//! installs its own subscriber, see [`crate::worker`].
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `tracer`: Tracer provider with the file exporter
//! - `span_formatter`: OTLP JSON serialization
//! - `file_writer`: Size-based rotating writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
