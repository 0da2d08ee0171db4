//! OpenTelemetry-based observability with file-based trace export.
//!
//! Spans and events emitted through `tracing` are exported as OTLP JSON to a
//! rotating file in the data directory, for offline analysis:
//!
//! ```text
//! tracing → tracing-opentelemetry → opentelemetry_sdk → OtlpFileExporter → listkeeper-otlp.json
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: one OTLP document per line in `<data_dir>/listkeeper-otlp.json`
//! - **Automatic Rotation**: 10 MiB threshold and 3 backups by default, both configurable
//! - **Resource Metadata**: service name and crate version
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - `exporter`: OTLP JSON span exporter and tracer provider
//! - [`rotation`]: Rotating line writer

mod exporter;
pub mod init;
pub mod rotation;

pub use init::{init_tracing, DEFAULT_TRACE_LEVEL, TRACE_FILE_NAME};
pub use rotation::{RotatingFile, RotationPolicy};
