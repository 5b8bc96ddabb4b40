//! Tracing with OpenTelemetry export to a local file.
//!
//! ```text
//! tracing → tracing-opentelemetry → opentelemetry_sdk → FileSpanExporter → propsift-traces.json
//! ```
//!
//! The plugin runs sandboxed with no network, so finished spans are written
//! as JSON lines to `propsift-traces.json` in the data directory. The file is
//! rotated into numbered backups once it reaches its size limit. The filter
//! directive comes from the `trace_level` configuration key.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
