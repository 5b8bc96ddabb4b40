//! Background worker for catalog I/O.
//!
//! Catalog files are read on a Zellij worker thread so the plugin's render
//! loop never blocks on the filesystem.
//!
//! - `messages`: request/response protocol with trace context propagation
//! - `handler`: request processing, independent of the Zellij runtime

pub mod handler;
pub mod messages;

pub use handler::ListingWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
