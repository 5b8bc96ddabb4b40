//! Worker-side request processing.
//!
//! [`ListingWorker`] turns decoded [`WorkerMessage`]s into [`WorkerResponse`]s.
//! It owns no Zellij state; the plugin binary wraps it in a `ZellijWorker` that
//! does the IPC, which keeps this logic testable on the host.

use crate::domain::error::{PropsiftError, Result};
use crate::storage::{JsonCatalog, ListingSource};
use crate::worker::{TraceContext, WorkerMessage, WorkerResponse};

/// Opens a listing source for a catalog path.
pub type SourceFactory = fn(&str) -> Box<dyn ListingSource>;

fn open_json_catalog(path: &str) -> Box<dyn ListingSource> {
    Box::new(JsonCatalog::new(path))
}

/// Processes worker requests.
#[derive(Clone)]
pub struct ListingWorker {
    open_source: SourceFactory,
}

impl Default for ListingWorker {
    fn default() -> Self {
        Self::new(open_json_catalog)
    }
}

impl std::fmt::Debug for ListingWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingWorker").finish_non_exhaustive()
    }
}

impl ListingWorker {
    /// Creates a worker that opens catalogs through `open_source`.
    #[must_use]
    pub const fn new(open_source: SourceFactory) -> Self {
        Self { open_source }
    }

    /// Decodes a JSON payload and handles it.
    ///
    /// # Errors
    ///
    /// Returns [`PropsiftError::Worker`] if the payload is not a valid
    /// [`WorkerMessage`].
    pub fn handle_payload(&self, payload: &str) -> Result<WorkerResponse> {
        let message: WorkerMessage = serde_json::from_str(payload)
            .map_err(|e| PropsiftError::Worker(format!("failed to decode message: {e}")))?;
        Ok(self.handle_message(message))
    }

    /// Handles a decoded request.
    ///
    /// The request's trace context, if any, is attached for the duration of
    /// the call so spans created here join the plugin's trace.
    pub fn handle_message(&self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = message.trace_context().and_then(attach_remote_context);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadListings { path, .. } => self.handle_load_listings(path),
        }
    }

    fn handle_load_listings(&self, path: String) -> WorkerResponse {
        let source = (self.open_source)(&path);

        match source.load_listings() {
            Ok(listings) => {
                tracing::debug!(
                    source = %source.location(),
                    count = listings.len(),
                    "listings loaded"
                );
                WorkerResponse::ListingsLoaded { path, listings }
            }
            Err(e) => {
                tracing::warn!(source = %source.location(), error = %e, "failed to load listings");
                WorkerResponse::Error {
                    message: format!("load listings from {}: {e}", source.location()),
                }
            }
        }
    }
}

/// Makes a remote span context current, returning the guard that restores
/// the previous context on drop.
fn attach_remote_context(trace_context: &TraceContext) -> Option<opentelemetry::ContextGuard> {
    use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

    let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
    let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

    let remote = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());

    Some(
        opentelemetry::Context::current()
            .with_remote_span_context(remote)
            .attach(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Listing;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_catalog_from_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("listings.json");
        fs::write(&path, r#"[{"type": "house", "price": 1, "title": "A", "location": "B"}]"#).unwrap();
        let path = path.to_string_lossy().to_string();

        let response = ListingWorker::default().handle_message(WorkerMessage::LoadListings {
            path: path.clone(),
            trace_context: None,
        });

        assert_eq!(
            response,
            WorkerResponse::ListingsLoaded {
                path,
                listings: vec![Listing::new("house", "", 1, "A", "B")],
            }
        );
    }

    #[test]
    fn missing_catalog_becomes_an_error_response() {
        let response = ListingWorker::default().handle_message(WorkerMessage::LoadListings {
            path: "/definitely/not/here.json".to_string(),
            trace_context: None,
        });

        match response {
            WorkerResponse::Error { message } => assert!(message.contains("/definitely/not/here.json")),
            other => panic!("expected error response, got {other:?}"),
        }
    }

    #[test]
    fn undecodable_payload_is_a_worker_error() {
        let err = ListingWorker::default().handle_payload("not json").unwrap_err();
        assert!(matches!(err, PropsiftError::Worker(_)));
    }

    #[test]
    fn malformed_trace_context_is_ignored() {
        struct Fixed;

        impl ListingSource for Fixed {
            fn load_listings(&self) -> Result<Vec<Listing>> {
                Ok(vec![Listing::new("villa", "5", 2, "C", "D")])
            }

            fn location(&self) -> String {
                "fixed".to_string()
            }
        }

        fn open_fixed(_path: &str) -> Box<dyn ListingSource> {
            Box::new(Fixed)
        }

        let response = ListingWorker::new(open_fixed).handle_message(WorkerMessage::LoadListings {
            path: "anywhere".to_string(),
            trace_context: Some(TraceContext {
                trace_id: "zz".to_string(),
                parent_span_id: "zz".to_string(),
            }),
        });

        assert!(matches!(response, WorkerResponse::ListingsLoaded { ref listings, .. } if listings.len() == 1));
    }
}
