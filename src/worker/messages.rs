//! Plugin ⇄ worker protocol.
//!
//! Messages travel between the plugin and its worker thread as JSON strings.
//! Requests carry an optional [`TraceContext`] so worker spans join the trace
//! of the plugin span that issued them.

use crate::domain::Listing;
use serde::{Deserialize, Serialize};

/// Trace and parent span ids, hex-encoded, of the requesting span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    pub trace_id: String,
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the OpenTelemetry context of the current `tracing` span.
    ///
    /// Returns `None` outside of a sampled span, e.g. when tracing was never
    /// initialized.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let context = tracing::Span::current().context();
        let span = context.span();
        let span_context = span.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Requests sent from the plugin to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read the listing catalog at `path` (a sandbox path).
    LoadListings {
        path: String,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Builds a `LoadListings` request carrying the current trace context.
    #[must_use]
    pub fn load_listings(path: impl Into<String>) -> Self {
        Self::LoadListings {
            path: path.into(),
            trace_context: TraceContext::from_current(),
        }
    }

    /// Trace context attached to the request, if any.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadListings { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Replies sent from the worker back to the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The catalog at `path` was read.
    ListingsLoaded {
        path: String,
        listings: Vec<Listing>,
    },

    /// The request failed.
    Error {
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_without_trace_context_omits_the_field() {
        let message = WorkerMessage::LoadListings {
            path: "/host/listings.json".to_string(),
            trace_context: None,
        };
        let json = serde_json::to_string(&message).unwrap();
        assert!(!json.contains("trace_context"));
        assert_eq!(serde_json::from_str::<WorkerMessage>(&json).unwrap(), message);
    }

    #[test]
    fn builder_outside_a_span_has_no_context() {
        let message = WorkerMessage::load_listings("/host/listings.json");
        assert!(message.trace_context().is_none());
    }
}
