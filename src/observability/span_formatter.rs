//! JSON records for exported spans.
//!
//! Each export batch becomes one JSON line:
//!
//! ```json
//! {"resource":{"service.name":"propsift"},
//!  "spans":[{"traceId":"…","spanId":"…","parentSpanId":"…","name":"refilter",
//!            "kind":"internal","startTimeUnixNano":1700000000000000000,
//!            "durationNanos":41000,"attributes":{"visible_count":3},
//!            "events":[],"status":{"code":"unset"}}]}
//! ```

use opentelemetry::trace::{SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::time::{Duration, SystemTime};

type Attributes = BTreeMap<String, JsonValue>;

#[derive(Debug, Serialize)]
struct BatchRecord<'a> {
    resource: &'a Attributes,
    spans: Vec<SpanRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpanRecord {
    trace_id: String,
    span_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_span_id: Option<String>,
    name: String,
    kind: &'static str,
    start_time_unix_nano: u64,
    duration_nanos: u64,
    attributes: Attributes,
    events: Vec<EventRecord>,
    status: StatusRecord,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EventRecord {
    name: String,
    time_unix_nano: u64,
    attributes: Attributes,
}

#[derive(Debug, Serialize)]
struct StatusRecord {
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Serializes span batches, tagging each with the resource attributes.
pub struct SpanFormatter {
    resource: Attributes,
}

impl SpanFormatter {
    pub fn new(resource: &Resource) -> Self {
        let resource = resource
            .iter()
            .map(|(key, value)| (key.to_string(), attribute_value(value)))
            .collect();
        Self { resource }
    }

    /// Renders `batch` as a single JSON line.
    pub fn format_batch(&self, batch: &[SpanData]) -> serde_json::Result<String> {
        serde_json::to_string(&BatchRecord {
            resource: &self.resource,
            spans: batch.iter().map(span_record).collect(),
        })
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter")
            .field("resource", &self.resource)
            .finish()
    }
}

fn span_record(span: &SpanData) -> SpanRecord {
    let parent_span_id =
        (span.parent_span_id != SpanId::INVALID).then(|| format!("{:016x}", span.parent_span_id));

    SpanRecord {
        trace_id: format!("{:032x}", span.span_context.trace_id()),
        span_id: format!("{:016x}", span.span_context.span_id()),
        parent_span_id,
        name: span.name.to_string(),
        kind: kind_name(&span.span_kind),
        start_time_unix_nano: unix_nanos(span.start_time),
        duration_nanos: nanos(
            span.end_time
                .duration_since(span.start_time)
                .unwrap_or_default(),
        ),
        attributes: attributes(&span.attributes),
        events: span
            .events
            .iter()
            .map(|event| EventRecord {
                name: event.name.to_string(),
                time_unix_nano: unix_nanos(event.timestamp),
                attributes: attributes(&event.attributes),
            })
            .collect(),
        status: status_record(&span.status),
    }
}

const fn kind_name(kind: &SpanKind) -> &'static str {
    match kind {
        SpanKind::Internal => "internal",
        SpanKind::Server => "server",
        SpanKind::Client => "client",
        SpanKind::Producer => "producer",
        SpanKind::Consumer => "consumer",
    }
}

fn status_record(status: &Status) -> StatusRecord {
    match status {
        Status::Unset => StatusRecord { code: "unset", message: None },
        Status::Ok => StatusRecord { code: "ok", message: None },
        Status::Error { description } => StatusRecord {
            code: "error",
            message: Some(description.to_string()),
        },
    }
}

fn nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

fn unix_nanos(time: SystemTime) -> u64 {
    nanos(time.duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default())
}

fn attributes(pairs: &[KeyValue]) -> Attributes {
    pairs
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect()
}

/// Maps an attribute to its natural JSON type; arrays fall back to their
/// string form.
fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::I64(i) => JsonValue::from(*i),
        Value::F64(f) => JsonValue::from(*f),
        Value::String(s) => JsonValue::String(s.to_string()),
        Value::Array(_) => JsonValue::String(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_values_keep_their_json_type() {
        assert_eq!(attribute_value(&Value::Bool(true)), JsonValue::Bool(true));
        assert_eq!(attribute_value(&Value::I64(3)), JsonValue::from(3));
        assert_eq!(attribute_value(&Value::from("house")), JsonValue::from("house"));
    }

    #[test]
    fn empty_batch_carries_the_resource() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "propsift")]);
        let line = SpanFormatter::new(&resource).format_batch(&[]).unwrap();
        let parsed: JsonValue = serde_json::from_str(&line).unwrap();

        assert_eq!(parsed["resource"]["service.name"], "propsift");
        assert_eq!(parsed["spans"], JsonValue::Array(vec![]));
    }

    #[test]
    fn error_status_keeps_its_description() {
        let record = status_record(&Status::error("catalog missing"));
        assert_eq!(record.code, "error");
        assert_eq!(record.message.as_deref(), Some("catalog missing"));
    }
}
