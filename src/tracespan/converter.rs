//! Converter from Mixer `tracespan` instances to LightStep collector spans
//!
//! Every function here is pure: the input span is only borrowed, and a failure
//! leaves nothing half-built behind.

use chrono::{DateTime, Utc};
use prost_types::Timestamp;

use crate::domain::RawSpan;
use crate::error::SpanError;
use crate::proto::collector::{Reference, Span, SpanContext, reference::Relationship};
use crate::tracespan::tags::flatten_tags;

/// Longest accepted identifier: 128 bits of hex.
const MAX_ID_HEX_DIGITS: usize = 32;

/// Seconds of 0001-01-01T00:00:00Z relative to the Unix epoch.
const MIN_VALID_SECONDS: i64 = -62_135_596_800;
/// Seconds of 10000-01-01T00:00:00Z relative to the Unix epoch.
const MAX_VALID_SECONDS: i64 = 253_402_300_800;

/// Translate one inbound span into the collector format.
pub fn translate_span(span: &RawSpan) -> Result<Span, SpanError> {
    let span_context = convert_span_context(&span.trace_id, &span.span_id)?;
    let references = build_references(&span.trace_id, span.parent_span_id.as_deref())?;
    let duration_micros = compute_duration(span.start_time.as_ref(), span.end_time.as_ref())?;
    let tags = flatten_tags(&span.name, span.parent_span_id.as_deref(), &span.tags)?;

    Ok(Span {
        span_context: Some(span_context),
        operation_name: span.span_name.clone(),
        references,
        start_timestamp: span.start_time.clone(),
        duration_micros,
        tags,
        logs: Vec::new(),
    })
}

/// Parse a hex trace ID. LightStep only carries 64-bit trace IDs, so any
/// non-zero high half is rejected.
pub fn convert_trace_id(hex: &str) -> Result<u64, SpanError> {
    let id = parse_hex_id(hex)?;
    if id >> 64 != 0 {
        return Err(SpanError::UnsupportedIdentifierWidth {
            value: hex.to_string(),
        });
    }
    Ok(id as u64)
}

/// Parse a hex span ID, which must fit in 64 bits.
pub fn convert_span_id(hex: &str) -> Result<u64, SpanError> {
    let id = parse_hex_id(hex)?;
    u64::try_from(id).map_err(|_| invalid_identifier(hex, "value out of range for 64 bits"))
}

fn parse_hex_id(hex: &str) -> Result<u128, SpanError> {
    if hex.is_empty() {
        return Err(invalid_identifier(hex, "empty identifier"));
    }
    if hex.len() > MAX_ID_HEX_DIGITS {
        return Err(invalid_identifier(hex, "longer than 32 hex digits"));
    }
    // from_str_radix accepts a leading '+', hex identifiers do not.
    if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(invalid_identifier(hex, format!("unexpected character {c:?}")));
    }
    u128::from_str_radix(hex, 16).map_err(|e| invalid_identifier(hex, e.to_string()))
}

fn invalid_identifier(value: &str, reason: impl Into<String>) -> SpanError {
    SpanError::InvalidIdentifier {
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn convert_span_context(trace_id: &str, span_id: &str) -> Result<SpanContext, SpanError> {
    Ok(SpanContext {
        trace_id: convert_trace_id(trace_id)?,
        span_id: convert_span_id(span_id)?,
        baggage: Default::default(),
    })
}

/// Build the reference list: empty for root spans, otherwise a single
/// child-of edge to the parent.
pub fn build_references(
    trace_id: &str,
    parent_span_id: Option<&str>,
) -> Result<Vec<Reference>, SpanError> {
    let Some(parent_span_id) = parent_span_id else {
        return Ok(Vec::new());
    };

    let parent = convert_span_context(trace_id, parent_span_id)?;
    Ok(vec![Reference {
        relationship: Relationship::ChildOf as i32,
        span_context: Some(parent),
    }])
}

/// Elapsed whole microseconds between `start` and `end`.
pub fn compute_duration(
    start: Option<&Timestamp>,
    end: Option<&Timestamp>,
) -> Result<u64, SpanError> {
    let (Some(start), Some(end)) = (start, end) else {
        return Err(SpanError::MissingTimestamp);
    };

    let start_time = timestamp_to_datetime(start).map_err(SpanError::InvalidTimestamp)?;
    let end_time = timestamp_to_datetime(end).map_err(SpanError::InvalidTimestamp)?;

    if end_time < start_time {
        return Err(SpanError::NegativeDuration {
            start: start_time.to_rfc3339(),
            end: end_time.to_rfc3339(),
        });
    }

    // Whole microseconds truncate toward zero, which is a floor here.
    let micros = end_time
        .signed_duration_since(start_time)
        .num_microseconds()
        .ok_or_else(|| SpanError::InvalidTimestamp("span duration overflows".to_string()))?;
    u64::try_from(micros)
        .map_err(|_| SpanError::InvalidTimestamp("span duration overflows".to_string()))
}

/// Validate a protobuf timestamp the way the well-known-type conversion does
/// and turn it into a UTC time.
pub(crate) fn timestamp_to_datetime(ts: &Timestamp) -> Result<DateTime<Utc>, String> {
    if ts.seconds < MIN_VALID_SECONDS {
        return Err(format!(
            "timestamp: seconds:{} nanos:{} before 0001-01-01",
            ts.seconds, ts.nanos
        ));
    }
    if ts.seconds >= MAX_VALID_SECONDS {
        return Err(format!(
            "timestamp: seconds:{} nanos:{} after 10000-01-01",
            ts.seconds, ts.nanos
        ));
    }
    if !(0..1_000_000_000).contains(&ts.nanos) {
        return Err(format!(
            "timestamp: seconds:{} nanos:{}: nanos not in range [0, 1e9)",
            ts.seconds, ts.nanos
        ));
    }

    DateTime::from_timestamp(ts.seconds, ts.nanos as u32).ok_or_else(|| {
        format!(
            "timestamp: seconds:{} nanos:{} is out of range",
            ts.seconds, ts.nanos
        )
    })
}
