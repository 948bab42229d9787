//! Tag flattening
//!
//! Turns the heterogeneous `tracespan` tag map into the collector's flat
//! key/value list. Every value kind has exactly one rule in [`convert_tag`];
//! timestamp and duration formatting problems degrade to a `(reason)` string,
//! while a kind with no rule fails the whole span.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::net::{Ipv4Addr, Ipv6Addr};

use chrono::{DateTime, Timelike, Utc};

use crate::domain::TagValue;
use crate::error::SpanError;
use crate::proto::collector::{KeyValue, key_value};
use crate::tracespan::converter::timestamp_to_datetime;

/// Tag carrying the logical component (service) name.
pub const COMPONENT_NAME_KEY: &str = "lightstep.component_name";

/// Tag carrying the parent span ID text, empty for root spans.
pub const PARENT_SPAN_GUID_KEY: &str = "parent_span_guid";

const NANOS_PER_SECOND: i128 = 1_000_000_000;
/// Bound on `google.protobuf.Duration` seconds (about 10,000 years).
const MAX_DURATION_SECONDS: i64 = 315_576_000_000;

/// Flatten `tags` into collector key/values.
///
/// The component-name and parent-span tags are appended only when the caller
/// did not supply them. `tags` itself is never modified. Caller tags come out
/// sorted by key so the result does not depend on map iteration order.
pub fn flatten_tags(
    component_name: &str,
    parent_span_id: Option<&str>,
    tags: &HashMap<String, TagValue>,
) -> Result<Vec<KeyValue>, SpanError> {
    let mut entries: Vec<(&String, &TagValue)> = tags.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut out = Vec::with_capacity(entries.len() + 2);
    for (key, value) in entries {
        out.push(convert_tag(key, value)?);
    }

    if !tags.contains_key(COMPONENT_NAME_KEY) {
        out.push(string_tag(COMPONENT_NAME_KEY, component_name.to_string()));
    }
    if !tags.contains_key(PARENT_SPAN_GUID_KEY) {
        out.push(string_tag(
            PARENT_SPAN_GUID_KEY,
            parent_span_id.unwrap_or_default().to_string(),
        ));
    }

    Ok(out)
}

/// Convert a single tag value.
pub fn convert_tag(key: &str, value: &TagValue) -> Result<KeyValue, SpanError> {
    let converted = match value {
        TagValue::String(s) => key_value::Value::StringValue(s.clone()),
        TagValue::Int64(i) => key_value::Value::IntValue(*i),
        TagValue::Double(d) => key_value::Value::DoubleValue(*d),
        TagValue::Bool(b) => key_value::Value::BoolValue(*b),
        TagValue::IpAddress(bytes) => key_value::Value::StringValue(format_ip(bytes)),
        TagValue::Timestamp(ts) => key_value::Value::StringValue(format_timestamp(ts.as_ref())),
        TagValue::Duration(d) => key_value::Value::StringValue(format_duration(d.as_ref())),
        TagValue::EmailAddress(email) => {
            key_value::Value::StringValue(email.clone().unwrap_or_default())
        }
        TagValue::DnsName(name) => key_value::Value::StringValue(name.clone().unwrap_or_default()),
        TagValue::Uri(uri) => key_value::Value::StringValue(format_uri(uri.as_deref())),
        TagValue::StringMap(_) | TagValue::Unset => {
            return Err(SpanError::UnsupportedTagType {
                key: key.to_string(),
                kind: value.kind(),
            });
        }
    };

    Ok(KeyValue {
        key: key.to_string(),
        value: Some(converted),
    })
}

fn string_tag(key: &str, value: String) -> KeyValue {
    KeyValue {
        key: key.to_string(),
        value: Some(key_value::Value::StringValue(value)),
    }
}

/// Human-readable IP text. IPv4-mapped IPv6 addresses print as IPv4.
pub fn format_ip(bytes: &[u8]) -> String {
    if let Ok(v4) = <[u8; 4]>::try_from(bytes) {
        return Ipv4Addr::from(v4).to_string();
    }
    if let Ok(v6) = <[u8; 16]>::try_from(bytes) {
        let addr = Ipv6Addr::from(v6);
        return match addr.to_ipv4_mapped() {
            Some(v4) => v4.to_string(),
            None => addr.to_string(),
        };
    }
    if bytes.is_empty() {
        return "<nil>".to_string();
    }
    format!("?{}", hex::encode(bytes))
}

/// RFC 3339 UTC text with trailing zeros of the fraction dropped.
pub fn format_timestamp(ts: Option<&prost_types::Timestamp>) -> String {
    let Some(ts) = ts else {
        return "(timestamp: nil Timestamp)".to_string();
    };
    match timestamp_to_datetime(ts) {
        Ok(dt) => rfc3339_trimmed(&dt),
        Err(reason) => format!("({reason})"),
    }
}

fn rfc3339_trimmed(dt: &DateTime<Utc>) -> String {
    let mut out = dt.format("%Y-%m-%dT%H:%M:%S").to_string();
    let nanos = dt.nanosecond();
    if nanos > 0 {
        let fraction = format!("{nanos:09}");
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out.push('Z');
    out
}

/// Go-style duration text (`1h2m3.5s`, `1.5ms`, `0s`).
pub fn format_duration(d: Option<&prost_types::Duration>) -> String {
    match duration_nanos(d) {
        Ok(nanos) => go_duration_string(nanos),
        Err(reason) => format!("({reason})"),
    }
}

/// Validate a protobuf duration and convert it to signed nanoseconds.
fn duration_nanos(d: Option<&prost_types::Duration>) -> Result<i64, String> {
    let Some(d) = d else {
        return Err("duration: nil Duration".to_string());
    };
    let describe = || format!("seconds:{} nanos:{}", d.seconds, d.nanos);

    if !(-MAX_DURATION_SECONDS..=MAX_DURATION_SECONDS).contains(&d.seconds) {
        return Err(format!("duration: {}: seconds out of range", describe()));
    }
    if d.nanos <= -1_000_000_000 || d.nanos >= 1_000_000_000 {
        return Err(format!("duration: {}: nanos out of range", describe()));
    }
    if (d.seconds < 0 && d.nanos > 0) || (d.seconds > 0 && d.nanos < 0) {
        return Err(format!(
            "duration: {}: seconds and nanos have different signs",
            describe()
        ));
    }

    let total = i128::from(d.seconds) * NANOS_PER_SECOND + i128::from(d.nanos);
    i64::try_from(total)
        .map_err(|_| format!("duration: {} is out of range for time.Duration", describe()))
}

fn go_duration_string(nanos: i64) -> String {
    if nanos == 0 {
        return "0s".to_string();
    }

    let mut out = String::new();
    if nanos < 0 {
        out.push('-');
    }
    let u = nanos.unsigned_abs();

    if u < 1_000_000_000 {
        let (digits, unit) = match u {
            0..1_000 => (0, "ns"),
            1_000..1_000_000 => (3, "µs"),
            _ => (6, "ms"),
        };
        out.push_str(&decimal(u, digits));
        out.push_str(unit);
        return out;
    }

    let total_secs = u / 1_000_000_000;
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let seconds_nanos = (total_secs % 60) * 1_000_000_000 + u % 1_000_000_000;

    if hours > 0 {
        let _ = write!(out, "{hours}h{minutes}m");
    } else if minutes > 0 {
        let _ = write!(out, "{minutes}m");
    }
    out.push_str(&decimal(seconds_nanos, 9));
    out.push('s');
    out
}

/// `value / 10^digits` printed with the fraction's trailing zeros removed.
fn decimal(value: u64, digits: u32) -> String {
    let scale = 10u64.pow(digits);
    let whole = value / scale;
    let fraction = value % scale;
    if fraction == 0 {
        return whole.to_string();
    }
    let fraction = format!("{fraction:0width$}", width = digits as usize);
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}

fn format_uri(uri: Option<&str>) -> String {
    match uri {
        Some(raw) => url::Url::parse(raw)
            .map(String::from)
            .unwrap_or_else(|_| raw.to_string()),
        None => String::new(),
    }
}
