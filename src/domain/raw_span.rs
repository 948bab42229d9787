//! Inbound span model
//!
//! `RawSpan` is the loosely-typed span handed to the adapter by Mixer: opaque
//! hex identifiers, independent start/end times and a heterogeneous tag map.
//! No validity is enforced here; the translator establishes it.

use std::collections::HashMap;

use crate::proto::policy::{self, value};
use crate::proto::tracespan::InstanceMsg;

/// A span as received from the `tracespan` template.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSpan {
    /// Trace ID (hex, 64 or 128 bit)
    pub trace_id: String,

    /// Span ID (hex, 64 bit)
    pub span_id: String,

    /// Parent span ID; `None` for root spans
    pub parent_span_id: Option<String>,

    /// Logical component/service name
    pub name: String,

    /// Operation name
    pub span_name: String,

    pub start_time: Option<prost_types::Timestamp>,
    pub end_time: Option<prost_types::Timestamp>,

    pub tags: HashMap<String, TagValue>,
}

/// Value of a single span tag.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    String(String),
    Int64(i64),
    Double(f64),
    Bool(bool),
    /// Raw address bytes (4 for IPv4, 16 for IPv6)
    IpAddress(Vec<u8>),
    Timestamp(Option<prost_types::Timestamp>),
    Duration(Option<prost_types::Duration>),
    EmailAddress(Option<String>),
    DnsName(Option<String>),
    Uri(Option<String>),
    StringMap(HashMap<String, String>),
    /// The value carried no payload at all.
    Unset,
}

impl TagValue {
    /// Short name of the value kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            TagValue::String(_) => "string",
            TagValue::Int64(_) => "int64",
            TagValue::Double(_) => "double",
            TagValue::Bool(_) => "bool",
            TagValue::IpAddress(_) => "ip_address",
            TagValue::Timestamp(_) => "timestamp",
            TagValue::Duration(_) => "duration",
            TagValue::EmailAddress(_) => "email_address",
            TagValue::DnsName(_) => "dns_name",
            TagValue::Uri(_) => "uri",
            TagValue::StringMap(_) => "string_map",
            TagValue::Unset => "unset",
        }
    }
}

impl From<policy::Value> for TagValue {
    fn from(value: policy::Value) -> Self {
        match value.value {
            Some(value::Value::StringValue(s)) => TagValue::String(s),
            Some(value::Value::Int64Value(i)) => TagValue::Int64(i),
            Some(value::Value::DoubleValue(d)) => TagValue::Double(d),
            Some(value::Value::BoolValue(b)) => TagValue::Bool(b),
            Some(value::Value::IpAddressValue(ip)) => TagValue::IpAddress(ip.value),
            Some(value::Value::TimestampValue(ts)) => TagValue::Timestamp(ts.value),
            Some(value::Value::DurationValue(d)) => TagValue::Duration(d.value),
            Some(value::Value::EmailAddressValue(email)) => TagValue::EmailAddress(Some(email.value)),
            Some(value::Value::DnsNameValue(dns)) => TagValue::DnsName(Some(dns.value)),
            Some(value::Value::UriValue(uri)) => TagValue::Uri(Some(uri.value)),
            Some(value::Value::StringMapValue(map)) => TagValue::StringMap(map.value),
            None => TagValue::Unset,
        }
    }
}

impl From<InstanceMsg> for RawSpan {
    fn from(msg: InstanceMsg) -> Self {
        let parent_span_id = if msg.parent_span_id.is_empty() {
            None
        } else {
            Some(msg.parent_span_id)
        };

        RawSpan {
            trace_id: msg.trace_id,
            span_id: msg.span_id,
            parent_span_id,
            name: msg.name,
            span_name: msg.span_name,
            start_time: msg.start_time.and_then(|ts| ts.value),
            end_time: msg.end_time.and_then(|ts| ts.value),
            tags: msg
                .span_tags
                .into_iter()
                .map(|(key, value)| (key, TagValue::from(value)))
                .collect(),
        }
    }
}
