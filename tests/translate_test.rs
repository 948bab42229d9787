use std::collections::HashMap;

use lightstep_adapter::domain::{RawSpan, TagValue};
use lightstep_adapter::error::SpanError;
use lightstep_adapter::proto::collector::{KeyValue, key_value, reference::Relationship};
use lightstep_adapter::tracespan::tags::{COMPONENT_NAME_KEY, PARENT_SPAN_GUID_KEY};
use lightstep_adapter::tracespan::{assemble, build_reporter, translate_span};
use prost_types::Timestamp;

const T: i64 = 1_700_000_000;

fn at(micros: i64) -> Option<Timestamp> {
    Some(Timestamp {
        seconds: T + micros.div_euclid(1_000_000),
        nanos: (micros.rem_euclid(1_000_000) * 1_000) as i32,
    })
}

fn span(span_id: &str, parent: Option<&str>, start_us: i64, end_us: i64) -> RawSpan {
    RawSpan {
        trace_id: "1a".to_string(),
        span_id: span_id.to_string(),
        parent_span_id: parent.map(ToString::to_string),
        name: "svc".to_string(),
        span_name: "op".to_string(),
        start_time: at(start_us),
        end_time: at(end_us),
        tags: HashMap::new(),
    }
}

fn tag_map(tags: &[KeyValue]) -> HashMap<&str, &key_value::Value> {
    tags.iter()
        .map(|kv| (kv.key.as_str(), kv.value.as_ref().unwrap()))
        .collect()
}

fn string(s: &str) -> key_value::Value {
    key_value::Value::StringValue(s.to_string())
}

#[test]
fn test_root_span_end_to_end() {
    let translated = translate_span(&span("2b", None, 0, 1500)).unwrap();

    let ctx = translated.span_context.as_ref().unwrap();
    assert_eq!(ctx.trace_id, 26);
    assert_eq!(ctx.span_id, 43);
    assert!(translated.references.is_empty());
    assert_eq!(translated.duration_micros, 1500);

    let tags = tag_map(&translated.tags);
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[COMPONENT_NAME_KEY], &string("svc"));
    assert_eq!(tags[PARENT_SPAN_GUID_KEY], &string(""));
}

#[test]
fn test_child_span_end_to_end() {
    let mut raw = span("2b", Some("3C"), 0, 10);
    raw.tags
        .insert("http.status_code".to_string(), TagValue::Int64(200));
    raw.tags.insert(
        "peer.address".to_string(),
        TagValue::IpAddress(vec![127, 0, 0, 1]),
    );

    let translated = translate_span(&raw).unwrap();

    assert_eq!(translated.references.len(), 1);
    let reference = &translated.references[0];
    assert_eq!(reference.relationship(), Relationship::ChildOf);
    let parent = reference.span_context.as_ref().unwrap();
    assert_eq!((parent.trace_id, parent.span_id), (26, 0x3c));

    let tags = tag_map(&translated.tags);
    assert_eq!(tags.len(), 4);
    assert_eq!(tags[PARENT_SPAN_GUID_KEY], &string("3C"));
    assert_eq!(tags["http.status_code"], &key_value::Value::IntValue(200));
    assert_eq!(tags["peer.address"], &string("127.0.0.1"));
}

#[test]
fn test_batch_fails_on_second_span_then_succeeds_after_swap() {
    let mut batch = vec![
        span("1", None, 0, 100),
        span("2", Some("1"), 500, 200),
        span("3", Some("1"), 0, 300),
    ];

    let err = assemble(Some(build_reporter(1)), &batch).unwrap_err();
    assert_eq!(err.index, 1);
    assert!(matches!(err.source, SpanError::NegativeDuration { .. }));

    let second = &mut batch[1];
    std::mem::swap(&mut second.start_time, &mut second.end_time);

    let report = assemble(Some(build_reporter(1)), &batch).unwrap();
    assert_eq!(report.spans.len(), 3);
    assert_eq!(report.spans[1].duration_micros, 300);
    assert_eq!(report.reporter.unwrap().reporter_id, 1);
}

#[test]
fn test_unknown_tag_kind_fails_batch() {
    let mut bad = span("2", None, 0, 1);
    bad.tags.insert(
        "labels".to_string(),
        TagValue::StringMap(HashMap::from([("a".to_string(), "b".to_string())])),
    );

    let err = assemble(None, &[span("1", None, 0, 1), bad]).unwrap_err();

    assert_eq!(err.index, 1);
    assert_eq!(
        err.source,
        SpanError::UnsupportedTagType {
            key: "labels".to_string(),
            kind: "string_map",
        }
    );
}

#[test]
fn test_degraded_duration_tag_does_not_fail_span() {
    let mut raw = span("2", None, 0, 1);
    raw.tags.insert("elapsed".to_string(), TagValue::Duration(None));

    let translated = translate_span(&raw).unwrap();

    assert_eq!(
        tag_map(&translated.tags)["elapsed"],
        &string("(duration: nil Duration)")
    );
}

#[test]
fn test_missing_timestamps() {
    let mut raw = span("2", None, 0, 1);
    raw.end_time = None;
    assert_eq!(translate_span(&raw), Err(SpanError::MissingTimestamp));

    raw.start_time = None;
    raw.end_time = at(1);
    assert_eq!(translate_span(&raw), Err(SpanError::MissingTimestamp));
}
