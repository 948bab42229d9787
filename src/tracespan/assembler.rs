//! Report assembly: one inbound batch becomes one collector report.

use crate::domain::RawSpan;
use crate::error::ConversionError;
use crate::proto::collector::{KeyValue, ReportRequest, Reporter, key_value};
use crate::tracespan::converter::translate_span;

pub const HOSTNAME_KEY: &str = "lightstep.hostname";
pub const TRACER_VERSION_KEY: &str = "lightstep.tracer_version";

/// Translate `spans` in order and wrap them in a report.
///
/// Fails on the first span that cannot be translated; no partial report is
/// ever produced. An empty batch yields a report with no spans.
pub fn assemble(
    reporter: Option<Reporter>,
    spans: &[RawSpan],
) -> Result<ReportRequest, ConversionError> {
    let spans = spans
        .iter()
        .enumerate()
        .map(|(index, span)| {
            translate_span(span).map_err(|source| ConversionError {
                index,
                span_id: span.span_id.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ReportRequest {
        reporter,
        auth: None,
        spans,
        timestamp_offset_micros: 0,
    })
}

/// Reporter metadata for this process.
pub fn build_reporter(reporter_id: u64) -> Reporter {
    let hostname = hostname::get()
        .map(|h| h.to_string_lossy().into_owned())
        .unwrap_or_default();

    Reporter {
        reporter_id,
        tags: vec![
            KeyValue {
                key: HOSTNAME_KEY.to_string(),
                value: Some(key_value::Value::StringValue(hostname)),
            },
            KeyValue {
                key: TRACER_VERSION_KEY.to_string(),
                value: Some(key_value::Value::StringValue(
                    env!("CARGO_PKG_VERSION").to_string(),
                )),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpanError;
    use prost_types::Timestamp;
    use std::collections::HashMap;

    fn span(span_id: &str, start: i64, end: i64) -> RawSpan {
        RawSpan {
            trace_id: "1a".to_string(),
            span_id: span_id.to_string(),
            parent_span_id: None,
            name: "svc".to_string(),
            span_name: "op".to_string(),
            start_time: Some(Timestamp {
                seconds: start,
                nanos: 0,
            }),
            end_time: Some(Timestamp {
                seconds: end,
                nanos: 0,
            }),
            tags: HashMap::new(),
        }
    }

    #[test]
    fn test_empty_batch_is_a_report() {
        let report = assemble(None, &[]).unwrap();
        assert!(report.spans.is_empty());
        assert!(report.reporter.is_none());
        assert!(report.auth.is_none());
    }

    #[test]
    fn test_preserves_order_and_reporter() {
        let reporter = build_reporter(7);
        let spans = vec![span("1", 10, 11), span("2", 10, 12), span("3", 10, 13)];

        let report = assemble(Some(reporter.clone()), &spans).unwrap();

        assert_eq!(report.reporter, Some(reporter));
        let ids: Vec<u64> = report
            .spans
            .iter()
            .map(|s| s.span_context.as_ref().unwrap().span_id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(report.spans[2].duration_micros, 3_000_000);
    }

    #[test]
    fn test_first_failure_wins() {
        let spans = vec![span("1", 10, 11), span("2", 12, 11), span("zz", 10, 11)];

        let err = assemble(None, &spans).unwrap_err();

        assert_eq!(err.index, 1);
        assert_eq!(err.span_id, "2");
        assert!(matches!(err.source, SpanError::NegativeDuration { .. }));
    }

    #[test]
    fn test_reporter_tags() {
        let reporter = build_reporter(42);
        assert_eq!(reporter.reporter_id, 42);
        let keys: Vec<&str> = reporter.tags.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, vec![HOSTNAME_KEY, TRACER_VERSION_KEY]);
        assert_eq!(
            reporter.tags[1].value,
            Some(key_value::Value::StringValue(
                env!("CARGO_PKG_VERSION").to_string()
            ))
        );
    }
}
