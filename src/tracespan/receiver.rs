//! HTTP receiver for `tracespan` batches
//!
//! Supports:
//! - POST /v1/tracespan (protobuf `HandleTraceSpanRequest`)

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use prost::Message;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::error::AdapterError;
use crate::proto::adapter_model::ReportResult;
use crate::proto::tracespan::HandleTraceSpanRequest;
use crate::tracespan::forwarder::SpanForwarder;

/// Application state for the tracespan handler
#[derive(Clone)]
pub struct TraceSpanState {
    pub forwarder: Arc<SpanForwarder>,
}

/// Create Axum router for the tracespan HTTP endpoint
pub fn tracespan_routes(state: TraceSpanState) -> Router {
    Router::new()
        .route("/v1/tracespan", post(receive_tracespan_http))
        .with_state(state)
}

/// Accepts: application/x-protobuf
/// Returns: application/x-protobuf on success, JSON error otherwise
#[instrument(skip(state, body), fields(body_size = body.len()))]
async fn receive_tracespan_http(State(state): State<TraceSpanState>, body: Bytes) -> Response {
    let request = match HandleTraceSpanRequest::decode(body) {
        Ok(req) => req,
        Err(e) => {
            warn!(error = %e, "Failed to decode tracespan request");
            return error_response(StatusCode::BAD_REQUEST, format!("invalid request body: {e}"));
        }
    };

    match state.forwarder.forward(request).await {
        Ok(count) => {
            info!(count, "Accepted tracespan batch");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/x-protobuf")],
                Bytes::from(ReportResult {}.encode_to_vec()),
            )
                .into_response()
        }
        Err(e @ AdapterError::Conversion(_)) => {
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e) => error_response(StatusCode::BAD_GATEWAY, e.to_string()),
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::policy;
    use crate::proto::tracespan::InstanceMsg;
    use crate::test_support::MockReportClient;
    use crate::tracespan::assembler::build_reporter;
    use axum_test::TestServer;

    fn server(client: &Arc<MockReportClient>) -> TestServer {
        let forwarder = Arc::new(SpanForwarder::new(client.clone(), build_reporter(1)));
        TestServer::new(tracespan_routes(TraceSpanState { forwarder })).unwrap()
    }

    fn request_with_span(end_seconds: i64) -> HandleTraceSpanRequest {
        let time = |seconds| {
            Some(policy::TimeStamp {
                value: Some(prost_types::Timestamp { seconds, nanos: 0 }),
            })
        };
        HandleTraceSpanRequest {
            instances: vec![InstanceMsg {
                name: "svc".to_string(),
                trace_id: "1a".to_string(),
                span_id: "2b".to_string(),
                span_name: "op".to_string(),
                start_time: time(100),
                end_time: time(end_seconds),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_valid_batch_is_forwarded() {
        let client = Arc::new(MockReportClient::new());
        let server = server(&client);

        let response = server
            .post("/v1/tracespan")
            .bytes(Bytes::from(request_with_span(101).encode_to_vec()))
            .await;

        response.assert_status_ok();
        assert_eq!(client.report_count(), 1);
    }

    #[tokio::test]
    async fn test_garbage_body_is_bad_request() {
        let client = Arc::new(MockReportClient::new());
        let server = server(&client);

        let response = server
            .post("/v1/tracespan")
            .bytes(Bytes::from_static(&[0xff, 0xff, 0xff]))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(client.report_count(), 0);
    }

    #[tokio::test]
    async fn test_conversion_failure_is_bad_request() {
        let client = Arc::new(MockReportClient::new());
        let server = server(&client);

        let response = server
            .post("/v1/tracespan")
            .bytes(Bytes::from(request_with_span(99).encode_to_vec()))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("expected start time to be before end time")
        );
    }

    #[tokio::test]
    async fn test_collector_failure_is_bad_gateway() {
        let client = Arc::new(MockReportClient::new());
        client.set_should_fail(true);
        let server = server(&client);

        let response = server
            .post("/v1/tracespan")
            .bytes(Bytes::from(request_with_span(101).encode_to_vec()))
            .await;

        response.assert_status(StatusCode::BAD_GATEWAY);
    }
}
