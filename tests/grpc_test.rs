use lightstep_adapter::app::server::serve_grpc;
use lightstep_adapter::error::AdapterError;
use lightstep_adapter::port::ReportClient;
use lightstep_adapter::proto::collector::{ReportRequest, ReportResponse};
use lightstep_adapter::proto::policy;
use lightstep_adapter::proto::tracespan::handle_trace_span_service_client::HandleTraceSpanServiceClient;
use lightstep_adapter::proto::tracespan::{HandleTraceSpanRequest, InstanceMsg};
use lightstep_adapter::tracespan::{SpanForwarder, build_reporter};
use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

struct MockClient {
    reports: Mutex<Vec<ReportRequest>>,
    should_fail: AtomicBool,
}

impl MockClient {
    fn new() -> Self {
        Self {
            reports: Mutex::new(Vec::new()),
            should_fail: AtomicBool::new(false),
        }
    }
}

impl ReportClient for MockClient {
    fn report(
        &self,
        request: ReportRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ReportResponse, AdapterError>> + Send + '_>> {
        Box::pin(async move {
            if self.should_fail.load(Ordering::SeqCst) {
                return Err(AdapterError::Report(tonic::Status::unavailable(
                    "satellite unavailable",
                )));
            }
            self.reports.lock().unwrap().push(request);
            Ok(ReportResponse::default())
        })
    }
}

struct TestServer {
    address: SocketAddr,
    shutdown: CancellationToken,
    handle: JoinHandle<Result<(), AdapterError>>,
}

async fn start_server(client: Arc<MockClient>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let forwarder = Arc::new(SpanForwarder::new(client, build_reporter(3)));
    let shutdown = CancellationToken::new();
    let handle = tokio::spawn(serve_grpc(listener, forwarder, shutdown.clone()));
    TestServer {
        address,
        shutdown,
        handle,
    }
}

async fn connect(address: SocketAddr) -> HandleTraceSpanServiceClient<tonic::transport::Channel> {
    HandleTraceSpanServiceClient::connect(format!("http://{address}"))
        .await
        .unwrap()
}

fn instance(trace_id: &str, start: i64, end: i64) -> InstanceMsg {
    let time = |seconds| {
        Some(policy::TimeStamp {
            value: Some(prost_types::Timestamp { seconds, nanos: 0 }),
        })
    };
    InstanceMsg {
        name: "productpage".to_string(),
        trace_id: trace_id.to_string(),
        span_id: "2b".to_string(),
        span_name: "GET /productpage".to_string(),
        start_time: time(start),
        end_time: time(end),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_grpc_round_trip_forwards_spans() {
    let client = Arc::new(MockClient::new());
    let server = start_server(client.clone()).await;
    let mut grpc = connect(server.address).await;

    grpc.handle_trace_span(HandleTraceSpanRequest {
        instances: vec![instance("1a", 10, 12), instance("1b", 10, 11)],
        adapter_config: Some(prost_types::Any::default()),
        dedup_id: "abc".to_string(),
    })
    .await
    .unwrap();

    let reports = client.reports.lock().unwrap().clone();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].spans.len(), 2);
    assert_eq!(reports[0].spans[0].duration_micros, 2_000_000);
    assert_eq!(reports[0].reporter.as_ref().unwrap().reporter_id, 3);

    drop(grpc);
    server.shutdown.cancel();
    server.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_grpc_conversion_failure_is_invalid_argument() {
    let client = Arc::new(MockClient::new());
    let server = start_server(client.clone()).await;
    let mut grpc = connect(server.address).await;

    let status = grpc
        .handle_trace_span(HandleTraceSpanRequest {
            instances: vec![instance("1a", 12, 10)],
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert_eq!(status.code(), tonic::Code::InvalidArgument);
    assert!(status.message().contains("expected start time to be before end time"));
    assert!(client.reports.lock().unwrap().is_empty());

    drop(grpc);
    server.shutdown.cancel();
    server.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_grpc_collector_status_passes_through() {
    let client = Arc::new(MockClient::new());
    client.should_fail.store(true, Ordering::SeqCst);
    let server = start_server(client.clone()).await;
    let mut grpc = connect(server.address).await;

    let status = grpc
        .handle_trace_span(HandleTraceSpanRequest {
            instances: vec![instance("1a", 10, 12)],
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert_eq!(status.code(), tonic::Code::Unavailable);
    assert_eq!(status.message(), "satellite unavailable");

    drop(grpc);
    server.shutdown.cancel();
    server.handle.await.unwrap().unwrap();
}
