use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::{debug, error, info, instrument, warn};

use crate::domain::RawSpan;
use crate::error::AdapterError;
use crate::port::ReportClient;
use crate::proto::adapter_model::ReportResult;
use crate::proto::collector::Reporter;
use crate::proto::tracespan::HandleTraceSpanRequest;
use crate::proto::tracespan::handle_trace_span_service_server::HandleTraceSpanService;
use crate::tracespan::assembler::assemble;

/// Turns `tracespan` requests into collector reports and sends them.
///
/// Shared by the gRPC service and the HTTP receiver. Holds no per-request
/// state, so concurrent calls never interact.
pub struct SpanForwarder {
    client: Arc<dyn ReportClient>,
    reporter: Reporter,
}

impl SpanForwarder {
    pub fn new(client: Arc<dyn ReportClient>, reporter: Reporter) -> Self {
        Self { client, reporter }
    }

    /// Forward every instance of `request` in one report.
    ///
    /// Returns the number of spans sent. Nothing is sent when any span fails
    /// to convert or when the request carries no instances.
    #[instrument(
        skip_all,
        fields(dedup_id = %request.dedup_id, instances = request.instances.len())
    )]
    pub async fn forward(&self, request: HandleTraceSpanRequest) -> Result<usize, AdapterError> {
        let reporter = request
            .adapter_config
            .is_some()
            .then(|| self.reporter.clone());
        let spans: Vec<RawSpan> = request.instances.into_iter().map(RawSpan::from).collect();

        let report = assemble(reporter, &spans)
            .inspect_err(|e| warn!(error = %e, "Rejected tracespan batch"))?;

        let count = report.spans.len();
        if count == 0 {
            debug!("No spans to forward");
            return Ok(0);
        }

        let response = self
            .client
            .report(report)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to send report to collector"))?;

        for message in &response.errors {
            error!(collector_error = %message, "Collector reported an error");
        }
        for message in &response.warnings {
            warn!(collector_warning = %message, "Collector reported a warning");
        }

        info!(count, "Forwarded spans to collector");
        Ok(count)
    }
}

#[tonic::async_trait]
impl HandleTraceSpanService for SpanForwarder {
    async fn handle_trace_span(
        &self,
        request: Request<HandleTraceSpanRequest>,
    ) -> Result<Response<ReportResult>, Status> {
        self.forward(request.into_inner()).await?;
        Ok(Response::new(ReportResult {}))
    }
}
