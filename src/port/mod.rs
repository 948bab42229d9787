//! Outbound port to the trace collector.
//!
//! Forwarding code only sees this trait, so tests can swap in a mock and the
//! production build uses the gRPC client in `adapter::collector`.

use std::future::Future;
use std::pin::Pin;

use crate::error::AdapterError;
use crate::proto::collector::{ReportRequest, ReportResponse};

/// Sends assembled reports to the collector.
///
/// This trait is dyn-compatible by using boxed futures.
pub trait ReportClient: Send + Sync {
    /// Send one report. Transport failures come back as
    /// [`AdapterError::Report`] carrying the collector's status unchanged.
    fn report(
        &self,
        request: ReportRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ReportResponse, AdapterError>> + Send + '_>>;
}
