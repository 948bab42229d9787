//! Shared test support utilities
//!
//! Provides `MockReportClient`, a `ReportClient` that records every report
//! instead of sending it.

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::AdapterError;
use crate::port::ReportClient;
use crate::proto::collector::{ReportRequest, ReportResponse};

pub struct MockReportClient {
    reports: Mutex<Vec<ReportRequest>>,
    response: Mutex<ReportResponse>,
    should_fail: AtomicBool,
}

impl MockReportClient {
    pub fn new() -> Self {
        Self {
            reports: Mutex::new(Vec::new()),
            response: Mutex::new(ReportResponse::default()),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn set_response(&self, response: ReportResponse) {
        *self.response.lock().unwrap() = response;
    }

    pub fn reports(&self) -> Vec<ReportRequest> {
        self.reports.lock().unwrap().clone()
    }

    pub fn report_count(&self) -> usize {
        self.reports.lock().unwrap().len()
    }
}

impl ReportClient for MockReportClient {
    fn report(
        &self,
        request: ReportRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ReportResponse, AdapterError>> + Send + '_>> {
        Box::pin(async move {
            if self.should_fail.load(Ordering::SeqCst) {
                return Err(AdapterError::Report(tonic::Status::unavailable(
                    "mock collector unavailable",
                )));
            }
            self.reports.lock().unwrap().push(request);
            Ok(self.response.lock().unwrap().clone())
        })
    }
}
