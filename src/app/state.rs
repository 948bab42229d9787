use crate::adapter::GrpcCollectorClient;
use crate::config::Settings;
use crate::error::AdapterError;
use crate::port::ReportClient;
use crate::tracespan::{SpanForwarder, build_reporter};
use std::sync::Arc;

/// Shared application state holding the span forwarder.
pub struct AppState {
    pub forwarder: Arc<SpanForwarder>,
}

impl AppState {
    /// Connect to the collector and build the forwarder.
    ///
    /// Fails when the satellite cannot be reached within the configured
    /// connect timeout.
    pub async fn from_settings(settings: &Settings, reporter_id: u64) -> Result<Self, AdapterError> {
        let client =
            GrpcCollectorClient::connect(&settings.socket_address, settings.connect_timeout())
                .await?;
        let client: Arc<dyn ReportClient> = Arc::new(client);

        Ok(Self {
            forwarder: Arc::new(SpanForwarder::new(client, build_reporter(reporter_id))),
        })
    }
}
