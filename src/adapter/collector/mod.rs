//! gRPC client for the LightStep collector (satellite pool).

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tonic::transport::{Channel, Endpoint};
use tracing::info;

use crate::error::AdapterError;
use crate::port::ReportClient;
use crate::proto::collector::collector_service_client::CollectorServiceClient;
use crate::proto::collector::{ReportRequest, ReportResponse};

/// `ReportClient` backed by a long-lived tonic channel.
///
/// Cloning is cheap: clones share the underlying channel.
#[derive(Debug, Clone)]
pub struct GrpcCollectorClient {
    client: CollectorServiceClient<Channel>,
}

impl GrpcCollectorClient {
    /// Connect to the satellite at `address` (`host:port`), failing if the
    /// connection cannot be established within `timeout`.
    pub async fn connect(address: &str, timeout: Duration) -> Result<Self, AdapterError> {
        let connect_error = |source| AdapterError::Connect {
            address: address.to_string(),
            source,
        };

        let channel = Endpoint::from_shared(format!("http://{address}"))
            .map_err(connect_error)?
            .connect_timeout(timeout)
            .connect()
            .await
            .map_err(connect_error)?;

        info!(address, "Connected to collector");
        Ok(Self::from_channel(channel))
    }

    pub fn from_channel(channel: Channel) -> Self {
        Self {
            client: CollectorServiceClient::new(channel),
        }
    }
}

impl ReportClient for GrpcCollectorClient {
    fn report(
        &self,
        request: ReportRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ReportResponse, AdapterError>> + Send + '_>> {
        let mut client = self.client.clone();
        Box::pin(async move {
            let response = client.report(request).await?;
            Ok(response.into_inner())
        })
    }
}
