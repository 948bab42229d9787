use std::time::Duration;

use thiserror::Error;

/// Default HTTP port for health checks
const DEFAULT_HTTP_PORT: u16 = 9600;

/// Error type for healthcheck failures
#[derive(Error, Debug)]
pub enum HealthcheckError {
    #[error("Healthcheck failed: could not create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Healthcheck failed: request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Healthcheck failed: health endpoint returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Perform a health check against `HTTP_PORT`, or 9600 when it is unset or
/// not a port number.
pub async fn healthcheck() -> Result<(), HealthcheckError> {
    let port = std::env::var("HTTP_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_HTTP_PORT);
    healthcheck_with_port(port).await
}

/// Perform a health check against a specific port
pub async fn healthcheck_with_port(port: u16) -> Result<(), HealthcheckError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .map_err(HealthcheckError::Client)?;

    let url = format!("http://127.0.0.1:{port}/v1/health");

    let resp = client
        .get(&url)
        .send()
        .await
        .map_err(HealthcheckError::Request)?;

    if resp.status().is_success() {
        Ok(())
    } else {
        Err(HealthcheckError::Status(resp.status()))
    }
}
