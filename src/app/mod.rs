mod router;
pub mod server;
mod state;
pub mod tracing;

pub use router::main_router;

use crate::config::Settings;
use crate::error::{AdapterError, ConfigError};
use tokio_util::sync::CancellationToken;

/// Application entry point. Loads settings, initializes tracing, connects to
/// the collector and starts both servers.
pub async fn run() -> Result<(), AdapterError> {
    // Handle healthcheck subcommand (for Docker healthcheck in distroless image)
    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        match crate::healthcheck().await {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1)
            }
        }
    }

    let settings = Settings::from_args(std::env::args_os()).map_err(|e| match e {
        // --help, --version and malformed flags are reported by clap itself
        ConfigError::Args(e) => e.exit(),
        other => other,
    })?;

    tracing::init_tracing(settings.log_level.into());
    ::tracing::info!(?settings, "Loaded settings");

    let reporter_id = settings.reporter_id.unwrap_or_else(rand::random);
    ::tracing::info!(reporter_id, "Using reporter ID");

    let app_state = state::AppState::from_settings(&settings, reporter_id).await?;
    let http_app = main_router(app_state.forwarder.clone());

    server::serve(
        &settings.server_address,
        http_app,
        settings.http_port,
        app_state.forwarder,
        CancellationToken::new(),
    )
    .await
}
