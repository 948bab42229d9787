use crate::error::AdapterError;
use crate::proto::tracespan::handle_trace_span_service_server::HandleTraceSpanServiceServer;
use crate::tracespan::SpanForwarder;
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Start the gRPC and HTTP servers with graceful shutdown.
///
/// SIGINT/SIGTERM cancels `shutdown_token`, which stops both servers. The
/// gRPC server exiting, cleanly or not, cancels it as well.
pub async fn serve(
    server_address: &str,
    http_app: Router,
    http_port: u16,
    forwarder: Arc<SpanForwarder>,
    shutdown_token: CancellationToken,
) -> Result<(), AdapterError> {
    // Bind gRPC server
    let grpc_listener = bind(server_address).await?;
    info!("gRPC server listening on {}", grpc_listener.local_addr()?);
    info!("  - istio.mixer.adapter.tracespan.HandleTraceSpanService/HandleTraceSpan");

    // Bind HTTP server
    let http_bind_addr = format!("0.0.0.0:{http_port}");
    let http_listener = bind(&http_bind_addr).await?;
    info!("HTTP server listening on {}", http_listener.local_addr()?);
    info!("  - GET  /v1/health     (health check)");
    info!("  - POST /v1/tracespan  (protobuf tracespan batches)");

    // Spawn gRPC server task; its exit stops the HTTP server too
    let grpc_handle = tokio::spawn(cancel_on_exit(
        serve_grpc(grpc_listener, forwarder, shutdown_token.child_token()),
        shutdown_token.clone(),
    ));

    // Run HTTP server
    let http_shutdown = shutdown_token.clone();
    axum::serve(http_listener, http_app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                () = shutdown_signal() => {}
                () = http_shutdown.cancelled() => {}
            }
            http_shutdown.cancel();
        })
        .await?;

    // Wait for gRPC server to finish
    match grpc_handle.await {
        Ok(result) => result?,
        Err(e) => error!("gRPC server task failed: {}", e),
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Run `server` to completion, then cancel `shutdown_token`.
///
/// An error from `server` is logged here and returned to the caller.
async fn cancel_on_exit<F>(server: F, shutdown_token: CancellationToken) -> Result<(), AdapterError>
where
    F: Future<Output = Result<(), AdapterError>>,
{
    let result = server.await;
    if let Err(e) = &result {
        error!(error = %e, "gRPC server exited with error");
    }
    shutdown_token.cancel();
    result
}

/// Serve the tracespan gRPC service on `listener` until `shutdown` fires.
pub async fn serve_grpc(
    listener: TcpListener,
    forwarder: Arc<SpanForwarder>,
    shutdown: CancellationToken,
) -> Result<(), AdapterError> {
    tonic::transport::Server::builder()
        .add_service(HandleTraceSpanServiceServer::from_arc(forwarder))
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown.cancelled_owned())
        .await?;
    Ok(())
}

async fn bind(address: &str) -> Result<TcpListener, AdapterError> {
    TcpListener::bind(address)
        .await
        .map_err(|e| AdapterError::Bind {
            address: address.to_string(),
            source: e,
        })
}

/// Wait for SIGTERM or SIGINT (Ctrl+C) for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, initiating graceful shutdown"),
        () = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::time::Duration;
    use tracing_test::traced_test;

    #[tokio::test]
    #[traced_test]
    async fn test_grpc_failure_cancels_shutdown() {
        let token = CancellationToken::new();
        let failing = async {
            Err(AdapterError::Server(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "listener closed",
            )))
        };

        let handle = tokio::spawn(cancel_on_exit(failing, token.clone()));

        // The HTTP side waits on this token
        tokio::time::timeout(Duration::from_secs(1), token.cancelled())
            .await
            .expect("gRPC exit should cancel the shutdown token");

        let result = handle.await.unwrap();
        assert!(matches!(result, Err(AdapterError::Server(_))));
        assert!(logs_contain("gRPC server exited with error"));
    }

    #[tokio::test]
    async fn test_clean_grpc_exit_cancels_shutdown() {
        let token = CancellationToken::new();

        cancel_on_exit(async { Ok(()) }, token.clone()).await.unwrap();

        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn test_http_server_stops_when_grpc_server_fails() {
        let token = CancellationToken::new();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let http_shutdown = token.clone();
        let http = tokio::spawn(async move {
            axum::serve(listener, Router::new())
                .with_graceful_shutdown(http_shutdown.cancelled_owned())
                .await
        });

        let failing = async { Err(AdapterError::Server(io::Error::other("bind lost"))) };
        let _ = cancel_on_exit(failing, token.clone()).await;

        tokio::time::timeout(Duration::from_secs(5), http)
            .await
            .expect("HTTP server should shut down")
            .unwrap()
            .unwrap();
    }
}
