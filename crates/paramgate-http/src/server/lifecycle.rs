//! Server lifecycle management - startup, shutdown, and signal handling

use crate::errors::{HttpError, HttpResult};
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

/// Start the server with graceful shutdown
pub async fn start_server(addr: SocketAddr, router: axum::Router) -> HttpResult<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| HttpError::startup(format!("Failed to bind to {}: {}", addr, e)))?;

    info!(target: "paramgate::http", %addr, "server listening");

    axum::serve(listener, router.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HttpError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(target: "paramgate::http", error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(target: "paramgate::http", error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!(target: "paramgate::http", "received Ctrl+C, shutting down gracefully");
        },
        _ = terminate => {
            warn!(target: "paramgate::http", "received terminate signal, shutting down gracefully");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_failure_is_startup_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let result = start_server(addr, axum::Router::new()).await;
        assert!(matches!(result, Err(HttpError::StartupFailed { .. })));
    }
}
