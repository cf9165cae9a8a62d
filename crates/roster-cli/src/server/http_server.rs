//! HTTP server startup and lifecycle management.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::server::{Result, ServerError, shutdown_signal};
use crate::server::{TRACING_TARGET_SHUTDOWN, TRACING_TARGET_STARTUP};

/// Starts an HTTP server with graceful shutdown.
///
/// Validates the configuration, binds to the specified address, and
/// serves requests until a shutdown signal is received.
///
/// # Errors
///
/// Returns an error if:
/// - Server configuration is invalid
/// - The address/port cannot be bound
/// - The server encounters a fatal error during operation
pub async fn serve_http(app: Router, server_config: ServerConfig) -> Result<()> {
    if let Err(validation_error) = server_config.validate() {
        tracing::error!(
            target: TRACING_TARGET_STARTUP,
            error = validation_error.to_string(),
            "Invalid server configuration"
        );

        return Err(ServerError::InvalidConfig(validation_error.to_string()));
    }

    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        host = server_config.host.to_string(),
        port = server_config.port,
        request_timeout_sec = server_config.request_timeout,
        shutdown_timeout_sec = server_config.shutdown_timeout,
        development_mode = server_config.is_development(),
        binds_to_all_interfaces = server_config.binds_to_all_interfaces(),
        "Server configuration loaded"
    );

    let server_addr = server_config.server_addr();

    let listener = match TcpListener::bind(server_addr).await {
        Ok(listener) => {
            tracing::info!(
                target: TRACING_TARGET_STARTUP,
                addr = server_addr.to_string(),
                "Successfully bound to address"
            );

            listener
        }
        Err(listener_err) => {
            tracing::error!(
                target: TRACING_TARGET_STARTUP,
                addr = server_addr.to_string(),
                error = listener_err.to_string(),
                "Failed to bind to address"
            );

            return Err(ServerError::bind_error(
                &server_addr.to_string(),
                listener_err,
            ));
        }
    };

    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        addr = %server_addr,
        "Server is ready and listening for connections"
    );

    if server_config.binds_to_all_interfaces() {
        tracing::warn!(
            target: TRACING_TARGET_STARTUP,
            "Server is bound to all interfaces. Ensure firewall rules are properly configured."
        );
    }

    let shutdown = shutdown_signal(server_config.shutdown_timeout());
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await
    .map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %err,
            "Server encountered an error"
        );
        ServerError::Runtime(err)
    })?;

    tracing::info!(target: TRACING_TARGET_SHUTDOWN, "Server shut down gracefully");
    Ok(())
}
