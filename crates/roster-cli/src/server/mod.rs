//! HTTP server startup with lifecycle management.
//!
//! Provides a clean API for starting the HTTP server with graceful
//! shutdown on SIGINT/SIGTERM.

/// Tracing target for server startup events.
pub const TRACING_TARGET_STARTUP: &str = "roster_cli::server::startup";

/// Tracing target for server shutdown events.
pub const TRACING_TARGET_SHUTDOWN: &str = "roster_cli::server::shutdown";

mod error;
mod http_server;
mod shutdown;

use axum::Router;
pub use error::{Result, ServerError};
use http_server::serve_http;
use shutdown::shutdown_signal;

use crate::config::ServerConfig;

/// Starts the HTTP server with the given router and configuration.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the address cannot
/// be bound, or the server encounters a fatal error during operation.
pub async fn serve(app: Router, config: ServerConfig) -> Result<()> {
    serve_http(app, config).await
}
