//! CLI configuration management.
//!
//! This module defines the complete CLI configuration hierarchy:
//!
//! ```text
//! Cli
//! ├── service: ServiceConfig  # Database connection and pool settings
//! └── server: ServerConfig    # Host, port, timeouts
//! ```
//!
//! All configuration can be provided via CLI arguments or environment
//! variables. Use `--help` to see all available options.
//!
//! ```bash
//! # Configure database and server
//! roster --postgres-endpoint "postgresql://..." --port 8080
//!
//! # Or via environment variables
//! POSTGRES_URL="postgresql://..." PORT=8080 roster
//! ```

mod server;

use clap::Parser;
use roster_server::service::ServiceConfig;
use serde::{Deserialize, Serialize};
pub use server::ServerConfig;

use crate::TRACING_TARGET_CONFIG;

/// Complete CLI configuration.
///
/// Combines all configuration groups for the roster server:
/// - [`ServiceConfig`]: Database connection and pool settings
/// - [`ServerConfig`]: Network binding and lifecycle
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "roster")]
#[command(about = "Roster employee directory server")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// External service configuration (database).
    #[clap(flatten)]
    pub service: ServiceConfig,
}

/// Logs server configuration details at startup.
pub fn log_server_config(config: &ServerConfig) {
    tracing::info!(
        target: TRACING_TARGET_CONFIG,
        host = %config.host,
        port = config.port,
        development_mode = config.is_development(),
        "Server configured successfully"
    );
}
