#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use clap::Parser;
use roster_server::handler::routes;
use roster_server::service::{ServiceState, initialize_tracing};

use crate::config::{Cli, log_server_config};

/// Tracing target for server startup events.
pub const TRACING_TARGET_STARTUP: &str = "roster_cli::startup";

/// Tracing target for server shutdown events.
pub const TRACING_TARGET_SHUTDOWN: &str = "roster_cli::shutdown";

/// Tracing target for configuration events.
pub const TRACING_TARGET_CONFIG: &str = "roster_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    initialize_tracing().context("failed to initialize tracing")?;
    log_startup_info();
    log_server_config(&cli.server);

    cli.server
        .validate()
        .context("invalid server configuration")?;

    let state = ServiceState::from_config(&cli.service)
        .await
        .context("failed to create service state")?;
    let router: Router = routes(state);

    server::serve(router, cli.server).await?;

    Ok(())
}

/// Logs startup information.
fn log_startup_info() {
    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        "starting roster server"
    );

    tracing::debug!(
        target: TRACING_TARGET_STARTUP,
        pid = process::id(),
        arch = std::env::consts::ARCH,
        os = std::env::consts::OS,
        "build information"
    );
}
