//! Graceful shutdown signal handling.

use std::time::Duration;

use super::TRACING_TARGET_SHUTDOWN;

/// Resolves when SIGINT (Ctrl+C) or SIGTERM is received.
///
/// Passed to axum's graceful-shutdown hook; in-flight requests get up to
/// `shutdown_timeout` to drain once a signal arrives.
pub async fn shutdown_signal(shutdown_timeout: Duration) {
    tokio::select! {
        () = interrupt() => {},
        () = terminate() => {},
    }

    tracing::info!(
        target: TRACING_TARGET_SHUTDOWN,
        timeout_secs = shutdown_timeout.as_secs(),
        "Graceful shutdown initiated"
    );
}

async fn interrupt() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!(
            target: TRACING_TARGET_SHUTDOWN,
            "Received Ctrl+C signal, initiating graceful shutdown"
        ),
        Err(e) => tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %e,
            "Failed to install Ctrl+C handler"
        ),
    }
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
            tracing::info!(
                target: TRACING_TARGET_SHUTDOWN,
                "Received SIGTERM signal, initiating graceful shutdown"
            );
        }
        Err(e) => tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %e,
            "Failed to install SIGTERM handler"
        ),
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}
