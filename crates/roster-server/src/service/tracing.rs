//! Observability and tracing configuration.

use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const fn default_log_level() -> &'static str {
    "info,roster_server=debug,roster_postgres=debug"
}

#[must_use]
fn build_env_filter() -> tracing_subscriber::EnvFilter {
    let current =
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_log_level().to_string());

    let env = format!("{current},tower=info,tower_http=info");
    tracing_subscriber::EnvFilter::new(env)
}

/// Initializes the tracing subscriber for the application.
///
/// Sets up structured logging with environment-based filtering and pretty
/// formatting for development. The log level is configured via `RUST_LOG`;
/// the default enables `debug` for the server and database crates and
/// `info` elsewhere.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn initialize_tracing() -> anyhow::Result<()> {
    let env_filter = build_env_filter();
    let fmt_layer = layer().pretty();
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::trace!(
        target: "roster_server::service",
        "initialized tracing subscriber",
    );

    Ok(())
}
