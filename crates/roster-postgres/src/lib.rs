#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Embeds all migrations into the final binary.
pub(crate) const MIGRATIONS: diesel_migrations::EmbeddedMigrations =
    diesel_migrations::embed_migrations!();

// Tracing target constants for consistent logging.

/// Tracing target for database query operations.
///
/// Use this target for logging query execution, results, and query-related errors.
pub const TRACING_TARGET_QUERY: &str = "roster_postgres::query";

/// Tracing target for database migration operations.
///
/// Use this target for logging migration application and status checks.
pub const TRACING_TARGET_MIGRATION: &str = "roster_postgres::migrations";

/// Tracing target for database connection operations.
///
/// Use this target for logging connection establishment, pool management, and connection errors.
pub const TRACING_TARGET_CONNECTION: &str = "roster_postgres::connection";

mod client;
mod error;
pub mod model;
pub mod query;
mod schema;
pub mod types;

pub use diesel::result::Error as DieselError;
pub use diesel_async::AsyncPgConnection as PgConnection;
pub use diesel_async::scoped_futures;

pub use crate::client::{
    ConnectionPool, MigrationResult, PgClient, PgConfig, PgConn, PgPoolStatus, PooledConnection,
    run_pending_migrations,
};
pub use crate::error::{BoxError, PgError, PgResult};
