//! Database migration management.
//!
//! Applies the embedded migrations at startup through
//! [`run_pending_migrations`]. The migration harness is synchronous, so the
//! run is moved onto a blocking thread via [`AsyncConnectionWrapper`].
//!
//! [`AsyncConnectionWrapper`]: diesel_async::async_connection_wrapper::AsyncConnectionWrapper

use std::time::{Duration, Instant};

use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::MigrationHarness;
use tokio::task::spawn_blocking;

use crate::{MIGRATIONS, PgClient, PgError, PgResult, TRACING_TARGET_MIGRATION};

/// Outcome of a migration run.
#[derive(Debug, Clone)]
pub struct MigrationResult {
    /// How long the migration run took
    pub duration: Duration,
    /// Versions applied during this run, in order
    pub applied_versions: Vec<String>,
}

impl MigrationResult {
    /// Returns the number of migrations applied during this run.
    pub fn applied_count(&self) -> usize {
        self.applied_versions.len()
    }

    /// Returns whether this run applied any migrations.
    pub fn is_noop(&self) -> bool {
        self.applied_versions.is_empty()
    }
}

/// Runs all pending migrations on the database.
#[tracing::instrument(skip(pg), target = TRACING_TARGET_MIGRATION)]
pub async fn run_pending_migrations(pg: &PgClient) -> PgResult<MigrationResult> {
    tracing::info!(
        target: TRACING_TARGET_MIGRATION,
        "Starting database migration process",
    );

    let start_time = Instant::now();
    let conn = pg.get_pooled_connection().await?;

    let mut conn: AsyncConnectionWrapper<_> = conn.into();
    let results = spawn_blocking(move || match conn.run_pending_migrations(MIGRATIONS) {
        Ok(versions) => Ok(versions
            .into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()),
        Err(x) => Err(x),
    })
    .await;

    let duration = start_time.elapsed();
    let results = results.map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_MIGRATION,
            duration = ?duration,
            error = %err,
            "Migration task panicked, join error occurred"
        );

        PgError::Migration(err.into())
    })?;

    let applied_versions = results.map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_MIGRATION,
            duration = ?duration,
            error = &err,
            "Database migration process failed"
        );

        PgError::Migration(err)
    })?;

    tracing::info!(
        target: TRACING_TARGET_MIGRATION,
        duration = ?duration,
        migrations_count = applied_versions.len(),
        "Database migration process completed successfully"
    );

    Ok(MigrationResult {
        duration,
        applied_versions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_is_noop() {
        let result = MigrationResult {
            duration: Duration::from_millis(5),
            applied_versions: vec![],
        };

        assert!(result.is_noop());
        assert_eq!(result.applied_count(), 0);
    }
}
