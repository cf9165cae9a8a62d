use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use deadpool::managed::{Hook, Pool};
use derive_more::{Deref, DerefMut};
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, ManagerConfig};
use diesel_async::scoped_futures::ScopedBoxFuture;
use diesel_async::{AsyncConnection, RunQueryDsl};

use super::custom_hooks;
use crate::{
    ConnectionPool, PgConfig, PgError, PgResult, PooledConnection, TRACING_TARGET_CONNECTION,
};

/// Backoff before the single retry of a transient pool error.
const RETRY_BACKOFF: Duration = Duration::from_millis(50);

/// Connection pool status information.
#[derive(Debug, Clone)]
pub struct PgPoolStatus {
    /// Maximum number of connections in the pool
    pub max_size: usize,
    /// Current number of connections in the pool
    pub size: usize,
    /// Number of available connections
    pub available: usize,
    /// Number of requests waiting for connections
    pub waiting: usize,
}

impl PgPoolStatus {
    /// Returns the utilization of the pool (0.0 to 1.0).
    #[inline]
    pub fn utilization(&self) -> f64 {
        if self.max_size == 0 {
            0.0
        } else {
            (self.size - self.available) as f64 / self.max_size as f64
        }
    }
}

/// High-level database client that manages connections and migrations.
///
/// This struct provides the main interface for database operations,
/// encapsulating connection pool management and configuration.
#[derive(Clone)]
pub struct PgClient {
    inner: Arc<PgClientInner>,
}

/// Inner data for PgClient
struct PgClientInner {
    pool: ConnectionPool,
    config: PgConfig,
}

impl PgClient {
    /// Creates a new database client with the provided configuration.
    ///
    /// This will establish a connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool configuration is invalid.
    #[tracing::instrument(
        skip(config),
        target = TRACING_TARGET_CONNECTION,
        fields(database_url = %config.database_url_masked())
    )]
    pub fn new(config: PgConfig) -> PgResult<Self> {
        tracing::info!(target: TRACING_TARGET_CONNECTION, "Initializing database client");

        let mut manager_config = ManagerConfig::default();
        manager_config.custom_setup = Box::new(custom_hooks::setup_callback);
        let manager =
            AsyncDieselConnectionManager::new_with_config(&config.postgres_url, manager_config);

        let pool = Pool::builder(manager)
            .max_size(config.postgres_max_connections as usize)
            .wait_timeout(config.connection_timeout())
            .create_timeout(config.connection_timeout())
            .recycle_timeout(config.idle_timeout())
            .runtime(deadpool::Runtime::Tokio1)
            .post_create(Hook::sync_fn(custom_hooks::post_create))
            .pre_recycle(Hook::sync_fn(custom_hooks::pre_recycle))
            .post_recycle(Hook::sync_fn(custom_hooks::post_recycle))
            .build()
            .map_err(|e| {
                tracing::error!(target: TRACING_TARGET_CONNECTION, error = %e, "Failed to create connection pool");
                PgError::Unexpected(format!("Failed to build connection pool: {}", e).into())
            })?;

        Ok(Self {
            inner: Arc::new(PgClientInner { pool, config }),
        })
    }

    /// Creates a new database client and verifies connectivity.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool configuration is invalid or the
    /// connectivity test fails.
    #[tracing::instrument(
        skip(config),
        target = TRACING_TARGET_CONNECTION,
        fields(database_url = %config.database_url_masked())
    )]
    pub async fn new_with_test(config: PgConfig) -> PgResult<Self> {
        let this = Self::new(config)?;

        tracing::debug!(target: TRACING_TARGET_CONNECTION, "Testing database connectivity");
        let mut conn = this.get_pooled_connection().await?;

        #[derive(diesel::QueryableByName)]
        struct ConnectivityTest {
            #[diesel(sql_type = diesel::sql_types::Integer)]
            #[allow(dead_code)]
            result: i32,
        }

        let _: ConnectivityTest = diesel::sql_query("SELECT 1 as result")
            .get_result(&mut *conn)
            .await
            .map_err(|e| {
                tracing::error!(target: TRACING_TARGET_CONNECTION, error = %e, "Database connectivity test failed");
                PgError::from(e)
            })?;

        tracing::info!(
            target: TRACING_TARGET_CONNECTION,
            max_connections = this.inner.config.postgres_max_connections,
            "Database client initialized successfully"
        );

        Ok(this)
    }

    /// Gets a connection from the pool.
    ///
    /// Returns a [`PgConn`] wrapper that derefs to the underlying async
    /// connection. This method will wait up to the configured timeout for an
    /// available connection, retrying once on a transient pool error.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection is available within the timeout
    /// period.
    pub async fn get_connection(&self) -> PgResult<PgConn> {
        let start = std::time::Instant::now();
        let conn = match self.inner.pool.get().await {
            Ok(conn) => conn,
            Err(e) => {
                let error = PgError::from(e);
                if error.is_permanent() {
                    tracing::error!(
                        target: TRACING_TARGET_CONNECTION,
                        error = %error,
                        elapsed = ?start.elapsed(),
                        "Failed to acquire connection from pool"
                    );
                    return Err(error);
                }

                tracing::warn!(
                    target: TRACING_TARGET_CONNECTION,
                    error = %error,
                    "Transient pool error, retrying connection acquisition"
                );
                tokio::time::sleep(RETRY_BACKOFF).await;

                self.inner.pool.get().await.map_err(|e| {
                    tracing::error!(
                        target: TRACING_TARGET_CONNECTION,
                        error = %e,
                        elapsed = ?start.elapsed(),
                        "Failed to acquire connection from pool after retry"
                    );
                    PgError::from(e)
                })?
            }
        };

        let elapsed = start.elapsed();
        if elapsed > Duration::from_millis(100) {
            tracing::warn!(
                target: TRACING_TARGET_CONNECTION,
                elapsed = ?elapsed,
                "Connection acquisition took longer than expected"
            );
        }

        Ok(PgConn::new(conn))
    }

    /// Gets a raw pooled connection from the pool.
    ///
    /// This is intended for internal use by the migration module.
    pub(crate) async fn get_pooled_connection(&self) -> PgResult<PooledConnection> {
        let conn = self.inner.pool.get().await.map_err(PgError::from)?;
        Ok(conn)
    }

    /// Gets the current pool status and statistics.
    #[inline]
    pub fn pool_status(&self) -> PgPoolStatus {
        let status = self.inner.pool.status();
        PgPoolStatus {
            max_size: status.max_size,
            size: status.size,
            available: status.available,
            waiting: status.waiting,
        }
    }

    /// Gets the database configuration used by this client.
    #[inline]
    pub fn config(&self) -> &PgConfig {
        &self.inner.config
    }
}

impl fmt::Debug for PgClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pool_status = self.pool_status();
        f.debug_struct("PgClient")
            .field("database_url", &self.inner.config.database_url_masked())
            .field(
                "pool_max_connections",
                &self.inner.config.postgres_max_connections,
            )
            .field("pool_current_size", &pool_status.size)
            .field("pool_available", &pool_status.available)
            .field("pool_waiting", &pool_status.waiting)
            .finish()
    }
}

/// A wrapper around a pooled database connection.
///
/// `PgConn` owns a connection obtained from the connection pool and derefs
/// to the underlying [`AsyncPgConnection`] accepted by the repositories
/// (e.g., [`EmployeeRepository`], [`DepartmentRepository`]). When dropped,
/// the connection is automatically returned to the pool.
///
/// ```ignore
/// let mut conn = pg_client.get_connection().await?;
/// let employee = EmployeeRepository::find_employee_by_id(&mut conn, id, false).await?;
/// ```
///
/// [`EmployeeRepository`]: crate::query::EmployeeRepository
/// [`DepartmentRepository`]: crate::query::DepartmentRepository
/// [`AsyncPgConnection`]: diesel_async::AsyncPgConnection
#[derive(Deref, DerefMut)]
pub struct PgConn {
    #[deref]
    #[deref_mut]
    conn: PooledConnection,
}

impl PgConn {
    /// Creates a new connection wrapper from a pooled connection.
    pub fn new(conn: PooledConnection) -> Self {
        Self { conn }
    }

    /// Executes the given function within a database transaction.
    ///
    /// If the function returns `Ok`, the transaction is committed.
    /// If the function returns `Err`, the transaction is rolled back.
    ///
    /// Check-then-mutate sequences (uniqueness probes, member counts) run
    /// through this so concurrent writers cannot interleave between the
    /// check and the write.
    pub async fn transaction<'a, T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        F: for<'r> FnOnce(&'r mut PooledConnection) -> ScopedBoxFuture<'a, 'r, Result<T, E>>
            + Send
            + 'a,
        T: Send + 'a,
        E: From<diesel::result::Error> + Send + 'a,
    {
        self.conn.transaction(f).await
    }
}

impl fmt::Debug for PgConn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgConn").finish_non_exhaustive()
    }
}
