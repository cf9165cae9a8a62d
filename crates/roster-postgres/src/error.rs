//! Error types for store operations.

use std::borrow::Cow;

use deadpool::managed::TimeoutType;
use diesel::result::{ConnectionError, Error};
use diesel_async::pooled_connection::PoolError as DieselPoolError;
use diesel_async::pooled_connection::deadpool::PoolError as DeadpoolError;

use crate::types::ConstraintViolation;

/// Type-erased error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for all store operations.
#[derive(Debug, thiserror::Error)]
#[must_use = "database errors should be handled appropriately"]
pub enum PgError {
    /// Invalid or inconsistent store configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A pool operation (wait, create, recycle) timed out.
    #[error("Database operation timed out")]
    Timeout(TimeoutType),

    /// A connection could not be established or kept alive.
    #[error("Database connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// Applying embedded migrations failed.
    #[error("Database migration error: {0}")]
    Migration(BoxError),

    /// A query failed, including constraint violations.
    #[error("Database query error: {0}")]
    Query(#[from] Error),

    /// An error outside the categories above.
    #[error("Unexpected error: {0}")]
    Unexpected(Cow<'static, str>),
}

impl PgError {
    /// Returns the violated constraint name, if this is a constraint error.
    pub fn constraint(&self) -> Option<&str> {
        let PgError::Query(Error::DatabaseError(_, err)) = self else {
            return None;
        };

        err.constraint_name()
    }

    /// Returns the typed [`ConstraintViolation`] behind this error, if any.
    ///
    /// Only the constraints named in the migrations map; everything else
    /// stays a plain query error.
    pub fn constraint_violation(&self) -> Option<ConstraintViolation> {
        self.constraint().and_then(ConstraintViolation::new)
    }

    /// Returns whether a retry of the same operation could succeed.
    ///
    /// Pool timeouts and dropped connections qualify; configuration,
    /// migration, and query errors do not.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PgError::Timeout(_) | PgError::Connection(ConnectionError::BadConnection(_))
        )
    }

    /// Returns whether a retry of the same operation cannot succeed.
    pub fn is_permanent(&self) -> bool {
        !self.is_transient()
    }
}

impl From<DeadpoolError> for PgError {
    fn from(value: DeadpoolError) -> Self {
        match value {
            DeadpoolError::Timeout(timeout) => Self::Timeout(timeout),
            DeadpoolError::Backend(DieselPoolError::QueryError(error)) => Self::Query(error),
            DeadpoolError::Backend(DieselPoolError::ConnectionError(error)) => {
                Self::Connection(error)
            }
            DeadpoolError::PostCreateHook(err) => Self::Unexpected(err.to_string().into()),
            DeadpoolError::NoRuntimeSpecified => {
                Self::Unexpected("No runtime specified for the connection pool".into())
            }
            DeadpoolError::Closed => Self::Connection(ConnectionError::InvalidConnectionUrl(
                "Connection pool is closed".into(),
            )),
        }
    }
}

/// Specialized [`Result`] for store operations.
pub type PgResult<T, E = PgError> = Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_classification() {
        let timeout = PgError::Timeout(TimeoutType::Wait);
        assert!(timeout.is_transient());
        assert!(!timeout.is_permanent());

        let config = PgError::Config("bad url".into());
        assert!(config.is_permanent());
    }

    #[test]
    fn no_constraint_on_plain_errors() {
        let err = PgError::Unexpected("boom".into());
        assert!(err.constraint().is_none());
        assert!(err.constraint_violation().is_none());
    }

    #[test]
    fn pool_timeout_maps_to_timeout() {
        let err = PgError::from(DeadpoolError::Timeout(TimeoutType::Create));
        assert!(matches!(err, PgError::Timeout(TimeoutType::Create)));
        assert!(err.is_transient());
    }
}
