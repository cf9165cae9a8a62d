//! PostgreSQL connection extractor for request handlers.
//!
//! This module provides the [`PgPool`] extractor that acquires a database
//! connection from the pool for use in request handlers.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut};
use roster_postgres::{PgClient, PgConn};

use crate::handler::{Error, ErrorKind};

/// Extractor that provides a database connection from the pool.
///
/// Acquires a [`PgConn`] from the connection pool of the shared
/// [`PgClient`]; pool exhaustion or connectivity failures reject the
/// request with a 500 envelope before the handler body runs.
#[derive(Debug, Deref, DerefMut)]
pub struct PgPool(pub PgConn);

impl<S> FromRequestParts<S> for PgPool
where
    PgClient: FromRef<S>,
    S: Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pg_client = PgClient::from_ref(state);
        let conn = pg_client.get_connection().await.map_err(|error| {
            tracing::error!(
                target: "roster_server::extract",
                error = %error,
                "failed to acquire database connection",
            );
            ErrorKind::InternalServerError.with_message("Database connection unavailable")
        })?;

        Ok(PgPool(conn))
    }
}
