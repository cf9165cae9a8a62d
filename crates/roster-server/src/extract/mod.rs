//! HTTP request extractors with improved error handling.
//!
//! Custom axum extractors used across the handlers:
//!
//! - [`Json`], [`ValidateJson`], [`Path`], [`Query`] reject malformed
//!   input with the uniform failure envelope instead of axum's defaults.
//! - [`PgPool`] acquires a pooled database connection for the request.
//! - [`ActorInfo`] resolves the audit identity from the `x-actor` header.

pub mod reject;

mod actor_info;
mod pg_connection;

pub use crate::extract::actor_info::{ACTOR_HEADER, ActorInfo};
pub use crate::extract::pg_connection::PgPool;
pub use crate::extract::reject::{Json, Path, Query, ValidateJson};
