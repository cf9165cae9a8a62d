//! Application state, configuration, and observability.

mod config;
mod state;
mod tracing;

pub use crate::service::config::ServiceConfig;
pub use crate::service::state::ServiceState;
pub use crate::service::tracing::initialize_tracing;
// Re-export error types from crate root for convenience.
pub use crate::{Error, Result};
