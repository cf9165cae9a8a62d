//! Request types for HTTP handlers.

mod departments;
mod employees;
mod paginations;
mod paths;

/// Failure message for a search request carrying no usable criterion.
pub(crate) const MISSING_SEARCH_CRITERIA: &str = "At least one search criteria must be provided";

pub use departments::*;
pub use employees::*;
pub use paginations::*;
pub use paths::*;
