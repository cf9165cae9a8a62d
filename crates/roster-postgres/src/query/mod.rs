//! Database query repositories for all entities in the system.
//!
//! This module contains repository implementations that provide high-level
//! database operations for employees and departments, encapsulating common
//! patterns and providing type-safe interfaces.
//!
//! # Soft deletion
//!
//! Every read path either filters out soft-deleted rows or takes an explicit
//! `include_deleted` flag; nothing is filtered implicitly behind the caller's
//! back. Deletion never removes rows, it only sets the deletion markers, and
//! restore is the only way back to the active state.
//!
//! # Pagination
//!
//! All queries that may return large result sets use the [`Pagination`]
//! struct and return an [`OffsetPage`] carrying the windowed slice and the
//! total count over the same filter.
//!
//! [`Pagination`]: crate::types::Pagination
//! [`OffsetPage`]: crate::types::OffsetPage

pub mod department;
pub mod employee;

pub use department::DepartmentRepository;
pub use employee::EmployeeRepository;

diesel::define_sql_function! {
    /// SQL `lower()`, used for case-insensitive uniqueness checks.
    fn lower(value: diesel::sql_types::Text) -> diesel::sql_types::Text;
}
