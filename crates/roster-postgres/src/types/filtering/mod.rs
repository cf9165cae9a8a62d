//! Filtering options for database queries.
//!
//! Filters combine a free-text term with optional per-field criteria. The
//! free-text term matches as a case-insensitive substring; per-field criteria
//! are conjunctive with the term and with each other, and date ranges are
//! inclusive on both bounds.

mod departments;
mod employees;

pub use departments::DepartmentFilter;
pub use employees::EmployeeFilter;

/// Normalizes an optional text criterion: trims whitespace and drops
/// empty strings.
fn normalize(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
