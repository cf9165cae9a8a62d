//! Sorting options for database queries.
//!
//! Sort keys are enumerated types mapped through a fixed table to typed
//! order expressions in the repository layer; raw strings never reach
//! query construction. Unrecognized keys and directions fall back to the
//! defaults instead of erroring.

mod departments;
mod employees;

pub use departments::{DepartmentSortBy, DepartmentSortField};
pub use employees::{EmployeeSortBy, EmployeeSortField};
use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Sort order direction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum SortOrder {
    /// Ascending order (A-Z, oldest first).
    #[default]
    #[strum(serialize = "asc", serialize = "ascending")]
    Asc,
    /// Descending order (Z-A, newest first).
    #[strum(serialize = "desc", serialize = "descending")]
    Desc,
}

impl SortOrder {
    /// Parses a sort direction, falling back to ascending for unknown values.
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or_default()
    }
}

/// Generic sort specification with field and order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortBy<F> {
    /// The field to sort by.
    pub field: F,
    /// The sort order direction.
    #[serde(default)]
    pub order: SortOrder,
}

impl<F: Default> Default for SortBy<F> {
    fn default() -> Self {
        Self {
            field: F::default(),
            order: SortOrder::default(),
        }
    }
}

impl<F> SortBy<F> {
    /// Creates a new sort specification with the given field and order.
    #[inline]
    pub fn new(field: F, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Creates a new sort specification with ascending order.
    #[inline]
    pub fn asc(field: F) -> Self {
        Self::new(field, SortOrder::Asc)
    }

    /// Creates a new sort specification with descending order.
    #[inline]
    pub fn desc(field: F) -> Self {
        Self::new(field, SortOrder::Desc)
    }

    /// Returns whether the sort order is ascending.
    #[inline]
    pub fn is_asc(&self) -> bool {
        matches!(self.order, SortOrder::Asc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_order_fallback() {
        assert_eq!(SortOrder::parse_or_default(Some("desc")), SortOrder::Desc);
        assert_eq!(
            SortOrder::parse_or_default(Some("DESCENDING")),
            SortOrder::Desc
        );
        assert_eq!(SortOrder::parse_or_default(Some("sideways")), SortOrder::Asc);
        assert_eq!(SortOrder::parse_or_default(None), SortOrder::Asc);
    }

    #[test]
    fn sort_by_constructors() {
        let sort = SortBy::desc(EmployeeSortField::Email);
        assert_eq!(sort.field, EmployeeSortField::Email);
        assert!(!sort.is_asc());

        let sort: SortBy<EmployeeSortField> = SortBy::default();
        assert_eq!(sort.field, EmployeeSortField::FullName);
        assert!(sort.is_asc());
    }
}
