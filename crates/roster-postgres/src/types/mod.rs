//! Shared types for database queries: pagination, sorting, filtering,
//! audit actors, and constraint violations.

mod audit;
mod constraint;
mod filtering;
mod pagination;
mod sorting;

pub use audit::Actor;
pub use constraint::ConstraintViolation;
pub use filtering::{DepartmentFilter, EmployeeFilter};
pub use pagination::{MAX_PAGE_SIZE, OffsetPage, Pagination};
pub use sorting::{
    DepartmentSortBy, DepartmentSortField, EmployeeSortBy, EmployeeSortField, SortBy, SortOrder,
};
