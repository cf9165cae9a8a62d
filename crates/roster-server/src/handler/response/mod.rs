//! Response types for HTTP handlers.

mod departments;
mod employees;
mod envelope;

pub use departments::DepartmentResponse;
pub use employees::EmployeeResponse;
pub use envelope::{ApiResponse, PageData};
