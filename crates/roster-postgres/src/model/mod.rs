//! Database models for all entities in the system.

mod department;
mod employee;

pub use department::{Department, NewDepartment, UpdateDepartment};
pub use employee::{Employee, NewEmployee, UpdateEmployee};
