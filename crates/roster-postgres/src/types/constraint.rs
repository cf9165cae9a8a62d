//! Known database constraint violations.

use std::fmt;

/// Database constraints the application reports as specific conflicts.
///
/// The partial unique indexes and the employee→department foreign key are
/// the store-level last line of defense behind the application-level
/// uniqueness and dependent-count checks; when one fires under a racing
/// writer, the violation still maps to a precise conflict message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintViolation {
    /// Another active employee already uses this email address.
    EmployeeEmailTaken,
    /// Another active department already uses this name.
    DepartmentNameTaken,
    /// The referenced department does not exist.
    DepartmentMissing,
}

impl ConstraintViolation {
    /// Maps a database constraint name to a known violation.
    pub fn new(constraint: &str) -> Option<Self> {
        match constraint {
            "employees_active_email_key" => Some(Self::EmployeeEmailTaken),
            "departments_active_name_key" => Some(Self::DepartmentNameTaken),
            "employees_department_id_fkey" => Some(Self::DepartmentMissing),
            _ => None,
        }
    }

    /// Returns a user-facing message for this violation.
    pub fn message(&self) -> &'static str {
        match self {
            Self::EmployeeEmailTaken => "An active employee with this email already exists",
            Self::DepartmentNameTaken => "An active department with this name already exists",
            Self::DepartmentMissing => "The referenced department does not exist",
        }
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_constraints_map() {
        assert_eq!(
            ConstraintViolation::new("employees_active_email_key"),
            Some(ConstraintViolation::EmployeeEmailTaken)
        );
        assert_eq!(
            ConstraintViolation::new("departments_active_name_key"),
            Some(ConstraintViolation::DepartmentNameTaken)
        );
        assert_eq!(ConstraintViolation::new("something_else"), None);
    }
}
