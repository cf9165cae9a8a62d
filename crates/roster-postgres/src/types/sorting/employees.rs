//! Sorting options for employee queries.

use serde::{Deserialize, Serialize};
use strum::EnumString;

use super::SortBy;

/// Fields available for sorting employees.
///
/// This is the full allow-list; anything else falls back to the default
/// (full name) via [`parse_or_default`].
///
/// [`parse_or_default`]: EmployeeSortField::parse_or_default
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum EmployeeSortField {
    /// Sort by employee name.
    #[default]
    #[strum(serialize = "name", serialize = "full_name", serialize = "fullName")]
    FullName,
    /// Sort by email address.
    #[strum(serialize = "email")]
    Email,
    /// Sort by creation timestamp.
    #[strum(serialize = "created_at", serialize = "createdAt")]
    CreatedAt,
    /// Sort by date of birth.
    #[strum(
        serialize = "date_of_birth",
        serialize = "dateOfBirth",
        serialize = "dob"
    )]
    DateOfBirth,
    /// Sort by the name of the referenced department.
    #[strum(
        serialize = "department",
        serialize = "department_name",
        serialize = "departmentName"
    )]
    DepartmentName,
}

impl EmployeeSortField {
    /// Parses a sort key, falling back to the default for unknown values.
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or_default()
    }
}

/// Sorting specification for employees.
pub type EmployeeSortBy = SortBy<EmployeeSortField>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_parse() {
        assert_eq!(
            EmployeeSortField::parse_or_default(Some("email")),
            EmployeeSortField::Email
        );
        assert_eq!(
            EmployeeSortField::parse_or_default(Some("createdAt")),
            EmployeeSortField::CreatedAt
        );
        assert_eq!(
            EmployeeSortField::parse_or_default(Some("departmentName")),
            EmployeeSortField::DepartmentName
        );
        assert_eq!(
            EmployeeSortField::parse_or_default(Some("dob")),
            EmployeeSortField::DateOfBirth
        );
    }

    #[test]
    fn unknown_keys_fall_back_to_name() {
        assert_eq!(
            EmployeeSortField::parse_or_default(Some("bogusField")),
            EmployeeSortField::FullName
        );
        assert_eq!(
            EmployeeSortField::parse_or_default(None),
            EmployeeSortField::FullName
        );
        assert_eq!(
            EmployeeSortField::parse_or_default(Some("")),
            EmployeeSortField::FullName
        );
    }
}
