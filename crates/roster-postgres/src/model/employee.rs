//! Employee model for PostgreSQL database operations.

use diesel::prelude::*;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::schema::employees;

/// An employee record with audit metadata and soft-delete markers.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Employee {
    /// Unique employee identifier (opaque, non-sequential)
    pub id: Uuid,
    /// Full name (2-100 characters)
    pub full_name: String,
    /// Email address, unique among active employees
    pub email: String,
    /// Date of birth
    pub date_of_birth: Date,
    /// Referenced department
    pub department_id: Uuid,
    /// Whether the record is soft-deleted
    pub is_deleted: bool,
    /// Timestamp when the record was created
    pub created_at: OffsetDateTime,
    /// Actor that created the record
    pub created_by: String,
    /// Timestamp of the last mutation
    pub updated_at: Option<OffsetDateTime>,
    /// Actor of the last mutation
    pub updated_by: Option<String>,
    /// Timestamp when the record was soft-deleted
    pub deleted_at: Option<OffsetDateTime>,
    /// Actor that soft-deleted the record
    pub deleted_by: Option<String>,
    /// Opaque version stamp, bumped by the store on every write
    pub revision: i64,
}

/// Data for creating a new employee.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewEmployee {
    /// Full name
    pub full_name: String,
    /// Email address
    pub email: String,
    /// Date of birth
    pub date_of_birth: Date,
    /// Referenced department
    pub department_id: Uuid,
    /// Actor creating the record
    pub created_by: String,
}

/// Data for a full-record employee update.
///
/// Updates replace the whole mutable surface of the record; the audit
/// fields are set alongside and the revision is bumped by the repository.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateEmployee {
    /// Full name
    pub full_name: String,
    /// Email address
    pub email: String,
    /// Date of birth
    pub date_of_birth: Date,
    /// Referenced department
    pub department_id: Uuid,
}

impl Employee {
    /// Returns whether the employee is active (not soft-deleted).
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }

    /// Returns whether the record carries consistent deletion markers.
    pub fn has_deletion_markers(&self) -> bool {
        self.deleted_at.is_some() && self.deleted_by.is_some()
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::*;

    fn sample_employee() -> Employee {
        Employee {
            id: Uuid::new_v4(),
            full_name: "Ann Lee".to_owned(),
            email: "ann@x.com".to_owned(),
            date_of_birth: date!(1990 - 01 - 01),
            department_id: Uuid::new_v4(),
            is_deleted: false,
            created_at: datetime!(2025-01-01 00:00 UTC),
            created_by: "hr-admin".to_owned(),
            updated_at: None,
            updated_by: None,
            deleted_at: None,
            deleted_by: None,
            revision: 1,
        }
    }

    #[test]
    fn active_employee_predicates() {
        let employee = sample_employee();
        assert!(employee.is_active());
        assert!(!employee.has_deletion_markers());
    }

    #[test]
    fn deleted_employee_predicates() {
        let mut employee = sample_employee();
        employee.is_deleted = true;
        employee.deleted_at = Some(datetime!(2025-02-01 00:00 UTC));
        employee.deleted_by = Some("hr-admin".to_owned());

        assert!(!employee.is_active());
        assert!(employee.has_deletion_markers());
    }
}
