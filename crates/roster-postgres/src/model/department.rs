//! Department model for PostgreSQL database operations.

use diesel::prelude::*;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::schema::departments;

/// A department record with audit metadata and soft-delete markers.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = departments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Department {
    /// Unique department identifier (opaque, non-sequential)
    pub id: Uuid,
    /// Department name (2-100 characters), unique among active departments
    pub name: String,
    /// Optional description (up to 500 characters)
    pub description: Option<String>,
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

/// Data for creating a new department.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = departments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewDepartment {
    /// Department name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Actor creating the record
    pub created_by: String,
}

/// Data for a full-record department update.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = departments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(treat_none_as_null = true)]
pub struct UpdateDepartment {
    /// Department name
    pub name: String,
    /// Optional description; `None` clears it
    pub description: Option<String>,
}

impl Department {
    /// Returns whether the department is active (not soft-deleted).
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn active_department_predicate() {
        let department = Department {
            id: Uuid::new_v4(),
            name: "Engineering".to_owned(),
            description: None,
            is_deleted: false,
            created_at: datetime!(2025-01-01 00:00 UTC),
            created_by: "hr-admin".to_owned(),
            updated_at: None,
            updated_by: None,
            deleted_at: None,
            deleted_by: None,
            revision: 1,
        };

        assert!(department.is_active());
    }
}
