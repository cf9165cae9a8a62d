use roster_postgres::model::{Department, Employee};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// An employee record as returned by the API.
///
/// Carries the full audit trail alongside the record fields; the
/// department name is denormalized from the referenced department.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    /// Unique employee identifier.
    pub id: Uuid,
    /// Full name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Date of birth.
    pub date_of_birth: Date,
    /// Referenced department.
    pub department_id: Uuid,
    /// Name of the referenced department, when the lookup joined it.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub department_name: Option<String>,
    /// Whether the record is soft-deleted.
    pub is_deleted: bool,
    /// Timestamp when the record was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Actor that created the record.
    pub created_by: String,
    /// Timestamp of the last mutation.
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    /// Actor of the last mutation.
    pub updated_by: Option<String>,
    /// Timestamp when the record was soft-deleted.
    #[serde(with = "time::serde::rfc3339::option")]
    pub deleted_at: Option<OffsetDateTime>,
    /// Actor that soft-deleted the record.
    pub deleted_by: Option<String>,
    /// Opaque version stamp, bumped on every write.
    pub revision: i64,
}

impl EmployeeResponse {
    /// Creates a response from an employee joined with its department.
    pub fn with_department(employee: Employee, department: &Department) -> Self {
        let mut response = Self::from(employee);
        response.department_name = Some(department.name.clone());
        response
    }
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            full_name: employee.full_name,
            email: employee.email,
            date_of_birth: employee.date_of_birth,
            department_id: employee.department_id,
            department_name: None,
            is_deleted: employee.is_deleted,
            created_at: employee.created_at,
            created_by: employee.created_by,
            updated_at: employee.updated_at,
            updated_by: employee.updated_by,
            deleted_at: employee.deleted_at,
            deleted_by: employee.deleted_by,
            revision: employee.revision,
        }
    }
}

impl From<(Employee, Department)> for EmployeeResponse {
    fn from((employee, department): (Employee, Department)) -> Self {
        Self::with_department(employee, &department)
    }
}
