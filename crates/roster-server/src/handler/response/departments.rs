use roster_postgres::model::Department;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// A department record as returned by the API.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentResponse {
    /// Unique department identifier.
    pub id: Uuid,
    /// Department name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
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

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        Self {
            id: department.id,
            name: department.name,
            description: department.description,
            is_deleted: department.is_deleted,
            created_at: department.created_at,
            created_by: department.created_by,
            updated_at: department.updated_at,
            updated_by: department.updated_by,
            deleted_at: department.deleted_at,
            deleted_by: department.deleted_by,
            revision: department.revision,
        }
    }
}
