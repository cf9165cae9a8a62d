use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `Path` param for `{employeeId}` handlers.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePathParams {
    /// Unique identifier of the employee.
    pub employee_id: Uuid,
}

/// `Path` param for `{departmentId}` handlers.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPathParams {
    /// Unique identifier of the department.
    pub department_id: Uuid,
}

/// `Query` param opting into seeing soft-deleted records.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludeDeletedParams {
    /// When set, soft-deleted records are visible to the lookup.
    #[serde(default)]
    pub include_deleted: bool,
}
