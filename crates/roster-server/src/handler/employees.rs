use axum::Router;
use axum::routing::{get, post};
use roster_postgres::model::{Department, Employee};
use roster_postgres::query::{DepartmentRepository, EmployeeRepository};
use roster_postgres::scoped_futures::ScopedFutureExt;
use roster_postgres::types::{ConstraintViolation, OffsetPage, Pagination};
use validator::Validate;

use crate::extract::{ActorInfo, Json, Path, PgPool, Query, ValidateJson};
use crate::handler::request::{
    CreateEmployeeRequest, EmployeePathParams, IncludeDeletedParams, PageParams,
    SearchEmployeesRequest, UpdateEmployeeRequest,
};
use crate::handler::response::{ApiResponse, EmployeeResponse, PageData};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for employee operations.
const TRACING_TARGET: &str = "roster_server::handler::employees";

/// Lists active employees with default ordering.
#[tracing::instrument(skip_all)]
async fn list_employees(
    PgPool(mut conn): PgPool,
    Query(params): Query<PageParams>,
) -> Result<ApiResponse<PageData<EmployeeResponse>>> {
    params.validate()?;

    let pagination = Pagination::from(params);
    let page = EmployeeRepository::search_employees(
        &mut conn,
        &Default::default(),
        Default::default(),
        pagination,
    )
    .await?;

    Ok(ApiResponse::ok("Employees retrieved", page_data(page, pagination)))
}

/// Searches active employees with filtering, sorting, and pagination.
#[tracing::instrument(skip_all)]
async fn search_employees(
    PgPool(mut conn): PgPool,
    Json(request): Json<SearchEmployeesRequest>,
) -> Result<ApiResponse<PageData<EmployeeResponse>>> {
    request.page.validate()?;
    let filter = request.filter()?;

    let pagination = Pagination::from(request.page);
    let page =
        EmployeeRepository::search_employees(&mut conn, &filter, request.sort(), pagination)
            .await?;

    tracing::debug!(
        target: TRACING_TARGET,
        total = page.total,
        "employee search executed",
    );

    Ok(ApiResponse::ok("Employees retrieved", page_data(page, pagination)))
}

/// Lists soft-deleted employees, newest deletions first.
#[tracing::instrument(skip_all)]
async fn list_deleted_employees(
    PgPool(mut conn): PgPool,
    Query(params): Query<PageParams>,
) -> Result<ApiResponse<PageData<EmployeeResponse>>> {
    params.validate()?;

    let pagination = Pagination::from(params);
    let page = EmployeeRepository::list_deleted_employees(&mut conn, pagination).await?;

    Ok(ApiResponse::ok(
        "Deleted employees retrieved",
        page_data(page, pagination),
    ))
}

/// Fetches a single employee by identifier.
#[tracing::instrument(skip_all)]
async fn get_employee(
    PgPool(mut conn): PgPool,
    Path(params): Path<EmployeePathParams>,
    Query(visibility): Query<IncludeDeletedParams>,
) -> Result<ApiResponse<EmployeeResponse>> {
    let found = EmployeeRepository::find_employee_by_id(
        &mut conn,
        params.employee_id,
        visibility.include_deleted,
    )
    .await?;

    match found {
        Some(record) => Ok(ApiResponse::ok("Employee retrieved", record.into())),
        None => Err(Error::new(ErrorKind::NotFound).with_resource("employee")),
    }
}

/// Creates a new employee.
#[tracing::instrument(skip_all)]
async fn create_employee(
    PgPool(mut conn): PgPool,
    ActorInfo(actor): ActorInfo,
    ValidateJson(request): ValidateJson<CreateEmployeeRequest>,
) -> Result<ApiResponse<EmployeeResponse>> {
    tracing::info!(
        target: TRACING_TARGET,
        actor = %actor,
        email = %request.email,
        "creating new employee",
    );

    let (employee, department) = conn
        .transaction(|conn| {
            async move {
                if EmployeeRepository::email_in_use(conn, &request.email, None).await? {
                    return Err(Error::from(ConstraintViolation::EmployeeEmailTaken));
                }

                let department = DepartmentRepository::find_department_by_id(
                    conn,
                    request.department_id,
                    false,
                )
                .await?
                .ok_or_else(|| {
                    ErrorKind::BadRequest
                        .with_message(ConstraintViolation::DepartmentMissing.message())
                })?;

                let employee =
                    EmployeeRepository::create_employee(conn, request.into_new_employee(&actor))
                        .await?;

                Ok::<_, Error<'static>>((employee, department))
            }
            .scope_boxed()
        })
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        employee_id = %employee.id,
        "new employee created",
    );

    Ok(ApiResponse::created(
        "Employee created",
        EmployeeResponse::with_department(employee, &department),
    ))
}

/// Updates an active employee with a full-record change set.
#[tracing::instrument(skip_all)]
async fn update_employee(
    PgPool(mut conn): PgPool,
    ActorInfo(actor): ActorInfo,
    Path(params): Path<EmployeePathParams>,
    ValidateJson(request): ValidateJson<UpdateEmployeeRequest>,
) -> Result<ApiResponse<EmployeeResponse>> {
    let employee_id = params.employee_id;
    let tx_actor = actor.clone();

    let employee = conn
        .transaction(|conn| {
            async move {
                if EmployeeRepository::email_in_use(conn, &request.email, Some(employee_id))
                    .await?
                {
                    return Err(Error::from(ConstraintViolation::EmployeeEmailTaken));
                }

                if DepartmentRepository::find_department_by_id(
                    conn,
                    request.department_id,
                    false,
                )
                .await?
                .is_none()
                {
                    return Err(ErrorKind::BadRequest
                        .with_message(ConstraintViolation::DepartmentMissing.message()));
                }

                EmployeeRepository::update_employee(conn, employee_id, request.into(), &tx_actor)
                    .await?
                    .ok_or_else(|| Error::new(ErrorKind::NotFound).with_resource("employee"))
            }
            .scope_boxed()
        })
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        employee_id = %employee.id,
        actor = %actor,
        "employee updated",
    );

    Ok(ApiResponse::ok("Employee updated", employee.into()))
}

/// Soft deletes an active employee.
#[tracing::instrument(skip_all)]
async fn delete_employee(
    PgPool(mut conn): PgPool,
    ActorInfo(actor): ActorInfo,
    Path(params): Path<EmployeePathParams>,
) -> Result<ApiResponse<()>> {
    let deleted = EmployeeRepository::delete_employee(&mut conn, params.employee_id, &actor)
        .await?;

    if !deleted {
        return Err(Error::new(ErrorKind::NotFound).with_resource("employee"));
    }

    tracing::info!(
        target: TRACING_TARGET,
        employee_id = %params.employee_id,
        actor = %actor,
        "employee soft-deleted",
    );

    Ok(ApiResponse::ok("Employee deleted", ()))
}

/// Restores a soft-deleted employee.
///
/// The referenced department must still be active; a restore into a
/// soft-deleted department would leave an active employee pointing at
/// it, so the department check and the restore run in one transaction.
#[tracing::instrument(skip_all)]
async fn restore_employee(
    PgPool(mut conn): PgPool,
    ActorInfo(actor): ActorInfo,
    Path(params): Path<EmployeePathParams>,
) -> Result<ApiResponse<EmployeeResponse>> {
    let employee_id = params.employee_id;
    let tx_actor = actor.clone();

    let (employee, department) = conn
        .transaction(|conn| {
            async move {
                let Some((employee, department)) =
                    EmployeeRepository::find_employee_by_id(conn, employee_id, true).await?
                else {
                    return Err(missing_deleted_employee());
                };
                ensure_restorable(&employee, &department)?;

                let restored = EmployeeRepository::restore_employee(conn, employee_id, &tx_actor)
                    .await?
                    .ok_or_else(missing_deleted_employee)?;

                Ok::<_, Error<'static>>((restored, department))
            }
            .scope_boxed()
        })
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        employee_id = %employee.id,
        actor = %actor,
        "employee restored",
    );

    Ok(ApiResponse::ok(
        "Employee restored",
        EmployeeResponse::with_department(employee, &department),
    ))
}

/// Checks that restoring the employee keeps its department reference sound.
fn ensure_restorable(employee: &Employee, department: &Department) -> Result<()> {
    if employee.is_active() {
        return Err(missing_deleted_employee());
    }

    if department.is_deleted {
        return Err(ErrorKind::Conflict.with_message(
            "Employee's department is deleted; restore the department first",
        ));
    }

    Ok(())
}

fn missing_deleted_employee() -> Error<'static> {
    ErrorKind::NotFound.with_message("No deleted employee with this identifier was found")
}

/// Builds paginated response data from a repository page.
fn page_data<T: Into<EmployeeResponse>>(
    page: OffsetPage<T>,
    pagination: Pagination,
) -> PageData<EmployeeResponse> {
    let page = page.map(Into::into);
    PageData::new(
        page.items,
        page.total,
        pagination.page_number(),
        pagination.page_size(),
    )
}

/// Returns the employee router.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/search", post(search_employees))
        .route("/employees/deleted", get(list_deleted_employees))
        .route(
            "/employees/{employeeId}",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
        .route("/employees/{employeeId}/restore", post(restore_employee))
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};
    use uuid::Uuid;

    use super::*;

    fn deleted_employee(department_id: Uuid) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            full_name: "Ann Lee".to_owned(),
            email: "ann@example.com".to_owned(),
            date_of_birth: date!(1990 - 01 - 01),
            department_id,
            is_deleted: true,
            created_at: datetime!(2025-01-01 00:00 UTC),
            created_by: "hr-admin".to_owned(),
            updated_at: Some(datetime!(2025-02-01 00:00 UTC)),
            updated_by: Some("hr-admin".to_owned()),
            deleted_at: Some(datetime!(2025-02-01 00:00 UTC)),
            deleted_by: Some("hr-admin".to_owned()),
            revision: 2,
        }
    }

    fn department(is_deleted: bool) -> Department {
        Department {
            id: Uuid::new_v4(),
            name: "Engineering".to_owned(),
            description: None,
            is_deleted,
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
    fn restore_into_active_department_is_allowed() {
        let department = department(false);
        let employee = deleted_employee(department.id);

        assert!(ensure_restorable(&employee, &department).is_ok());
    }

    #[test]
    fn restore_into_deleted_department_is_a_conflict() {
        let department = department(true);
        let employee = deleted_employee(department.id);

        let error = ensure_restorable(&employee, &department).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn restoring_an_active_employee_is_not_found() {
        let department = department(false);
        let mut employee = deleted_employee(department.id);
        employee.is_deleted = false;

        let error = ensure_restorable(&employee, &department).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }
}
