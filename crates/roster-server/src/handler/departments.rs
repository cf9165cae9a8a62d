use axum::Router;
use axum::routing::{get, post};
use roster_postgres::query::DepartmentRepository;
use roster_postgres::scoped_futures::ScopedFutureExt;
use roster_postgres::types::{ConstraintViolation, OffsetPage, Pagination};
use validator::Validate;

use crate::extract::{ActorInfo, Json, Path, PgPool, Query, ValidateJson};
use crate::handler::request::{
    CreateDepartmentRequest, DepartmentPathParams, IncludeDeletedParams, PageParams,
    SearchDepartmentsRequest, UpdateDepartmentRequest,
};
use crate::handler::response::{ApiResponse, DepartmentResponse, PageData};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for department operations.
const TRACING_TARGET: &str = "roster_server::handler::departments";

/// Lists active departments with default ordering.
#[tracing::instrument(skip_all)]
async fn list_departments(
    PgPool(mut conn): PgPool,
    Query(params): Query<PageParams>,
) -> Result<ApiResponse<PageData<DepartmentResponse>>> {
    params.validate()?;

    let pagination = Pagination::from(params);
    let page = DepartmentRepository::search_departments(
        &mut conn,
        &Default::default(),
        Default::default(),
        pagination,
    )
    .await?;

    Ok(ApiResponse::ok(
        "Departments retrieved",
        page_data(page, pagination),
    ))
}

/// Searches active departments with filtering, sorting, and pagination.
#[tracing::instrument(skip_all)]
async fn search_departments(
    PgPool(mut conn): PgPool,
    Json(request): Json<SearchDepartmentsRequest>,
) -> Result<ApiResponse<PageData<DepartmentResponse>>> {
    request.page.validate()?;
    let filter = request.filter()?;

    let pagination = Pagination::from(request.page);
    let page =
        DepartmentRepository::search_departments(&mut conn, &filter, request.sort(), pagination)
            .await?;

    tracing::debug!(
        target: TRACING_TARGET,
        total = page.total,
        "department search executed",
    );

    Ok(ApiResponse::ok(
        "Departments retrieved",
        page_data(page, pagination),
    ))
}

/// Lists soft-deleted departments, newest deletions first.
#[tracing::instrument(skip_all)]
async fn list_deleted_departments(
    PgPool(mut conn): PgPool,
    Query(params): Query<PageParams>,
) -> Result<ApiResponse<PageData<DepartmentResponse>>> {
    params.validate()?;

    let pagination = Pagination::from(params);
    let page = DepartmentRepository::list_deleted_departments(&mut conn, pagination).await?;

    Ok(ApiResponse::ok(
        "Deleted departments retrieved",
        page_data(page, pagination),
    ))
}

/// Fetches a single department by identifier.
#[tracing::instrument(skip_all)]
async fn get_department(
    PgPool(mut conn): PgPool,
    Path(params): Path<DepartmentPathParams>,
    Query(visibility): Query<IncludeDeletedParams>,
) -> Result<ApiResponse<DepartmentResponse>> {
    let found = DepartmentRepository::find_department_by_id(
        &mut conn,
        params.department_id,
        visibility.include_deleted,
    )
    .await?;

    match found {
        Some(department) => Ok(ApiResponse::ok("Department retrieved", department.into())),
        None => Err(Error::new(ErrorKind::NotFound).with_resource("department")),
    }
}

/// Creates a new department.
#[tracing::instrument(skip_all)]
async fn create_department(
    PgPool(mut conn): PgPool,
    ActorInfo(actor): ActorInfo,
    ValidateJson(request): ValidateJson<CreateDepartmentRequest>,
) -> Result<ApiResponse<DepartmentResponse>> {
    tracing::info!(
        target: TRACING_TARGET,
        actor = %actor,
        name = %request.name,
        "creating new department",
    );

    let department = conn
        .transaction(|conn| {
            async move {
                if DepartmentRepository::name_in_use(conn, &request.name, None).await? {
                    return Err(Error::from(ConstraintViolation::DepartmentNameTaken));
                }

                let new_department = request.into_new_department(&actor);
                let department =
                    DepartmentRepository::create_department(conn, new_department).await?;

                Ok::<_, Error<'static>>(department)
            }
            .scope_boxed()
        })
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        department_id = %department.id,
        "new department created",
    );

    Ok(ApiResponse::created("Department created", department.into()))
}

/// Updates an active department with a full-record change set.
#[tracing::instrument(skip_all)]
async fn update_department(
    PgPool(mut conn): PgPool,
    ActorInfo(actor): ActorInfo,
    Path(params): Path<DepartmentPathParams>,
    ValidateJson(request): ValidateJson<UpdateDepartmentRequest>,
) -> Result<ApiResponse<DepartmentResponse>> {
    let department_id = params.department_id;
    let tx_actor = actor.clone();

    let department = conn
        .transaction(|conn| {
            async move {
                if DepartmentRepository::name_in_use(conn, &request.name, Some(department_id))
                    .await?
                {
                    return Err(Error::from(ConstraintViolation::DepartmentNameTaken));
                }

                DepartmentRepository::update_department(
                    conn,
                    department_id,
                    request.into(),
                    &tx_actor,
                )
                .await?
                .ok_or_else(|| Error::new(ErrorKind::NotFound).with_resource("department"))
            }
            .scope_boxed()
        })
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        department_id = %department.id,
        actor = %actor,
        "department updated",
    );

    Ok(ApiResponse::ok("Department updated", department.into()))
}

/// Soft deletes an active department.
///
/// Refused while at least one active employee still references the
/// department; the membership check and the delete run in a single
/// transaction so a racing assignment cannot slip between them.
#[tracing::instrument(skip_all)]
async fn delete_department(
    PgPool(mut conn): PgPool,
    ActorInfo(actor): ActorInfo,
    Path(params): Path<DepartmentPathParams>,
) -> Result<ApiResponse<()>> {
    let department_id = params.department_id;
    let tx_actor = actor.clone();

    conn.transaction(|conn| {
        async move {
            let members = DepartmentRepository::count_active_employees(conn, department_id)
                .await?;
            if members > 0 {
                return Err(ErrorKind::Conflict.with_message(format!(
                    "Department has {members} active employee(s) and cannot be deleted"
                )));
            }

            let deleted =
                DepartmentRepository::delete_department(conn, department_id, &tx_actor).await?;
            if !deleted {
                return Err(Error::new(ErrorKind::NotFound).with_resource("department"));
            }

            Ok::<_, Error<'static>>(())
        }
        .scope_boxed()
    })
    .await?;

    tracing::info!(
        target: TRACING_TARGET,
        department_id = %department_id,
        actor = %actor,
        "department soft-deleted",
    );

    Ok(ApiResponse::ok("Department deleted", ()))
}

/// Restores a soft-deleted department.
#[tracing::instrument(skip_all)]
async fn restore_department(
    PgPool(mut conn): PgPool,
    ActorInfo(actor): ActorInfo,
    Path(params): Path<DepartmentPathParams>,
) -> Result<ApiResponse<DepartmentResponse>> {
    let restored =
        DepartmentRepository::restore_department(&mut conn, params.department_id, &actor).await?;

    match restored {
        Some(department) => {
            tracing::info!(
                target: TRACING_TARGET,
                department_id = %department.id,
                actor = %actor,
                "department restored",
            );
            Ok(ApiResponse::ok("Department restored", department.into()))
        }
        None => Err(ErrorKind::NotFound
            .with_message("No deleted department with this identifier was found")),
    }
}

/// Builds paginated response data from a repository page.
fn page_data<T: Into<DepartmentResponse>>(
    page: OffsetPage<T>,
    pagination: Pagination,
) -> PageData<DepartmentResponse> {
    let page = page.map(Into::into);
    PageData::new(
        page.items,
        page.total,
        pagination.page_number(),
        pagination.page_size(),
    )
}

/// Returns the department router.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route(
            "/departments",
            get(list_departments).post(create_department),
        )
        .route("/departments/search", post(search_departments))
        .route("/departments/deleted", get(list_deleted_departments))
        .route(
            "/departments/{departmentId}",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
        .route(
            "/departments/{departmentId}/restore",
            post(restore_department),
        )
}
