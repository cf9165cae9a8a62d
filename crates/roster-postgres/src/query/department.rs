//! Department repository for managing department table operations.

use diesel::dsl::count_star;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use time::OffsetDateTime;
use uuid::Uuid;

use super::lower;
use crate::model::{Department, NewDepartment, UpdateDepartment};
use crate::types::{
    Actor, DepartmentFilter, DepartmentSortBy, DepartmentSortField, OffsetPage, Pagination,
    SortOrder,
};
use crate::{PgError, PgResult, schema};

/// Applies the conjunctive department filter criteria to a boxed query.
///
/// Shared between the count query and the windowed fetch so both always see
/// the same predicate set.
macro_rules! with_department_filters {
    ($query:expr, $filter:expr) => {{
        use schema::departments;

        let mut query = $query;

        if let Some(term) = $filter.term() {
            let pattern = format!("%{}%", term);
            query = query.filter(
                departments::name
                    .ilike(pattern.clone())
                    .or(departments::description.ilike(pattern)),
            );
        }
        if let Some(name) = $filter.name() {
            query = query.filter(departments::name.ilike(format!("%{}%", name)));
        }
        if let Some(description) = $filter.description() {
            query = query.filter(departments::description.ilike(format!("%{}%", description)));
        }
        if let Some(created_after) = $filter.created_after {
            query = query.filter(departments::created_at.ge(created_after));
        }
        if let Some(created_before) = $filter.created_before {
            query = query.filter(departments::created_at.le(created_before));
        }

        query
    }};
}

/// Repository for department table operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct DepartmentRepository;

impl DepartmentRepository {
    /// Creates a new department repository instance.
    pub fn new() -> Self {
        Self
    }

    /// Creates a new department in the database.
    pub async fn create_department(
        conn: &mut AsyncPgConnection,
        new_department: NewDepartment,
    ) -> PgResult<Department> {
        use schema::departments;

        diesel::insert_into(departments::table)
            .values(&new_department)
            .returning(Department::as_returning())
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Finds a department by ID.
    ///
    /// Soft-deleted departments are only visible when `include_deleted` is
    /// set.
    pub async fn find_department_by_id(
        conn: &mut AsyncPgConnection,
        department_id: Uuid,
        include_deleted: bool,
    ) -> PgResult<Option<Department>> {
        use schema::departments;

        let mut query = departments::table
            .filter(departments::id.eq(department_id))
            .select(Department::as_select())
            .into_boxed();

        if !include_deleted {
            query = query.filter(departments::is_deleted.eq(false));
        }

        query
            .first(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Searches active departments with filtering, sorting, and pagination.
    pub async fn search_departments(
        conn: &mut AsyncPgConnection,
        filter: &DepartmentFilter,
        sort: DepartmentSortBy,
        pagination: Pagination,
    ) -> PgResult<OffsetPage<Department>> {
        use schema::departments;

        let total: i64 = with_department_filters!(
            departments::table
                .filter(departments::is_deleted.eq(false))
                .select(count_star())
                .into_boxed(),
            filter
        )
        .first(conn)
        .await
        .map_err(PgError::from)?;

        let mut query = with_department_filters!(
            departments::table
                .filter(departments::is_deleted.eq(false))
                .select(Department::as_select())
                .into_boxed(),
            filter
        );

        query = match (sort.field, sort.order) {
            (DepartmentSortField::Name, SortOrder::Asc) => query.order(departments::name.asc()),
            (DepartmentSortField::Name, SortOrder::Desc) => query.order(departments::name.desc()),
            (DepartmentSortField::Description, SortOrder::Asc) => {
                query.order(departments::description.asc())
            }
            (DepartmentSortField::Description, SortOrder::Desc) => {
                query.order(departments::description.desc())
            }
            (DepartmentSortField::CreatedAt, SortOrder::Asc) => {
                query.order(departments::created_at.asc())
            }
            (DepartmentSortField::CreatedAt, SortOrder::Desc) => {
                query.order(departments::created_at.desc())
            }
        };

        let items = query
            // Stable tie-break keeps page windows deterministic.
            .then_order_by(departments::id.asc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load::<Department>(conn)
            .await
            .map_err(PgError::from)?;

        Ok(OffsetPage::new(items, total))
    }

    /// Lists soft-deleted departments, newest deletions first.
    pub async fn list_deleted_departments(
        conn: &mut AsyncPgConnection,
        pagination: Pagination,
    ) -> PgResult<OffsetPage<Department>> {
        use schema::departments;

        let total: i64 = departments::table
            .filter(departments::is_deleted.eq(true))
            .count()
            .get_result(conn)
            .await
            .map_err(PgError::from)?;

        let items = departments::table
            .filter(departments::is_deleted.eq(true))
            .order(departments::deleted_at.desc())
            .then_order_by(departments::id.asc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(Department::as_select())
            .load::<Department>(conn)
            .await
            .map_err(PgError::from)?;

        Ok(OffsetPage::new(items, total))
    }

    /// Returns whether an active department already uses this name.
    ///
    /// The comparison is case-insensitive and scoped to active rows only, so
    /// a soft-deleted department's name is free for reuse. `exclude` skips
    /// the record under update.
    pub async fn name_in_use(
        conn: &mut AsyncPgConnection,
        name: &str,
        exclude: Option<Uuid>,
    ) -> PgResult<bool> {
        use schema::departments;

        let mut query = departments::table
            .filter(departments::is_deleted.eq(false))
            .filter(lower(departments::name).eq(name.trim().to_lowercase()))
            .select(count_star())
            .into_boxed();

        if let Some(department_id) = exclude {
            query = query.filter(departments::id.ne(department_id));
        }

        let count: i64 = query.first(conn).await.map_err(PgError::from)?;
        Ok(count > 0)
    }

    /// Counts active employees assigned to the given department.
    ///
    /// Used to refuse deleting a department that still has active members.
    pub async fn count_active_employees(
        conn: &mut AsyncPgConnection,
        department_id: Uuid,
    ) -> PgResult<i64> {
        use schema::employees;

        employees::table
            .filter(employees::department_id.eq(department_id))
            .filter(employees::is_deleted.eq(false))
            .count()
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Updates an active department with a full-record change set.
    ///
    /// Sets the updated audit fields and bumps the revision. Returns `None`
    /// when the department is missing or soft-deleted.
    pub async fn update_department(
        conn: &mut AsyncPgConnection,
        department_id: Uuid,
        changes: UpdateDepartment,
        actor: &Actor,
    ) -> PgResult<Option<Department>> {
        use schema::departments;

        diesel::update(departments::table)
            .filter(departments::id.eq(department_id))
            .filter(departments::is_deleted.eq(false))
            .set((
                &changes,
                departments::updated_at.eq(Some(OffsetDateTime::now_utc())),
                departments::updated_by.eq(Some(actor.name().to_owned())),
                departments::revision.eq(departments::revision + 1),
            ))
            .returning(Department::as_returning())
            .get_result(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Soft deletes an active department.
    ///
    /// Sets the deletion markers and the updated audit fields. Returns
    /// `false` when the department is missing or already deleted. Callers
    /// check [`count_active_employees`] first inside the same transaction.
    ///
    /// [`count_active_employees`]: Self::count_active_employees
    pub async fn delete_department(
        conn: &mut AsyncPgConnection,
        department_id: Uuid,
        actor: &Actor,
    ) -> PgResult<bool> {
        use schema::departments;

        let now = OffsetDateTime::now_utc();
        let affected = diesel::update(departments::table)
            .filter(departments::id.eq(department_id))
            .filter(departments::is_deleted.eq(false))
            .set((
                departments::is_deleted.eq(true),
                departments::deleted_at.eq(Some(now)),
                departments::deleted_by.eq(Some(actor.name().to_owned())),
                departments::updated_at.eq(Some(now)),
                departments::updated_by.eq(Some(actor.name().to_owned())),
                departments::revision.eq(departments::revision + 1),
            ))
            .execute(conn)
            .await
            .map_err(PgError::from)?;

        Ok(affected > 0)
    }

    /// Restores a soft-deleted department.
    ///
    /// Clears the deletion markers and sets the updated audit fields.
    /// Returns `None` when the department is missing or not deleted.
    pub async fn restore_department(
        conn: &mut AsyncPgConnection,
        department_id: Uuid,
        actor: &Actor,
    ) -> PgResult<Option<Department>> {
        use schema::departments;

        diesel::update(departments::table)
            .filter(departments::id.eq(department_id))
            .filter(departments::is_deleted.eq(true))
            .set((
                departments::is_deleted.eq(false),
                departments::deleted_at.eq(None::<OffsetDateTime>),
                departments::deleted_by.eq(None::<String>),
                departments::updated_at.eq(Some(OffsetDateTime::now_utc())),
                departments::updated_by.eq(Some(actor.name().to_owned())),
                departments::revision.eq(departments::revision + 1),
            ))
            .returning(Department::as_returning())
            .get_result(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }
}
