//! Employee repository for managing employee table operations.

use diesel::dsl::count_star;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use time::OffsetDateTime;
use uuid::Uuid;

use super::lower;
use crate::model::{Department, Employee, NewEmployee, UpdateEmployee};
use crate::types::{
    Actor, EmployeeFilter, EmployeeSortBy, EmployeeSortField, OffsetPage, Pagination, SortOrder,
};
use crate::{PgError, PgResult, schema};

/// Applies the conjunctive employee filter criteria to a boxed query.
///
/// Shared between the count query and the windowed fetch so both always see
/// the same predicate set. Text criteria match as case-insensitive
/// substrings; range bounds are inclusive. A range with `from > to` matches
/// nothing by construction.
macro_rules! with_employee_filters {
    ($query:expr, $filter:expr) => {{
        use schema::employees;

        let mut query = $query;

        if let Some(term) = $filter.term() {
            let pattern = format!("%{}%", term);
            query = query.filter(
                employees::full_name
                    .ilike(pattern.clone())
                    .or(employees::email.ilike(pattern)),
            );
        }
        if let Some(full_name) = $filter.full_name() {
            query = query.filter(employees::full_name.ilike(format!("%{}%", full_name)));
        }
        if let Some(email) = $filter.email() {
            query = query.filter(employees::email.ilike(format!("%{}%", email)));
        }
        if let Some(department_id) = $filter.department_id {
            query = query.filter(employees::department_id.eq(department_id));
        }
        if let Some(born_after) = $filter.born_after {
            query = query.filter(employees::date_of_birth.ge(born_after));
        }
        if let Some(born_before) = $filter.born_before {
            query = query.filter(employees::date_of_birth.le(born_before));
        }
        if let Some(created_after) = $filter.created_after {
            query = query.filter(employees::created_at.ge(created_after));
        }
        if let Some(created_before) = $filter.created_before {
            query = query.filter(employees::created_at.le(created_before));
        }

        query
    }};
}

/// Repository for employee table operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmployeeRepository;

impl EmployeeRepository {
    /// Creates a new employee repository instance.
    pub fn new() -> Self {
        Self
    }

    /// Creates a new employee in the database.
    pub async fn create_employee(
        conn: &mut AsyncPgConnection,
        new_employee: NewEmployee,
    ) -> PgResult<Employee> {
        use schema::employees;

        diesel::insert_into(employees::table)
            .values(&new_employee)
            .returning(Employee::as_returning())
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Finds an employee by ID together with its department.
    ///
    /// Soft-deleted employees are only visible when `include_deleted` is set.
    pub async fn find_employee_by_id(
        conn: &mut AsyncPgConnection,
        employee_id: Uuid,
        include_deleted: bool,
    ) -> PgResult<Option<(Employee, Department)>> {
        use schema::{departments, employees};

        let mut query = employees::table
            .inner_join(departments::table)
            .filter(employees::id.eq(employee_id))
            .select((Employee::as_select(), Department::as_select()))
            .into_boxed();

        if !include_deleted {
            query = query.filter(employees::is_deleted.eq(false));
        }

        query
            .first(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Searches active employees with filtering, sorting, and pagination.
    ///
    /// Executes one count query and one windowed fetch over the same filter
    /// and returns both in an [`OffsetPage`]. The two reads share a
    /// connection and the store's default isolation level; no stronger
    /// cross-query snapshot is guaranteed.
    pub async fn search_employees(
        conn: &mut AsyncPgConnection,
        filter: &EmployeeFilter,
        sort: EmployeeSortBy,
        pagination: Pagination,
    ) -> PgResult<OffsetPage<(Employee, Department)>> {
        use schema::{departments, employees};

        let total: i64 = with_employee_filters!(
            employees::table
                .inner_join(departments::table)
                .filter(employees::is_deleted.eq(false))
                .select(count_star())
                .into_boxed(),
            filter
        )
        .first(conn)
        .await
        .map_err(PgError::from)?;

        let mut query = with_employee_filters!(
            employees::table
                .inner_join(departments::table)
                .filter(employees::is_deleted.eq(false))
                .select((Employee::as_select(), Department::as_select()))
                .into_boxed(),
            filter
        );

        // Fixed mapping from enumerated sort keys to typed order expressions.
        query = match (sort.field, sort.order) {
            (EmployeeSortField::FullName, SortOrder::Asc) => {
                query.order(employees::full_name.asc())
            }
            (EmployeeSortField::FullName, SortOrder::Desc) => {
                query.order(employees::full_name.desc())
            }
            (EmployeeSortField::Email, SortOrder::Asc) => query.order(employees::email.asc()),
            (EmployeeSortField::Email, SortOrder::Desc) => query.order(employees::email.desc()),
            (EmployeeSortField::CreatedAt, SortOrder::Asc) => {
                query.order(employees::created_at.asc())
            }
            (EmployeeSortField::CreatedAt, SortOrder::Desc) => {
                query.order(employees::created_at.desc())
            }
            (EmployeeSortField::DateOfBirth, SortOrder::Asc) => {
                query.order(employees::date_of_birth.asc())
            }
            (EmployeeSortField::DateOfBirth, SortOrder::Desc) => {
                query.order(employees::date_of_birth.desc())
            }
            (EmployeeSortField::DepartmentName, SortOrder::Asc) => {
                query.order(departments::name.asc())
            }
            (EmployeeSortField::DepartmentName, SortOrder::Desc) => {
                query.order(departments::name.desc())
            }
        };

        let items = query
            // Stable tie-break keeps page windows deterministic.
            .then_order_by(employees::id.asc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load::<(Employee, Department)>(conn)
            .await
            .map_err(PgError::from)?;

        Ok(OffsetPage::new(items, total))
    }

    /// Lists soft-deleted employees, newest deletions first.
    ///
    /// This is the explicit opt-in view over the deleted partition; default
    /// listings never include these rows.
    pub async fn list_deleted_employees(
        conn: &mut AsyncPgConnection,
        pagination: Pagination,
    ) -> PgResult<OffsetPage<(Employee, Department)>> {
        use schema::{departments, employees};

        let total: i64 = employees::table
            .filter(employees::is_deleted.eq(true))
            .count()
            .get_result(conn)
            .await
            .map_err(PgError::from)?;

        let items = employees::table
            .inner_join(departments::table)
            .filter(employees::is_deleted.eq(true))
            .order(employees::deleted_at.desc())
            .then_order_by(employees::id.asc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select((Employee::as_select(), Department::as_select()))
            .load::<(Employee, Department)>(conn)
            .await
            .map_err(PgError::from)?;

        Ok(OffsetPage::new(items, total))
    }

    /// Returns whether an active employee already uses this email address.
    ///
    /// The comparison is case-insensitive and scoped to active rows only, so
    /// a soft-deleted employee's email is free for reuse. `exclude` skips
    /// the record under update so a no-op update of its own email passes.
    pub async fn email_in_use(
        conn: &mut AsyncPgConnection,
        email: &str,
        exclude: Option<Uuid>,
    ) -> PgResult<bool> {
        use schema::employees;

        let mut query = employees::table
            .filter(employees::is_deleted.eq(false))
            .filter(lower(employees::email).eq(email.trim().to_lowercase()))
            .select(count_star())
            .into_boxed();

        if let Some(employee_id) = exclude {
            query = query.filter(employees::id.ne(employee_id));
        }

        let count: i64 = query.first(conn).await.map_err(PgError::from)?;
        Ok(count > 0)
    }

    /// Updates an active employee with a full-record change set.
    ///
    /// Sets the updated audit fields and bumps the revision. Returns `None`
    /// when the employee is missing or soft-deleted.
    pub async fn update_employee(
        conn: &mut AsyncPgConnection,
        employee_id: Uuid,
        changes: UpdateEmployee,
        actor: &Actor,
    ) -> PgResult<Option<Employee>> {
        use schema::employees;

        diesel::update(employees::table)
            .filter(employees::id.eq(employee_id))
            .filter(employees::is_deleted.eq(false))
            .set((
                &changes,
                employees::updated_at.eq(Some(OffsetDateTime::now_utc())),
                employees::updated_by.eq(Some(actor.name().to_owned())),
                employees::revision.eq(employees::revision + 1),
            ))
            .returning(Employee::as_returning())
            .get_result(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Soft deletes an active employee.
    ///
    /// Sets the deletion markers and the updated audit fields. Returns
    /// `false` when the employee is missing or already deleted.
    pub async fn delete_employee(
        conn: &mut AsyncPgConnection,
        employee_id: Uuid,
        actor: &Actor,
    ) -> PgResult<bool> {
        use schema::employees;

        let now = OffsetDateTime::now_utc();
        let affected = diesel::update(employees::table)
            .filter(employees::id.eq(employee_id))
            .filter(employees::is_deleted.eq(false))
            .set((
                employees::is_deleted.eq(true),
                employees::deleted_at.eq(Some(now)),
                employees::deleted_by.eq(Some(actor.name().to_owned())),
                employees::updated_at.eq(Some(now)),
                employees::updated_by.eq(Some(actor.name().to_owned())),
                employees::revision.eq(employees::revision + 1),
            ))
            .execute(conn)
            .await
            .map_err(PgError::from)?;

        Ok(affected > 0)
    }

    /// Restores a soft-deleted employee.
    ///
    /// Clears the deletion markers and sets the updated audit fields.
    /// Returns `None` when the employee is missing or not deleted; restoring
    /// an active record is a reported failure, never a silent no-op.
    pub async fn restore_employee(
        conn: &mut AsyncPgConnection,
        employee_id: Uuid,
        actor: &Actor,
    ) -> PgResult<Option<Employee>> {
        use schema::employees;

        diesel::update(employees::table)
            .filter(employees::id.eq(employee_id))
            .filter(employees::is_deleted.eq(true))
            .set((
                employees::is_deleted.eq(false),
                employees::deleted_at.eq(None::<OffsetDateTime>),
                employees::deleted_by.eq(None::<String>),
                employees::updated_at.eq(Some(OffsetDateTime::now_utc())),
                employees::updated_by.eq(Some(actor.name().to_owned())),
                employees::revision.eq(employees::revision + 1),
            ))
            .returning(Employee::as_returning())
            .get_result(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }
}
