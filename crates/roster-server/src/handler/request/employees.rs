use roster_postgres::model::{NewEmployee, UpdateEmployee};
use roster_postgres::types::{
    Actor, EmployeeFilter, EmployeeSortBy, EmployeeSortField, SortOrder,
};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;
use validator::Validate;

use super::{MISSING_SEARCH_CRITERIA, PageParams};
use crate::handler::{ErrorKind, Result};

/// Request payload for creating a new employee.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    /// Full name of the employee.
    #[validate(length(min = 2, max = 100))]
    pub full_name: String,
    /// Email address, unique among active employees.
    #[validate(email)]
    pub email: String,
    /// Date of birth.
    pub date_of_birth: Date,
    /// Department the employee belongs to.
    pub department_id: Uuid,
}

impl CreateEmployeeRequest {
    /// Converts the request into an insertable record for the given actor.
    pub fn into_new_employee(self, actor: &Actor) -> NewEmployee {
        NewEmployee {
            full_name: self.full_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            date_of_birth: self.date_of_birth,
            department_id: self.department_id,
            created_by: actor.name().to_owned(),
        }
    }
}

/// Request payload for a full-record employee update.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    /// Full name of the employee.
    #[validate(length(min = 2, max = 100))]
    pub full_name: String,
    /// Email address, unique among active employees.
    #[validate(email)]
    pub email: String,
    /// Date of birth.
    pub date_of_birth: Date,
    /// Department the employee belongs to.
    pub department_id: Uuid,
}

impl From<UpdateEmployeeRequest> for UpdateEmployee {
    fn from(request: UpdateEmployeeRequest) -> Self {
        Self {
            full_name: request.full_name.trim().to_owned(),
            email: request.email.trim().to_owned(),
            date_of_birth: request.date_of_birth,
            department_id: request.department_id,
        }
    }
}

/// Request payload for searching employees.
///
/// All filter criteria are optional and conjunctive. Unknown `sortBy`
/// and `sortOrder` values fall back to the defaults (full name,
/// ascending) instead of failing the request.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEmployeesRequest {
    /// Free-text term matched against name and email.
    pub term: Option<String>,
    /// Filter by full name (substring).
    pub full_name: Option<String>,
    /// Filter by email address (substring).
    pub email: Option<String>,
    /// Filter by department.
    pub department_id: Option<Uuid>,
    /// Inclusive lower bound on date of birth.
    pub born_after: Option<Date>,
    /// Inclusive upper bound on date of birth.
    pub born_before: Option<Date>,
    /// Inclusive lower bound on creation timestamp.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub created_after: Option<OffsetDateTime>,
    /// Inclusive upper bound on creation timestamp.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub created_before: Option<OffsetDateTime>,
    /// Sort key, one of the enumerated employee sort fields.
    pub sort_by: Option<String>,
    /// Sort direction, `asc` or `desc`.
    pub sort_order: Option<String>,
    /// Page window.
    #[serde(flatten)]
    pub page: PageParams,
}

impl SearchEmployeesRequest {
    /// Returns the filter portion of the request.
    ///
    /// At least one criterion must be non-empty; a criteria-less search is
    /// rejected rather than silently listing everything.
    pub fn filter(&self) -> Result<EmployeeFilter> {
        let filter = EmployeeFilter {
            term: self.term.clone(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            department_id: self.department_id,
            born_after: self.born_after,
            born_before: self.born_before,
            created_after: self.created_after,
            created_before: self.created_before,
        };

        if filter.is_empty() {
            return Err(ErrorKind::BadRequest.with_message(MISSING_SEARCH_CRITERIA));
        }

        Ok(filter)
    }

    /// Returns the sort specification of the request.
    pub fn sort(&self) -> EmployeeSortBy {
        EmployeeSortBy::new(
            EmployeeSortField::parse_or_default(self.sort_by.as_deref()),
            SortOrder::parse_or_default(self.sort_order.as_deref()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_validation() {
        let request = CreateEmployeeRequest {
            full_name: "A".to_owned(),
            email: "not-an-email".to_owned(),
            date_of_birth: time::macros::date!(1990 - 01 - 01),
            department_id: Uuid::new_v4(),
        };
        assert!(request.validate().is_err());

        let request = CreateEmployeeRequest {
            full_name: "Ann Lee".to_owned(),
            email: "ann@example.com".to_owned(),
            date_of_birth: time::macros::date!(1990 - 01 - 01),
            department_id: Uuid::new_v4(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn create_request_trims_fields() {
        let actor = Actor::new("hr-admin");
        let request = CreateEmployeeRequest {
            full_name: "  Ann Lee ".to_owned(),
            email: " ann@example.com ".to_owned(),
            date_of_birth: time::macros::date!(1990 - 01 - 01),
            department_id: Uuid::new_v4(),
        };

        let new_employee = request.into_new_employee(&actor);
        assert_eq!(new_employee.full_name, "Ann Lee");
        assert_eq!(new_employee.email, "ann@example.com");
        assert_eq!(new_employee.created_by, "hr-admin");
    }

    #[test]
    fn search_request_sort_fallback() {
        let request = SearchEmployeesRequest {
            sort_by: Some("bogus".to_owned()),
            sort_order: Some("sideways".to_owned()),
            ..Default::default()
        };

        let sort = request.sort();
        assert_eq!(sort.field, EmployeeSortField::FullName);
        assert_eq!(sort.order, SortOrder::Asc);
    }

    #[test]
    fn search_request_deserializes_camel_case() {
        let request: SearchEmployeesRequest = serde_json::from_str(
            r#"{"term":"ann","sortBy":"email","sortOrder":"desc","pageNumber":2,"pageSize":25}"#,
        )
        .unwrap();

        let filter = request.filter().unwrap();
        assert_eq!(filter.term(), Some("ann"));
        assert_eq!(request.sort().field, EmployeeSortField::Email);
        assert_eq!(request.sort().order, SortOrder::Desc);
        assert_eq!(request.page.page_number(), 2);
        assert_eq!(request.page.page_size(), 25);
    }

    #[test]
    fn search_without_criteria_is_rejected() {
        assert!(SearchEmployeesRequest::default().filter().is_err());

        // Blank-only criteria normalize away and count as absent.
        let request = SearchEmployeesRequest {
            term: Some("   ".to_owned()),
            ..Default::default()
        };
        assert!(request.filter().is_err());

        let request = SearchEmployeesRequest {
            term: Some("ann".to_owned()),
            ..Default::default()
        };
        assert!(request.filter().is_ok());
    }
}
