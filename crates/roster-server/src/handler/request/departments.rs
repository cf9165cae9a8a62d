use roster_postgres::model::{NewDepartment, UpdateDepartment};
use roster_postgres::types::{
    Actor, DepartmentFilter, DepartmentSortBy, DepartmentSortField, SortOrder,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::Validate;

use super::{MISSING_SEARCH_CRITERIA, PageParams};
use crate::handler::{ErrorKind, Result};

/// Request payload for creating a new department.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentRequest {
    /// Department name, unique among active departments.
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    /// Optional description.
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

impl CreateDepartmentRequest {
    /// Converts the request into an insertable record for the given actor.
    pub fn into_new_department(self, actor: &Actor) -> NewDepartment {
        NewDepartment {
            name: self.name.trim().to_owned(),
            description: normalize_description(self.description),
            created_by: actor.name().to_owned(),
        }
    }
}

/// Request payload for a full-record department update.
///
/// Omitting the description clears it.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartmentRequest {
    /// Department name, unique among active departments.
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    /// Optional description; omitting it clears the stored value.
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

impl From<UpdateDepartmentRequest> for UpdateDepartment {
    fn from(request: UpdateDepartmentRequest) -> Self {
        Self {
            name: request.name.trim().to_owned(),
            description: normalize_description(request.description),
        }
    }
}

/// Request payload for searching departments.
///
/// All filter criteria are optional and conjunctive. Unknown `sortBy`
/// and `sortOrder` values fall back to the defaults (name, ascending).
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDepartmentsRequest {
    /// Free-text term matched against name and description.
    pub term: Option<String>,
    /// Filter by name (substring).
    pub name: Option<String>,
    /// Filter by description (substring).
    pub description: Option<String>,
    /// Inclusive lower bound on creation timestamp.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub created_after: Option<OffsetDateTime>,
    /// Inclusive upper bound on creation timestamp.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub created_before: Option<OffsetDateTime>,
    /// Sort key, one of the enumerated department sort fields.
    pub sort_by: Option<String>,
    /// Sort direction, `asc` or `desc`.
    pub sort_order: Option<String>,
    /// Page window.
    #[serde(flatten)]
    pub page: PageParams,
}

impl SearchDepartmentsRequest {
    /// Returns the filter portion of the request.
    ///
    /// At least one criterion must be non-empty; a criteria-less search is
    /// rejected rather than silently listing everything.
    pub fn filter(&self) -> Result<DepartmentFilter> {
        let filter = DepartmentFilter {
            term: self.term.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            created_after: self.created_after,
            created_before: self.created_before,
        };

        if filter.is_empty() {
            return Err(ErrorKind::BadRequest.with_message(MISSING_SEARCH_CRITERIA));
        }

        Ok(filter)
    }

    /// Returns the sort specification of the request.
    pub fn sort(&self) -> DepartmentSortBy {
        DepartmentSortBy::new(
            DepartmentSortField::parse_or_default(self.sort_by.as_deref()),
            SortOrder::parse_or_default(self.sort_order.as_deref()),
        )
    }
}

/// Trims a description and drops it entirely when blank.
fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_validation() {
        let request = CreateDepartmentRequest {
            name: "E".to_owned(),
            description: None,
        };
        assert!(request.validate().is_err());

        let request = CreateDepartmentRequest {
            name: "Engineering".to_owned(),
            description: Some("Builds things".to_owned()),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn blank_description_is_dropped() {
        let actor = Actor::anonymous();
        let request = CreateDepartmentRequest {
            name: " Engineering ".to_owned(),
            description: Some("   ".to_owned()),
        };

        let new_department = request.into_new_department(&actor);
        assert_eq!(new_department.name, "Engineering");
        assert_eq!(new_department.description, None);
        assert_eq!(new_department.created_by, Actor::ANONYMOUS);
    }

    #[test]
    fn update_without_description_clears_it() {
        let request = UpdateDepartmentRequest {
            name: "Engineering".to_owned(),
            description: None,
        };

        let changes = UpdateDepartment::from(request);
        assert_eq!(changes.description, None);
    }

    #[test]
    fn search_request_sort_fallback() {
        let request = SearchDepartmentsRequest {
            sort_by: Some("budget".to_owned()),
            ..Default::default()
        };

        assert_eq!(request.sort().field, DepartmentSortField::Name);
        assert_eq!(request.sort().order, SortOrder::Asc);
    }

    #[test]
    fn search_without_criteria_is_rejected() {
        assert!(SearchDepartmentsRequest::default().filter().is_err());

        let request = SearchDepartmentsRequest {
            name: Some("Engineering".to_owned()),
            ..Default::default()
        };
        assert!(request.filter().is_ok());
    }
}
