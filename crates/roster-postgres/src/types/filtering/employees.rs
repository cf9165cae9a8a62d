//! Filtering options for employee queries.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use super::normalize;

/// Filter options for employee queries.
///
/// All criteria are conjunctive. The free-text `term` matches the full name
/// and the email address as a case-insensitive substring.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct EmployeeFilter {
    /// Free-text term matched against name and email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// Filter by full name (substring).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Filter by email address (substring).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Filter by referenced department.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<Uuid>,
    /// Inclusive lower bound on date of birth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub born_after: Option<Date>,
    /// Inclusive upper bound on date of birth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub born_before: Option<Date>,
    /// Inclusive lower bound on creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_after: Option<OffsetDateTime>,
    /// Inclusive upper bound on creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_before: Option<OffsetDateTime>,
}

impl EmployeeFilter {
    /// Creates a new empty filter.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by a free-text term.
    #[inline]
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    /// Filters by full name.
    #[inline]
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Filters by email address.
    #[inline]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Filters by department.
    #[inline]
    pub fn with_department_id(mut self, department_id: Uuid) -> Self {
        self.department_id = Some(department_id);
        self
    }

    /// Returns the normalized free-text term, if any.
    pub fn term(&self) -> Option<&str> {
        normalize(self.term.as_deref())
    }

    /// Returns the normalized name criterion, if any.
    pub fn full_name(&self) -> Option<&str> {
        normalize(self.full_name.as_deref())
    }

    /// Returns the normalized email criterion, if any.
    pub fn email(&self) -> Option<&str> {
        normalize(self.email.as_deref())
    }

    /// Returns whether no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.term().is_none()
            && self.full_name().is_none()
            && self.email().is_none()
            && self.department_id.is_none()
            && self.born_after.is_none()
            && self.born_before.is_none()
            && self.created_after.is_none()
            && self.created_before.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter() {
        assert!(EmployeeFilter::new().is_empty());
        assert!(EmployeeFilter::new().with_term("   ").is_empty());
    }

    #[test]
    fn single_criterion_is_not_empty() {
        assert!(!EmployeeFilter::new().with_term("ann").is_empty());
        assert!(!EmployeeFilter::new().with_department_id(Uuid::new_v4()).is_empty());
    }

    #[test]
    fn criteria_are_trimmed() {
        let filter = EmployeeFilter::new().with_full_name("  Ann ");
        assert_eq!(filter.full_name(), Some("Ann"));
    }
}
