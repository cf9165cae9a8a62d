//! Filtering options for department queries.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::normalize;

/// Filter options for department queries.
///
/// All criteria are conjunctive. The free-text `term` matches the name and
/// the description as a case-insensitive substring.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DepartmentFilter {
    /// Free-text term matched against name and description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// Filter by name (substring).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Filter by description (substring).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Inclusive lower bound on creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_after: Option<OffsetDateTime>,
    /// Inclusive upper bound on creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_before: Option<OffsetDateTime>,
}

impl DepartmentFilter {
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

    /// Filters by name.
    #[inline]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filters by description.
    #[inline]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the normalized free-text term, if any.
    pub fn term(&self) -> Option<&str> {
        normalize(self.term.as_deref())
    }

    /// Returns the normalized name criterion, if any.
    pub fn name(&self) -> Option<&str> {
        normalize(self.name.as_deref())
    }

    /// Returns the normalized description criterion, if any.
    pub fn description(&self) -> Option<&str> {
        normalize(self.description.as_deref())
    }

    /// Returns whether no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.term().is_none()
            && self.name().is_none()
            && self.description().is_none()
            && self.created_after.is_none()
            && self.created_before.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter() {
        assert!(DepartmentFilter::new().is_empty());
        assert!(!DepartmentFilter::new().with_name("Sales").is_empty());
    }
}
