//! Sorting options for department queries.

use serde::{Deserialize, Serialize};
use strum::EnumString;

use super::SortBy;

/// Fields available for sorting departments.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum DepartmentSortField {
    /// Sort by department name.
    #[default]
    #[strum(serialize = "name")]
    Name,
    /// Sort by description.
    #[strum(serialize = "description")]
    Description,
    /// Sort by creation timestamp.
    #[strum(serialize = "created_at", serialize = "createdAt")]
    CreatedAt,
}

impl DepartmentSortField {
    /// Parses a sort key, falling back to the default for unknown values.
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or_default()
    }
}

/// Sorting specification for departments.
pub type DepartmentSortBy = SortBy<DepartmentSortField>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_fall_back_to_name() {
        assert_eq!(
            DepartmentSortField::parse_or_default(Some("budget")),
            DepartmentSortField::Name
        );
        assert_eq!(
            DepartmentSortField::parse_or_default(Some("created_at")),
            DepartmentSortField::CreatedAt
        );
    }
}
