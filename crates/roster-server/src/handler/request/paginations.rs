use roster_postgres::types::{MAX_PAGE_SIZE, Pagination};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Page-oriented pagination parameters used across listing endpoints.
///
/// Clients address pages with a 1-based `pageNumber` and a `pageSize`;
/// out-of-range values fail validation at the boundary, before any
/// query executes.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    /// One-based page number, defaults to the first page.
    #[validate(range(min = 1, message = "page number must be at least 1"))]
    pub page_number: Option<i64>,
    /// Page size, `1..=100`, defaults to 10.
    #[validate(range(min = 1, max = MAX_PAGE_SIZE, message = "page size must be between 1 and 100"))]
    pub page_size: Option<i64>,
}

impl PageParams {
    /// Default page size for listing endpoints.
    const DEFAULT_PAGE_SIZE: i64 = 10;

    /// Returns a new [`PageParams`].
    #[inline]
    pub fn new(page_number: i64, page_size: i64) -> Self {
        Self {
            page_number: Some(page_number),
            page_size: Some(page_size),
        }
    }

    /// Returns the effective 1-based page number.
    pub fn page_number(&self) -> i64 {
        self.page_number.unwrap_or(1)
    }

    /// Returns the effective page size.
    pub fn page_size(&self) -> i64 {
        self.page_size.unwrap_or(Self::DEFAULT_PAGE_SIZE)
    }
}

impl From<PageParams> for Pagination {
    fn from(params: PageParams) -> Self {
        Pagination::from_page(params.page_number(), params.page_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page() {
        let params = PageParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.page_number(), 1);
        assert_eq!(params.page_size(), 10);

        let pagination = Pagination::from(params);
        assert_eq!(pagination.offset, 0);
        assert_eq!(pagination.limit, 10);
    }

    #[test]
    fn out_of_range_values_fail_validation() {
        let errors = PageParams::new(0, 500).validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("page_number"));
        assert!(fields.contains_key("page_size"));

        assert!(PageParams::new(-3, 10).validate().is_err());
        assert!(PageParams::new(1, 0).validate().is_err());
        assert!(PageParams::new(1, 101).validate().is_err());
    }

    #[test]
    fn boundary_values_pass_validation() {
        assert!(PageParams::new(1, 1).validate().is_ok());
        assert!(PageParams::new(1, MAX_PAGE_SIZE).validate().is_ok());
    }

    #[test]
    fn page_translates_to_offset() {
        let pagination = Pagination::from(PageParams::new(3, 20));
        assert_eq!(pagination.offset, 40);
        assert_eq!(pagination.limit, 20);
    }
}
