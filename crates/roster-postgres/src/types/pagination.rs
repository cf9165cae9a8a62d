//! Offset-based pagination for database queries.

use serde::{Deserialize, Serialize};

/// Maximum number of items per page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Offset-based pagination parameters for database queries.
///
/// Limits are clamped to `1..=`[`MAX_PAGE_SIZE`] and offsets to non-negative
/// values, so a `Pagination` is always safe to pass to a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Maximum number of records to return.
    pub limit: i64,
    /// Number of records to skip.
    pub offset: i64,
}

impl Pagination {
    /// Creates a new pagination instance.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_PAGE_SIZE),
            offset: offset.max(0),
        }
    }

    /// Creates pagination from a 1-based page number and page size.
    pub fn from_page(page: i64, page_size: i64) -> Self {
        let page = page.max(1);
        let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        Self::new(page_size, (page - 1) * page_size)
    }

    /// Gets the current page number (1-based).
    pub fn page_number(&self) -> i64 {
        (self.offset / self.limit) + 1
    }

    /// Gets the page size.
    pub fn page_size(&self) -> i64 {
        self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
        }
    }
}

/// Result of an offset-paginated query.
#[derive(Debug, Clone)]
pub struct OffsetPage<T> {
    /// The items in this page.
    pub items: Vec<T>,
    /// Total count of items matching the query (across all pages).
    pub total: i64,
}

impl<T> OffsetPage<T> {
    /// Creates a new offset page.
    pub fn new(items: Vec<T>, total: i64) -> Self {
        Self { items, total }
    }

    /// Creates an empty offset page.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }

    /// Maps the items to a different type.
    pub fn map<U, F>(self, f: F) -> OffsetPage<U>
    where
        F: FnMut(T) -> U,
    {
        OffsetPage {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }

    /// Returns the total number of pages.
    pub fn total_pages(&self, pagination: &Pagination) -> i64 {
        (self.total + pagination.limit - 1) / pagination.limit
    }

    /// Returns whether there are more pages after this one.
    pub fn has_more(&self, pagination: &Pagination) -> bool {
        (pagination.offset + self.items.len() as i64) < self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_bounds_checking() {
        let pagination = Pagination::new(0, 10);
        assert_eq!(pagination.limit, 1);

        let pagination = Pagination::new(500, 10);
        assert_eq!(pagination.limit, MAX_PAGE_SIZE);

        let pagination = Pagination::new(10, -5);
        assert_eq!(pagination.offset, 0);
    }

    #[test]
    fn pagination_from_page() {
        let pagination = Pagination::from_page(1, 20);
        assert_eq!(pagination.limit, 20);
        assert_eq!(pagination.offset, 0);

        let pagination = Pagination::from_page(3, 10);
        assert_eq!(pagination.offset, 20);

        let pagination = Pagination::from_page(0, 20);
        assert_eq!(pagination.offset, 0);

        let pagination = Pagination::from_page(1, 0);
        assert_eq!(pagination.limit, 1);
    }

    #[test]
    fn pagination_page_number() {
        let pagination = Pagination::new(20, 40);
        assert_eq!(pagination.page_number(), 3);

        let pagination = Pagination::new(10, 25);
        assert_eq!(pagination.page_number(), 3);
    }

    #[test]
    fn offset_page_total_pages() {
        let pagination = Pagination::new(10, 0);

        let page: OffsetPage<i32> = OffsetPage::new(vec![], 25);
        assert_eq!(page.total_pages(&pagination), 3);

        let page: OffsetPage<i32> = OffsetPage::new(vec![], 30);
        assert_eq!(page.total_pages(&pagination), 3);

        let page: OffsetPage<i32> = OffsetPage::empty();
        assert_eq!(page.total_pages(&pagination), 0);
    }

    #[test]
    fn offset_page_has_more() {
        let pagination = Pagination::new(10, 0);
        let page = OffsetPage::new((1..=10).collect(), 25);
        assert!(page.has_more(&pagination));

        let page = OffsetPage::new(vec![1, 2, 3], 3);
        assert!(!page.has_more(&pagination));
    }
}
