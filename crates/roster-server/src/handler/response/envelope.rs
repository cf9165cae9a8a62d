//! Uniform response envelope for all API endpoints.
//!
//! Every endpoint, success or failure, returns the same JSON shape:
//!
//! ```json
//! {
//!     "isSuccess": true,
//!     "message": "Employee created",
//!     "data": { "...": "..." },
//!     "errors": [],
//!     "statusCode": 201
//! }
//! ```
//!
//! Failures carry `data: null` and one or more entries in `errors`. The
//! HTTP status code of the response always matches `statusCode`.

use std::borrow::Cow;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Uniform API response envelope.
#[must_use = "responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub is_success: bool,
    /// Human-readable outcome summary
    pub message: Cow<'static, str>,
    /// Operation payload, `null` on failure
    pub data: Option<T>,
    /// Machine-consumable error details, empty on success
    pub errors: Vec<String>,
    /// HTTP status code, mirrors the response status
    pub status_code: u16,
}

impl<T> ApiResponse<T> {
    /// Creates a success envelope with a 200 status.
    pub fn ok(message: impl Into<Cow<'static, str>>, data: T) -> Self {
        Self::success(StatusCode::OK, message, data)
    }

    /// Creates a success envelope with a 201 status.
    pub fn created(message: impl Into<Cow<'static, str>>, data: T) -> Self {
        Self::success(StatusCode::CREATED, message, data)
    }

    /// Creates a success envelope with the given status.
    pub fn success(status: StatusCode, message: impl Into<Cow<'static, str>>, data: T) -> Self {
        Self {
            is_success: true,
            message: message.into(),
            data: Some(data),
            errors: Vec::new(),
            status_code: status.as_u16(),
        }
    }

    /// Creates a failure envelope with the given status and error details.
    pub fn failure(
        status: StatusCode,
        message: impl Into<Cow<'static, str>>,
        errors: Vec<String>,
    ) -> Self {
        Self {
            is_success: false,
            message: message.into(),
            data: None,
            errors,
            status_code: status.as_u16(),
        }
    }

    /// Returns the HTTP status code of this envelope.
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// Paginated collection payload carried in [`ApiResponse::data`].
#[must_use]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData<T> {
    /// Records of the requested page
    pub items: Vec<T>,
    /// Total number of records matching the query
    pub total_count: i64,
    /// One-based page number
    pub page_number: i64,
    /// Page size used for the window
    pub page_size: i64,
    /// Total number of pages at this page size
    pub total_pages: i64,
    /// Whether a previous page exists
    pub has_previous_page: bool,
    /// Whether a further page exists
    pub has_next_page: bool,
}

impl<T> PageData<T> {
    /// Creates page metadata for the given window.
    ///
    /// `total_pages` is the ceiling of `total_count / page_size`; an empty
    /// result set yields zero pages and both navigation flags false.
    pub fn new(items: Vec<T>, total_count: i64, page_number: i64, page_size: i64) -> Self {
        let total_pages = if page_size > 0 {
            (total_count + page_size - 1) / page_size
        } else {
            0
        };

        Self {
            items,
            total_count,
            page_number,
            page_size,
            total_pages,
            has_previous_page: page_number > 1,
            has_next_page: page_number < total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope() {
        let response = ApiResponse::ok("OK", 42);
        assert!(response.is_success);
        assert_eq!(response.status_code, 200);
        assert_eq!(response.data, Some(42));
        assert!(response.errors.is_empty());
    }

    #[test]
    fn failure_envelope() {
        let response = ApiResponse::<()>::failure(
            StatusCode::CONFLICT,
            "Email already in use",
            vec!["email must be unique among active employees".to_owned()],
        );

        assert!(!response.is_success);
        assert_eq!(response.status_code, 409);
        assert!(response.data.is_none());
        assert_eq!(response.errors.len(), 1);
    }

    #[test]
    fn envelope_serialization_uses_camel_case() {
        let response = ApiResponse::created("Created", "payload");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["isSuccess"], true);
        assert_eq!(json["statusCode"], 201);
        assert_eq!(json["data"], "payload");
        assert!(json["errors"].as_array().unwrap().is_empty());
    }

    #[test]
    fn failure_serializes_null_data() {
        let response =
            ApiResponse::<String>::failure(StatusCode::NOT_FOUND, "Employee not found", vec![]);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json["data"].is_null());
        assert_eq!(json["statusCode"], 404);
    }

    #[test]
    fn page_metadata_navigation_flags() {
        let page = PageData::new(vec![1, 2, 3], 25, 2, 10);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_previous_page);
        assert!(page.has_next_page);

        let last = PageData::new(vec![4, 5], 25, 3, 10);
        assert!(last.has_previous_page);
        assert!(!last.has_next_page);
    }

    #[test]
    fn empty_page_metadata() {
        let page = PageData::<i32>::new(vec![], 0, 1, 10);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_previous_page);
        assert!(!page.has_next_page);
    }

    #[test]
    fn page_beyond_range_is_empty_not_error() {
        let page = PageData::<i32>::new(vec![], 25, 9, 10);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_previous_page);
        assert!(!page.has_next_page);
        assert!(page.items.is_empty());
    }
}
