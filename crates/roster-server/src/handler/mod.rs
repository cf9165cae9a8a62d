//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! Every endpoint, including rejections produced by the extractors and
//! the fallback route, responds with the uniform [`ApiResponse`]
//! envelope.
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler
//! [`ApiResponse`]: crate::handler::response::ApiResponse

mod departments;
mod employees;
mod error;

pub mod request;
pub mod response;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use crate::handler::error::{Error, ErrorKind, Result};
use crate::service::ServiceState;

/// Builds the application router with all record-management routes.
pub fn routes(state: ServiceState) -> Router {
    Router::new()
        .merge(employees::routes())
        .merge(departments::routes())
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Renders unknown routes as a 404 envelope.
async fn fallback_handler() -> Error<'static> {
    ErrorKind::NotFound.with_message("The requested endpoint does not exist")
}

#[cfg(test)]
mod test {
    use axum::Router;
    use axum::routing::{get, post};
    use axum_test::TestServer;
    use serde_json::{Value, json};
    use validator::Validate;

    use crate::extract::{Json, Query, ValidateJson};
    use crate::handler::request::{CreateEmployeeRequest, PageParams, SearchEmployeesRequest};
    use crate::handler::response::ApiResponse;
    use crate::handler::{Result, fallback_handler};

    async fn echo_employee(
        ValidateJson(request): ValidateJson<CreateEmployeeRequest>,
    ) -> Result<ApiResponse<String>> {
        Ok(ApiResponse::created("Employee created", request.full_name))
    }

    // Applies the same boundary checks as the list handlers, minus the store.
    async fn echo_page(Query(params): Query<PageParams>) -> Result<ApiResponse<()>> {
        params.validate()?;
        Ok(ApiResponse::ok("Employees retrieved", ()))
    }

    // Applies the same boundary checks as the search handlers, minus the store.
    async fn echo_search(
        Json(request): Json<SearchEmployeesRequest>,
    ) -> Result<ApiResponse<()>> {
        request.page.validate()?;
        let _filter = request.filter()?;
        Ok(ApiResponse::ok("Employees retrieved", ()))
    }

    fn test_server() -> TestServer {
        let router = Router::new()
            .route("/employees", get(echo_page).post(echo_employee))
            .route("/employees/search", post(echo_search))
            .fallback(fallback_handler);
        TestServer::new(router).expect("failed to start test server")
    }

    #[tokio::test]
    async fn unknown_route_renders_envelope() {
        let server = test_server();
        let response = server.get("/does-not-exist").await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["isSuccess"], false);
        assert_eq!(body["statusCode"], 404);
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn invalid_payload_renders_field_errors() {
        let server = test_server();
        let response = server
            .post("/employees")
            .json(&json!({
                "fullName": "A",
                "email": "not-an-email",
                "dateOfBirth": "1990-01-01",
                "departmentId": "123e4567-e89b-12d3-a456-426614174000",
            }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["isSuccess"], false);
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["errors"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn valid_payload_renders_created_envelope() {
        let server = test_server();
        let response = server
            .post("/employees")
            .json(&json!({
                "fullName": "Ann Lee",
                "email": "ann@example.com",
                "dateOfBirth": "1990-01-01",
                "departmentId": "123e4567-e89b-12d3-a456-426614174000",
            }))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["isSuccess"], true);
        assert_eq!(body["statusCode"], 201);
        assert_eq!(body["data"], "Ann Lee");
    }

    #[tokio::test]
    async fn criteria_less_search_renders_validation_envelope() {
        let server = test_server();
        let response = server.post("/employees/search").json(&json!({})).await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["isSuccess"], false);
        assert_eq!(body["statusCode"], 400);
        assert_eq!(
            body["message"],
            "At least one search criteria must be provided"
        );
    }

    #[tokio::test]
    async fn search_with_one_criterion_is_accepted() {
        let server = test_server();
        let response = server
            .post("/employees/search")
            .json(&json!({"term": "ann"}))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["isSuccess"], true);
    }

    #[tokio::test]
    async fn out_of_range_page_params_render_validation_envelope() {
        let server = test_server();

        let response = server.get("/employees").add_query_param("pageSize", 500).await;
        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["isSuccess"], false);
        assert_eq!(body["statusCode"], 400);
        assert!(!body["errors"].as_array().unwrap().is_empty());

        let response = server.get("/employees").add_query_param("pageNumber", 0).await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn malformed_json_renders_envelope() {
        let server = test_server();
        let response = server
            .post("/employees")
            .content_type("application/json")
            .text("{not json")
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["isSuccess"], false);
        assert!(!body["errors"].as_array().unwrap().is_empty());
    }
}
