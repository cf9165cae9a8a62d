//! Enhanced JSON extractor with improved error handling.
//!
//! This module provides [`Json`], an enhanced version of [`axum::Json`] with
//! better error messages for malformed request bodies.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Json as AxumJson, OptionalFromRequest, Request};
use axum::response::{IntoResponse, Response};
use derive_more::{Deref, DerefMut, From};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::handler::{Error, ErrorKind};

/// Enhanced JSON extractor with improved error handling.
///
/// This extractor provides better error messages compared to the
/// default Axum JSON extractor. All errors are converted into the
/// uniform failure envelope with a detail entry describing what went
/// wrong with the request body.
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Creates a new [`Json`] wrapper around the provided value.
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Returns the inner value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let extractor = <AxumJson<T> as FromRequest<S>>::from_request(req, state).await;
        extractor.map(|x| Self::new(x.0)).map_err(Into::into)
    }
}

impl<T, S> OptionalFromRequest<S> for Json<T>
where
    T: DeserializeOwned + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Option<Self>, Self::Rejection> {
        let result = <Self as FromRequest<S>>::from_request(req, state).await;

        match result {
            Ok(json) => Ok(Some(json)),
            // For optional extraction, only propagate server errors.
            Err(error) => match error.kind() {
                ErrorKind::InternalServerError => Err(error),
                _ => Ok(None),
            },
        }
    }
}

impl<T> IntoResponse for Json<T>
where
    T: Serialize,
{
    #[inline]
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

impl From<JsonRejection> for Error<'static> {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => ErrorKind::BadRequest
                .with_message("Invalid request data format")
                .with_detail(format!(
                    "JSON deserialization failed: {}",
                    sanitize_error_message(&err.to_string())
                )),
            JsonRejection::JsonSyntaxError(err) => ErrorKind::BadRequest
                .with_message("Invalid JSON syntax in request body")
                .with_detail(format!(
                    "JSON parsing failed: {}",
                    sanitize_error_message(&err.to_string())
                )),
            JsonRejection::MissingJsonContentType(_) => ErrorKind::BadRequest
                .with_message("Invalid content type")
                .with_detail("Request must have the Content-Type header set to application/json"),
            JsonRejection::BytesRejection(err) => ErrorKind::BadRequest
                .with_message("Failed to read request body")
                .with_detail(sanitize_error_message(&err.to_string())),
            _ => ErrorKind::InternalServerError.with_message("Request processing failed"),
        }
    }
}

/// Sanitizes error messages to prevent information leakage while keeping them useful.
fn sanitize_error_message(message: &str) -> String {
    let lines = message.lines().take(3).collect::<Vec<_>>();
    lines.join(" ").chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_truncates_long_messages() {
        let long = "x".repeat(500);
        assert_eq!(sanitize_error_message(&long).len(), 200);
    }

    #[test]
    fn sanitize_joins_first_lines() {
        let message = "line one\nline two\nline three\nline four";
        assert_eq!(sanitize_error_message(message), "line one line two line three");
    }
}
