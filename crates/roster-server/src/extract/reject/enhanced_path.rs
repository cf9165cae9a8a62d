use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, OptionalFromRequestParts, Path as AxumPath};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;

use crate::handler::{Error, ErrorKind};

/// Enhanced path parameter extractor with improved error handling.
///
/// Identifier segments that fail to parse are rejected with a message
/// naming the expected format instead of axum's generic 400.
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Path<T>(pub T);

impl<T> Path<T> {
    /// Creates a new instance of [`Path`].
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Returns the inner path parameters.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let extractor =
            <AxumPath<T> as FromRequestParts<S>>::from_request_parts(parts, state).await;
        extractor.map(|x| Self(x.0)).map_err(Into::into)
    }
}

impl<T, S> OptionalFromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        let extractor =
            <AxumPath<T> as OptionalFromRequestParts<S>>::from_request_parts(parts, state).await;

        match extractor {
            Ok(maybe_path) => Ok(maybe_path.map(|x| Self::new(x.0))),
            // For optional extraction, only propagate server errors.
            Err(rejection) => match rejection {
                PathRejection::FailedToDeserializePathParams(_)
                | PathRejection::MissingPathParams(_) => Ok(None),
                _ => Err(rejection.into()),
            },
        }
    }
}

impl From<PathRejection> for Error<'static> {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(err) => {
                let error_message = err.to_string();
                let hint = deserialization_hint(&error_message);

                ErrorKind::BadRequest
                    .with_message("Invalid path parameter format")
                    .with_detail(format!(
                        "{}. {}",
                        sanitize_error_message(&error_message),
                        hint
                    ))
            }
            PathRejection::MissingPathParams(err) => ErrorKind::MissingPathParam
                .with_message("Required path parameter missing")
                .with_detail(sanitize_error_message(&err.to_string())),
            _ => ErrorKind::InternalServerError.with_message("Path processing failed"),
        }
    }
}

/// Provides type-specific guidance for common path parameter failures.
fn deserialization_hint(error_message: &str) -> &'static str {
    let error_lower = error_message.to_lowercase();

    if error_lower.contains("uuid") || error_lower.contains("invalid character") {
        "Identifiers must be UUIDs in the format xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx"
    } else if error_lower.contains("invalid digit") || error_lower.contains("cannot parse") {
        "Numeric parameters must contain only digits"
    } else {
        "Check that the parameter matches the expected type"
    }
}

/// Sanitizes error messages to prevent information leakage while keeping them useful.
fn sanitize_error_message(message: &str) -> String {
    message
        .lines()
        .take(2)
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(150)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_hint() {
        assert!(deserialization_hint("UUID parsing failed").contains("UUID"));
        assert!(deserialization_hint("invalid digit found").contains("digits"));
    }

    #[test]
    fn path_wrapper() {
        let path = Path::new(42u32);
        assert_eq!(path.into_inner(), 42);
    }
}
