use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, OptionalFromRequestParts, Query as AxumQuery};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;

use crate::handler::{Error, ErrorKind};

/// Enhanced query parameter extractor with improved error handling.
///
/// Failed query parsing is converted into a failure envelope that names
/// the offending parameter where the underlying serde error exposes it.
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Query<T>(pub T);

impl<T> Query<T> {
    /// Creates a new [`Query`] wrapper around the provided query parameters.
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Consumes the wrapper and returns the inner query parameters.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumQuery::<T>::from_request_parts(parts, state).await {
            Ok(AxumQuery(query)) => Ok(Query(query)),
            Err(rejection) => Err(enhance_query_error(rejection)),
        }
    }
}

impl<T, S> OptionalFromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        match AxumQuery::<T>::from_request_parts(parts, state).await {
            Ok(AxumQuery(query)) => Ok(Some(Query(query))),
            Err(_) => Ok(None),
        }
    }
}

/// Converts a raw query rejection into a detailed failure response.
fn enhance_query_error(rejection: QueryRejection) -> Error<'static> {
    tracing::debug!(
        target: "roster_server::extract",
        error = %rejection,
        "query parameter parsing failed",
    );

    match rejection {
        QueryRejection::FailedToDeserializeQueryString(err) => {
            let error_message = err.to_string();

            if error_message.contains("missing field") {
                let field_name = extract_field_name_from_error(&error_message);
                ErrorKind::BadRequest
                    .with_message("Missing required query parameter")
                    .with_detail(format!(
                        "The query parameter '{}' is required but was not provided",
                        field_name.unwrap_or("unknown")
                    ))
            } else if error_message.contains("invalid type")
                || error_message.contains("invalid digit")
            {
                ErrorKind::BadRequest
                    .with_message("Invalid query parameter type")
                    .with_detail(format!("Failed to parse query parameter: {error_message}"))
            } else {
                ErrorKind::BadRequest
                    .with_message("Invalid query parameters")
                    .with_detail(format!("Failed to parse query string: {error_message}"))
            }
        }
        _ => ErrorKind::BadRequest.with_message("Invalid query parameters"),
    }
}

/// Attempts to extract the field name from a serde error message.
fn extract_field_name_from_error(error_message: &str) -> Option<&str> {
    if let Some(start) = error_message.find('`')
        && let Some(end) = error_message[start + 1..].find('`')
    {
        return Some(&error_message[start + 1..start + 1 + end]);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_field_name_from_backticks() {
        assert_eq!(
            extract_field_name_from_error("missing field `pageSize`"),
            Some("pageSize")
        );
        assert_eq!(extract_field_name_from_error("some other error"), None);
    }

    #[test]
    fn query_wrapper() {
        let query = Query::new("term".to_owned());
        assert_eq!(query.into_inner(), "term");
    }
}
