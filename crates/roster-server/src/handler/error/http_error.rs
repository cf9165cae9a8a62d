use std::borrow::Cow;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::handler::response::ApiResponse;

/// Result type alias for handler operations.
pub type Result<T, E = Error<'static>> = std::result::Result<T, E>;

/// Error kinds that map onto HTTP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or failed-validation request (400).
    BadRequest,
    /// Required path parameter is missing or malformed (400).
    MissingPathParam,
    /// Requested record does not exist (404).
    NotFound,
    /// Uniqueness or state conflict (409).
    Conflict,
    /// Unexpected server-side failure (500).
    InternalServerError,
}

impl ErrorKind {
    /// Returns the HTTP status code for this error kind.
    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::BadRequest | Self::MissingPathParam => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Creates an [`Error`] of this kind with the given message.
    pub fn with_message<'a>(self, message: impl Into<Cow<'a, str>>) -> Error<'a> {
        Error::new(self).with_message(message)
    }

    /// Creates an [`Error`] of this kind with the given resource name.
    pub fn with_resource<'a>(self, resource: impl Into<Cow<'a, str>>) -> Error<'a> {
        Error::new(self).with_resource(resource)
    }

    /// Returns the default user-facing message for this error kind.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::BadRequest => "The request could not be processed",
            Self::MissingPathParam => "A required path parameter is missing or malformed",
            Self::NotFound => "The requested record was not found",
            Self::Conflict => "The request conflicts with the current state of the record",
            Self::InternalServerError => "An unexpected error occurred",
        }
    }
}

/// Handler-level error that renders as a failure envelope.
///
/// Built incrementally: start from a kind, then attach a message, the
/// resource name, and any per-field detail strings.
#[must_use]
#[derive(Debug, Clone)]
pub struct Error<'a> {
    kind: ErrorKind,
    message: Option<Cow<'a, str>>,
    resource: Option<Cow<'a, str>>,
    details: Vec<String>,
}

impl<'a> Error<'a> {
    /// Creates a new [`Error`] from the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            resource: None,
            details: Vec::new(),
        }
    }

    /// Overrides the default message for this error.
    pub fn with_message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Names the resource this error concerns, e.g. `employee`.
    pub fn with_resource(mut self, resource: impl Into<Cow<'a, str>>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Appends a detail string to the `errors` array of the envelope.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    /// Appends multiple detail strings to the `errors` array.
    pub fn with_details<I, S>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.details.extend(details.into_iter().map(Into::into));
        self
    }

    /// Returns the error kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the HTTP status code of this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }

    fn into_message(self) -> (Cow<'a, str>, Vec<String>) {
        let message = match (self.message, self.resource) {
            (Some(message), _) => message,
            (None, Some(resource)) => match self.kind {
                ErrorKind::NotFound => {
                    Cow::Owned(format!("The requested {resource} was not found"))
                }
                _ => Cow::Borrowed(self.kind.default_message()),
            },
            (None, None) => Cow::Borrowed(self.kind.default_message()),
        };

        (message, self.details)
    }
}

impl From<ErrorKind> for Error<'_> {
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind)
    }
}

impl IntoResponse for Error<'_> {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                target: "roster_server::handler",
                kind = ?self.kind,
                "request failed with a server error",
            );
        }

        let (message, details) = self.into_message();
        ApiResponse::<()>::failure(status, message.into_owned(), details).into_response()
    }
}

impl From<validator::ValidationErrors> for Error<'_> {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut details = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let detail = match &error.message {
                    Some(message) => format!("{field}: {message}"),
                    None => format!("{field}: failed validation rule `{}`", error.code),
                };
                details.push(detail);
            }
        }
        details.sort();

        Error::new(ErrorKind::BadRequest)
            .with_message("One or more fields failed validation")
            .with_details(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ErrorKind::BadRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorKind::MissingPathParam.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ErrorKind::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorKind::Conflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorKind::InternalServerError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn resource_shapes_not_found_message() {
        let error = Error::new(ErrorKind::NotFound).with_resource("employee");
        let (message, _) = error.into_message();
        assert_eq!(message, "The requested employee was not found");
    }

    #[test]
    fn explicit_message_wins() {
        let error = Error::new(ErrorKind::Conflict)
            .with_resource("department")
            .with_message("Department name is already in use");
        let (message, _) = error.into_message();
        assert_eq!(message, "Department name is already in use");
    }

    #[test]
    fn details_accumulate() {
        let error = Error::new(ErrorKind::BadRequest)
            .with_detail("fullName: length must be between 2 and 100")
            .with_detail("email: invalid email address");
        let (_, details) = error.into_message();
        assert_eq!(details.len(), 2);
    }

    #[test]
    fn validation_errors_become_bad_request() {
        use validator::Validate;

        #[derive(Validate)]
        struct SignupForm {
            #[validate(length(min = 2, max = 100))]
            full_name: String,
            #[validate(email)]
            email: String,
        }

        let form = SignupForm {
            full_name: "x".to_owned(),
            email: "not-an-email".to_owned(),
        };

        let error: Error<'_> = form.validate().unwrap_err().into();
        assert_eq!(error.kind(), ErrorKind::BadRequest);
        let (_, details) = error.into_message();
        assert_eq!(details.len(), 2);
    }
}
