//! Service layer error types and utilities.
//!
//! This module provides error handling for the service layer with
//! strongly-typed error kinds, a builder for attaching sources, and
//! integration with `thiserror` for `Display` and `Error` implementations.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// Type alias for boxed errors that are Send + Sync.
pub type BoxedError = Box<dyn StdError + Send + Sync>;

/// Result type alias for service layer operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error kind enumeration for categorizing service layer errors.
///
/// Separated from [`Error`] to allow pattern matching on error types
/// without accessing the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Configuration-related errors.
    Config,
    /// Database connectivity or migration errors.
    Database,
    /// Internal service logic errors.
    Internal,
}

impl ErrorKind {
    /// Returns the error kind as a string for categorization.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Database => "database",
            Self::Internal => "internal_service",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service layer error with structured information.
#[derive(Debug, thiserror::Error)]
#[error("{kind} error: {message}")]
pub struct Error {
    /// The error category/type
    kind: ErrorKind,
    /// Human-readable error message
    message: Cow<'static, str>,
    /// Optional underlying error that caused this error
    #[source]
    source: Option<BoxedError>,
}

impl Error {
    /// Creates a new [`Error`].
    #[inline]
    fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attaches a source error, enabling error chain tracking.
    #[inline]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the error kind.
    #[must_use]
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Creates a new configuration error.
    #[inline]
    pub fn config(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    /// Creates a new database error.
    #[inline]
    pub fn database(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Creates a new internal service error.
    #[inline]
    pub fn internal(
        service: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        let service_name = service.into();
        let msg = message.into();
        let full_message = format!("{}: {}", service_name, msg);
        Self::new(ErrorKind::Internal, full_message)
    }
}

impl From<roster_postgres::PgError> for Error {
    fn from(err: roster_postgres::PgError) -> Self {
        Error::database(err.to_string()).with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_creation() {
        let error = Error::config("invalid configuration");
        assert_eq!(error.kind(), ErrorKind::Config);
        assert_eq!(error.message(), "invalid configuration");
    }

    #[test]
    fn error_with_source() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::config("cannot read config file").with_source(source);

        assert!(StdError::source(&error).is_some());
        assert_eq!(error.kind(), ErrorKind::Config);
    }

    #[test]
    fn error_kind_as_str() {
        assert_eq!(ErrorKind::Config.as_str(), "config");
        assert_eq!(ErrorKind::Database.as_str(), "database");
        assert_eq!(ErrorKind::Internal.as_str(), "internal_service");
    }
}
