//! Server error types with enhanced context and recovery suggestions.

use std::io;

use thiserror::Error;

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Error type for server startup and runtime failures.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Server configuration is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to bind to the specified address.
    #[error("Failed to bind to {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: io::Error,
    },

    /// Runtime server error.
    #[error("Runtime error: {0}")]
    Runtime(#[source] io::Error),
}

impl ServerError {
    /// Creates a bind error with address context.
    pub fn bind_error(address: &str, source: io::Error) -> Self {
        Self::BindError {
            address: address.to_string(),
            source,
        }
    }

    /// Determines if this error is potentially recoverable.
    ///
    /// Recoverable errors are those that might succeed if retried or if
    /// the environment changes (e.g., different port, wait for resource).
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidConfig(_) => false,
            Self::BindError { source, .. } => matches!(
                source.kind(),
                io::ErrorKind::PermissionDenied
                    | io::ErrorKind::AddrInUse
                    | io::ErrorKind::AddrNotAvailable
            ),
            Self::Runtime(err) => matches!(
                err.kind(),
                io::ErrorKind::PermissionDenied
                    | io::ErrorKind::Interrupted
                    | io::ErrorKind::TimedOut
                    | io::ErrorKind::ConnectionRefused
            ),
        }
    }

    /// Provides a human-readable suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidConfig(_) => {
                Some("Check your configuration and ensure all required fields are set correctly")
            }
            Self::BindError { source, .. } => match source.kind() {
                io::ErrorKind::PermissionDenied => {
                    Some("Try using a port above 1024 or run with appropriate privileges")
                }
                io::ErrorKind::AddrInUse => Some(
                    "The port is already in use. Try a different port or stop the conflicting service",
                ),
                io::ErrorKind::AddrNotAvailable => {
                    Some("The address is not available. Check network interface configuration")
                }
                _ => Some("Check network configuration and firewall settings"),
            },
            Self::Runtime(err) => match err.kind() {
                io::ErrorKind::PermissionDenied => Some("Check file and network permissions"),
                io::ErrorKind::Interrupted => Some("The operation was interrupted, you may retry"),
                io::ErrorKind::TimedOut => {
                    Some("The operation timed out, consider increasing timeout values")
                }
                io::ErrorKind::ConnectionRefused => {
                    Some("Connection was refused, check if the service is running")
                }
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recoverable_errors_have_suggestions() {
        let bind_err = ServerError::bind_error(
            "127.0.0.1:80",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );

        assert!(bind_err.is_recoverable());
        assert!(bind_err.suggestion().is_some());
    }

    #[test]
    fn invalid_config_is_not_recoverable() {
        let config_err = ServerError::InvalidConfig("invalid field".to_string());

        assert!(!config_err.is_recoverable());
        assert!(config_err.suggestion().is_some());
    }
}
