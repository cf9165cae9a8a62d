//! HTTP server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use anyhow::{Result as AnyhowResult, anyhow};
use clap::Args;
use serde::{Deserialize, Serialize};

/// HTTP server configuration.
///
/// Network binding and lifecycle options for the HTTP server. All options
/// can be set via CLI arguments or environment variables:
///
/// - `HOST` - Server host address (default: 127.0.0.1)
/// - `PORT` - Server port (default: 3000, valid range: 1024-65535)
/// - `REQUEST_TIMEOUT` - Request processing timeout in seconds (default: 30)
/// - `SHUTDOWN_TIMEOUT` - Graceful shutdown timeout in seconds (default: 30)
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct ServerConfig {
    /// Host address to bind the server to.
    ///
    /// Use "127.0.0.1" for localhost only, "0.0.0.0" for all interfaces.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// TCP port number for the server to listen on.
    ///
    /// Must be in the range 1024-65535. Ports below 1024 require root
    /// privileges.
    #[arg(short = 'p', long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Maximum time in seconds to wait for a request to complete.
    #[arg(long, env = "REQUEST_TIMEOUT", default_value_t = 30)]
    pub request_timeout: u64,

    /// Maximum time in seconds to wait for graceful shutdown.
    ///
    /// During shutdown, the server stops accepting new connections and
    /// waits up to this duration for existing requests to complete.
    #[arg(long, env = "SHUTDOWN_TIMEOUT", default_value_t = 30)]
    pub shutdown_timeout: u64,
}

/// Default host address for development.
fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

impl ServerConfig {
    /// Validates all configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is outside its valid
    /// range: port must be 1024-65535, timeouts must be 1-300 seconds.
    pub fn validate(&self) -> AnyhowResult<()> {
        if self.port < 1024 {
            return Err(anyhow!(
                "Port {} is below 1024. Use ports 1024-65535 to avoid requiring root privileges.",
                self.port
            ));
        }

        if self.request_timeout == 0 || self.request_timeout > 300 {
            return Err(anyhow!(
                "Request timeout {} seconds is invalid. Must be between 1 and 300 seconds.",
                self.request_timeout
            ));
        }

        if self.shutdown_timeout == 0 || self.shutdown_timeout > 300 {
            return Err(anyhow!(
                "Shutdown timeout {} seconds is invalid. Must be between 1 and 300 seconds.",
                self.shutdown_timeout
            ));
        }

        Ok(())
    }

    /// Returns the complete socket address for server binding.
    #[must_use]
    pub const fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns the request processing timeout as a `Duration`.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Returns the graceful shutdown timeout as a `Duration`.
    #[must_use]
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout)
    }

    /// Returns whether the server is configured to bind to all interfaces.
    #[must_use]
    pub const fn binds_to_all_interfaces(&self) -> bool {
        match self.host {
            IpAddr::V4(addr) => addr.is_unspecified(),
            IpAddr::V6(addr) => addr.is_unspecified(),
        }
    }

    /// Returns whether this is a development configuration.
    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self.host, IpAddr::V4(addr) if addr.is_loopback()) && self.port == 3000
    }
}

impl Default for ServerConfig {
    /// Creates a development-friendly configuration with safe defaults.
    fn default() -> Self {
        Self {
            host: default_host(),
            port: 3000,
            request_timeout: 30,
            shutdown_timeout: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.is_development());
        assert!(!config.binds_to_all_interfaces());
    }

    #[test]
    fn reject_privileged_ports() {
        let config = ServerConfig {
            port: 80,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_invalid_timeouts() {
        let mut config = ServerConfig::default();

        config.request_timeout = 0;
        assert!(config.validate().is_err());

        config.request_timeout = 301;
        assert!(config.validate().is_err());

        config.request_timeout = 60;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn server_addr_returns_correct_socket() {
        let config = ServerConfig::default();
        let addr = config.server_addr();
        assert_eq!(addr.ip(), IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(addr.port(), 3000);
    }
}
