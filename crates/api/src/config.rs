//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `DATABASE_URL` - `SQLite` connection string
//!   (default: `sqlite:comanda.db?mode=rwc`)
//! - `HOST` - Bind address (default: 127.0.0.1)
//! - `PORT` - Listen port (default: 3000)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite:comanda.db?mode=rwc";
const DEFAULT_HOST: IpAddr = IpAddr::V4(std::net::Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Database connection URL (may contain credentials)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `HOST` or `PORT` cannot be
    /// parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned())
            .into();

        let host = match std::env::var("HOST") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("HOST".to_owned(), raw))?,
            Err(_) => DEFAULT_HOST,
        };

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_owned(), raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    /// The socket address to bind the server to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = ApiConfig {
            database_url: SecretString::from("sqlite::memory:".to_owned()),
            host: DEFAULT_HOST,
            port: 8080,
        };
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidEnvVar("PORT".to_owned(), "nope".to_owned());
        assert_eq!(err.to_string(), "Invalid environment variable PORT: nope");
    }
}
