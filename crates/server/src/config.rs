//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults reproduce the demo deployment.
//!
//! - `PARTSBIN_HOST` - Bind address (default: 127.0.0.1)
//! - `PARTSBIN_PORT` - Listen port (default: 3003)
//! - `PARTSBIN_STATIC_DIR` - Directory served at the root path (default: public)
//! - `PARTSBIN_CATALOG_FILE` - JSON file seeding the catalog (default: built-in dataset)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Catalog server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory of static assets served at the root path
    pub static_dir: PathBuf,
    /// Optional JSON file overriding the built-in catalog dataset
    pub catalog_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("PARTSBIN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("PARTSBIN_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("PARTSBIN_PORT", "3003")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PARTSBIN_PORT".to_string(), e.to_string()))?;
        let static_dir = PathBuf::from(get_env_or_default("PARTSBIN_STATIC_DIR", "public"));
        let catalog_file = get_optional_env("PARTSBIN_CATALOG_FILE").map(PathBuf::from);

        Ok(Self {
            host,
            port,
            static_dir,
            catalog_file,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3003,
            static_dir: PathBuf::from("public"),
            catalog_file: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3003);
    }

    #[test]
    fn test_socket_addr_any_host() {
        let config = ServerConfig {
            host: "0.0.0.0".parse().unwrap(),
            port: 8080,
            static_dir: PathBuf::from("public"),
            catalog_file: Some(PathBuf::from("catalog.json")),
        };

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }
}
