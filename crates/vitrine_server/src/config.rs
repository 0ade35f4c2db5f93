//! Configuration for the catalog server.

use vitrine_error::ConfigError;

/// Configuration for the catalog server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to (e.g., "0.0.0.0:3000")
    pub bind_addr: String,
    /// PostgreSQL connection string
    pub database_url: String,
}

impl ServerConfig {
    /// Create config from environment variables
    ///
    /// Reads:
    /// - `VITRINE_BIND_ADDR` (default: "0.0.0.0:3000")
    /// - `DATABASE_URL` (required)
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr =
            std::env::var("VITRINE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::new("DATABASE_URL not set"))?;

        Ok(Self {
            bind_addr,
            database_url,
        })
    }
}
