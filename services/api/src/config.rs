//! Server configuration loaded from the environment

use anyhow::Result;
use config::{Config, Environment};
use serde::Deserialize;

/// Server configuration
///
/// # Environment Variables
/// - `USERS_API_HOST`: address to bind (default: "0.0.0.0")
/// - `USERS_API_PORT`: port to listen on (default: 3001)
/// - `USERS_API_LOG_LEVEL`: fallback log filter when `RUST_LOG` is unset (default: "info")
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl ServerConfig {
    /// Create a new ServerConfig from environment variables
    pub fn from_env() -> Result<Self> {
        let config = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3001)?
            .set_default("log_level", "info")?
            .add_source(Environment::with_prefix("USERS_API").try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Address the listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
