//! Application configuration

use std::net::SocketAddr;

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `WRLDBLDR_SERVER_PORT`
const ENV_PREFIX: &str = "WRLDBLDR";

/// Application configuration loaded from environment
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Interface the HTTP server binds to
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    fn from_environment(environment: Environment) -> Result<Self> {
        Config::builder()
            .set_default("server_host", "0.0.0.0")?
            .set_default("server_port", 3000)?
            .add_source(environment)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn bind_address(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server_host, self.server_port)
            .parse()
            .with_context(|| format!("Invalid server address {}:{}", self.server_host, self.server_port))
    }
}

/// Build metadata, fixed at compile time and handed to whoever needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl BuildInfo {
    pub const fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
