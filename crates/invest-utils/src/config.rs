//! Process configuration and environment helpers

use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use thiserror::Error;
use tracing::debug;

/// Environment variable holding the web UI listen address
pub const LISTEN_ADDR_ENV: &str = "INVEST_LISTEN_ADDR";

/// Default listen address for the web UI
pub const DEFAULT_LISTEN_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8501));

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value could not be parsed
    #[error("Invalid value for {name}: {detail}")]
    InvalidValue { name: String, detail: String },
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address the web UI binds to
    pub listen_addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR,
        }
    }
}

impl Config {
    /// Build the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(addr) = env_value(LISTEN_ADDR_ENV) {
            config.listen_addr = parse_listen_addr(&addr)?;
        }
        Ok(config)
    }
}

/// Parse a `host:port` listen address
pub fn parse_listen_addr(value: &str) -> Result<SocketAddr, ConfigError> {
    value.parse().map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
        name: LISTEN_ADDR_ENV.to_string(),
        detail: e.to_string(),
    })
}

/// Load a `.env` file from the working directory (or its parents) if present
///
/// A missing file is not an error. Returns whether a file was loaded.
pub fn load_dotenv() -> bool {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!("Loaded environment from {}", path.display());
            true
        }
        Err(e) if e.not_found() => false,
        Err(e) => {
            tracing::warn!("Ignoring unreadable .env file: {}", e);
            false
        }
    }
}

/// Read an environment variable, treating unset and empty values alike
pub fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
