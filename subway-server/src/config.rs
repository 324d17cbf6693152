//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default listen address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Default network file.
pub const DEFAULT_NETWORK_PATH: &str = "network.json";

/// Error returned for an unusable configuration value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SUBWAY_ADDR is not a socket address: {value}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Settings for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on (`SUBWAY_ADDR`).
    pub addr: SocketAddr,
    /// JSON file describing stations and lines (`SUBWAY_NETWORK`).
    pub network_path: PathBuf,
}

impl ServerConfig {
    /// Read the configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, falling back to defaults for
    /// unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = lookup("SUBWAY_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr.clone(),
                source,
            })?;

        let network_path = lookup("SUBWAY_NETWORK")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NETWORK_PATH));

        Ok(Self { addr, network_path })
    }
}
