//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::graph::AdjacencyMode;
use crate::network::DEFAULT_NETWORK_URL;

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {var}: {message}")]
pub struct ConfigError {
    var: &'static str,
    message: String,
}

/// Configuration for the transit server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (`TRANSIT_BIND_ADDR`).
    pub bind_addr: SocketAddr,

    /// Network feed URL (`TRANSIT_NETWORK_URL`).
    pub network_url: String,

    /// Serve lines from this JSON file instead of the feed
    /// (`TRANSIT_NETWORK_FILE`).
    pub network_file: Option<PathBuf>,

    /// How long a fetched line list is reused (`TRANSIT_NETWORK_TTL_SECS`).
    pub network_ttl: Duration,

    /// Feed request timeout in seconds (`TRANSIT_HTTP_TIMEOUT_SECS`).
    pub http_timeout_secs: u64,

    /// Static assets directory (`TRANSIT_STATIC_DIR`).
    pub static_dir: String,

    /// Graph adjacency rule (`TRANSIT_ADJACENCY`).
    pub adjacency: AdjacencyMode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            network_url: DEFAULT_NETWORK_URL.to_string(),
            network_file: None,
            network_ttl: Duration::from_secs(60),
            http_timeout_secs: 30,
            static_dir: "static".to_string(),
            adjacency: AdjacencyMode::Literal,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration using `lookup` to resolve variables.
    ///
    /// Unset or empty variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(addr) = get("TRANSIT_BIND_ADDR") {
            config.bind_addr = addr.trim().parse().map_err(|e| ConfigError {
                var: "TRANSIT_BIND_ADDR",
                message: format!("{e}"),
            })?;
        }

        if let Some(url) = get("TRANSIT_NETWORK_URL") {
            config.network_url = url;
        }

        config.network_file = get("TRANSIT_NETWORK_FILE").map(PathBuf::from);

        if let Some(secs) = get("TRANSIT_NETWORK_TTL_SECS") {
            config.network_ttl = Duration::from_secs(parse_secs("TRANSIT_NETWORK_TTL_SECS", &secs)?);
        }

        if let Some(secs) = get("TRANSIT_HTTP_TIMEOUT_SECS") {
            config.http_timeout_secs = parse_secs("TRANSIT_HTTP_TIMEOUT_SECS", &secs)?;
        }

        if let Some(dir) = get("TRANSIT_STATIC_DIR") {
            config.static_dir = dir;
        }

        if let Some(mode) = get("TRANSIT_ADJACENCY") {
            config.adjacency = mode.parse().map_err(|e| ConfigError {
                var: "TRANSIT_ADJACENCY",
                message: format!("{e}"),
            })?;
        }

        Ok(config)
    }
}

fn parse_secs(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError {
        var,
        message: format!("expected a whole number of seconds, got {value:?}"),
    })
}
