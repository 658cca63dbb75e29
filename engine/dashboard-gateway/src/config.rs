//! Configuration for the Dashboard Gateway
//!
//! Defaults, then an optional TOML file named by `DASHBOARD_CONFIG`, then
//! environment variable overrides.

use anyhow::{Context, Result};
use player_feed::FeedConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use crate::DEFAULT_PORT;

/// Main configuration for the Dashboard Gateway
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Upstream player statistics API
    pub upstream: FeedConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or filter directive (e.g. "info", "player_feed=debug")
    pub level: String,

    /// Log format (json, pretty, compact)
    pub format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl GatewayConfig {
    /// Get the server address
    pub fn server_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .with_context(|| {
                format!(
                    "Invalid bind address {}:{}",
                    self.server.host, self.server.port
                )
            })
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port must be greater than zero");
        }
        self.server_addr()?;
        self.upstream.validate()?;

        match self.logging.format.as_str() {
            "json" | "pretty" | "compact" => Ok(()),
            other => anyhow::bail!("Unknown log format '{other}'"),
        }
    }
}

/// Load configuration from file and environment variables
pub fn load_configuration() -> Result<GatewayConfig> {
    let mut config = match std::env::var("DASHBOARD_CONFIG") {
        Ok(path) => {
            tracing::debug!("Loading configuration from file: {}", path);
            GatewayConfig::load_from_file(&path)?
        }
        Err(_) => GatewayConfig::default(),
    };

    load_from_env(&mut config)?;
    config.validate()?;

    Ok(config)
}

fn load_from_env(config: &mut GatewayConfig) -> Result<()> {
    if let Ok(host) = std::env::var("DASHBOARD_HOST") {
        config.server.host = host;
    }

    if let Ok(port) = std::env::var("DASHBOARD_PORT") {
        config.server.port =
            port.parse().with_context(|| format!("Invalid DASHBOARD_PORT: '{port}'"))?;
    }

    if let Ok(level) = std::env::var("DASHBOARD_LOG_LEVEL") {
        config.logging.level = level;
    }

    if let Ok(format) = std::env::var("DASHBOARD_LOG_FORMAT") {
        config.logging.format = format;
    }

    config.upstream.apply_env()
}
