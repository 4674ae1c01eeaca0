//! Client and server configuration with TOML file support

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_LISTEN_ADDR, DEFAULT_NEXUS, DEFAULT_NODE_URL};
use crate::logging::LogFormat;
use crate::otc::Offer;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Where and how to reach the node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// JSON-RPC endpoint
    #[serde(default = "default_url")]
    pub url: String,

    /// Nexus name stamped on signed transactions
    #[serde(default = "default_nexus")]
    pub nexus: String,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Configuration of the `otc-server` binary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address the HTTP server binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Filter directive, e.g. `"info"` or `"debug,pha_client=trace"`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub node: ClientConfig,

    /// Offers listed at startup
    #[serde(default)]
    pub offers: Vec<Offer>,
}

fn default_url() -> String {
    DEFAULT_NODE_URL.to_string()
}

fn default_nexus() -> String {
    DEFAULT_NEXUS.to_string()
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_request_timeout() -> u64 {
    60
}

fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            nexus: default_nexus(),
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            node: ClientConfig::default(),
            offers: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn from_toml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
