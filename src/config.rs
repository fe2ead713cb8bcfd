//! Configuration
//!
//! Everything has a default, so an empty YAML document is a valid config.
//!
//! ```yaml
//! fetch:
//!   timeout_secs: 30
//!   retries: 2
//!   headers:
//!     Access-Token: "12345678"
//! processor:
//!   compact_xsd_datatypes: true
//! response:
//!   status_class_prefix: false
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable that overrides [`FetchConfig::bearer_token`]
pub const BEARER_TOKEN_ENV: &str = "TRIPLEGRAPH_BEARER_TOKEN";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML error
    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub processor: ProcessorConfig,
    pub response: ResponseConfig,
}

impl Config {
    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a YAML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Apply environment overrides
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(token) = std::env::var(BEARER_TOKEN_ENV) {
            if !token.is_empty() {
                self.fetch.bearer_token = Some(token);
            }
        }
        self
    }
}

/// HTTP fetch configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Extra attempts after a transport error or 5xx response
    pub retries: u32,
    /// Base delay between attempts; attempt `n` waits `n` times this
    pub retry_backoff_ms: u64,
    /// Headers sent with every request
    pub headers: IndexMap<String, String>,
    /// Sent as `Authorization: Bearer <token>` when set
    pub bearer_token: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 60,
            retries: 0,
            retry_backoff_ms: 250,
            headers: IndexMap::new(),
            bearer_token: None,
        }
    }
}

/// Decoding and indexing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Render XML Schema datatypes as `xsd:<local>` in canonical literals
    pub compact_xsd_datatypes: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            compact_xsd_datatypes: true,
        }
    }
}

/// Response shaping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseConfig {
    /// Prefix errors of 3xx-5xx responses with `Client error: ` or
    /// `Server error: `
    pub status_class_prefix: bool,
}
