//! Log subscriber setup
//!
//! - `RUST_LOG` overrides the configured filter
//! - `pretty` is human readable, `json` is one object per line
//! - Installed once per process

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// Structured JSON lines
    Json,
}

impl LogFormat {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directives (default: "info")
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Output format (default: pretty)
    #[serde(default)]
    pub format: LogFormat,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// Resolve the effective filter, preferring `RUST_LOG`
    fn env_filter(&self) -> Result<EnvFilter, LogInitError> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.filter)
                .map_err(|e| LogInitError::InvalidFilter(format!("{}: {}", self.filter, e))),
        }
    }
}

/// Logging could not be initialized
#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Log subscriber already installed: {0}")]
    AlreadyInstalled(String),
}

/// Install the global subscriber
pub fn init_logging(config: &LogConfig) -> Result<(), LogInitError> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| LogInitError::AlreadyInstalled(e.to_string()))
}
