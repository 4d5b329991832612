//! CLI command implementations
//!
//! `serve` wires the pipeline explicitly: store -> service -> routes ->
//! server. Nothing is discovered at runtime.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::customer::{CustomerService, CustomerTranslator, MemoryRecordStore};
use crate::http_server::{CustomerState, HttpServer, HttpServerConfig};
use crate::observability::{init_logging, LogConfig};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// JSON array of customer records loaded at startup (optional)
    #[serde(default)]
    pub seed_path: Option<PathBuf>,

    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.http.port == 0 {
            return Err(CliError::config_error("http.port must be > 0"));
        }

        if self.http.host.trim().is_empty() {
            return Err(CliError::config_error("http.host must not be empty"));
        }

        Ok(())
    }

    /// Build the record store described by this configuration
    pub fn record_store(&self) -> CliResult<MemoryRecordStore> {
        match &self.seed_path {
            Some(path) => Ok(MemoryRecordStore::from_seed_file(path)?),
            None => Ok(MemoryRecordStore::new()),
        }
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::CheckConfig { config } => check_config(&config),
    }
}

/// Resolve the effective configuration for `serve`
fn resolve_config(config_path: Option<&Path>, port: Option<u16>) -> CliResult<Config> {
    let mut config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(port) = port {
        config.http.port = port;
        config.validate()?;
    }

    Ok(config)
}

/// Wire the customer pipeline into an HTTP server
pub fn build_server(config: &Config) -> CliResult<HttpServer> {
    let store = config.record_store()?;
    info!(records = store.len(), "record store ready");

    let service = CustomerService::new(Arc::new(store));
    let customers = CustomerState::new(service, CustomerTranslator::new());

    Ok(HttpServer::new(config.http.clone(), customers))
}

/// Start the HTTP API
///
/// 1. Load configuration (defaults when no path is given)
/// 2. Install the log subscriber
/// 3. Build the store, service and server
/// 4. Serve until Ctrl-C
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let config = resolve_config(config_path, port)?;

    init_logging(&config.log)?;
    info!(
        addr = %config.http.socket_addr(),
        seed = ?config.seed_path,
        "starting customer lookup service"
    );

    let server = build_server(&config)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Validate a configuration file and print the effective settings
pub fn check_config(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    write_json(&config)
}
