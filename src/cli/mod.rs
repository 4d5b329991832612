//! CLI module for the customer lookup service
//!
//! Provides command-line interface for:
//! - serve: Load configuration and run the HTTP API
//! - check-config: Validate a configuration file and print it

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{build_server, check_config, run, run_command, serve, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_json;
