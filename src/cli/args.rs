//! CLI argument definitions using clap
//!
//! Commands:
//! - customer-lookup serve [--config <path>] [--port <port>]
//! - customer-lookup check-config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Customer lookup service
#[derive(Parser, Debug)]
#[command(name = "customer-lookup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long, env = "CUSTOMER_LOOKUP_CONFIG")]
        config: Option<PathBuf>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate a configuration file and print the effective settings
    CheckConfig {
        /// Path to configuration file
        #[arg(long, default_value = "./customer-lookup.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
