//! Observability for the customer service
//!
//! Logging is done with `tracing` throughout the crate. This module owns
//! the subscriber configuration and its one-time installation.
//!
//! # Usage
//!
//! ```ignore
//! use customer_lookup::observability::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::default())?;
//! tracing::info!(port = 8080, "starting");
//! ```

mod logger;

pub use logger::{init_logging, LogConfig, LogFormat, LogInitError};
