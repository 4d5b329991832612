//! # HTTP Server Module
//!
//! Axum server exposing the customer read API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/v1/customers/:customer_id` - Customer lookup

pub mod config;
pub mod customer_routes;
pub mod errors;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use customer_routes::{customer_routes, CustomerState};
pub use errors::ApiError;
pub use server::HttpServer;
