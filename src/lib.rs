//! customer-lookup - Asynchronous customer lookup service
//!
//! Answers `GET /v1/customers/:customer_id` with the matching customer,
//! a 404 when none exists, or a 400 when the id is invalid.

pub mod cli;
pub mod customer;
pub mod http_server;
pub mod observability;
