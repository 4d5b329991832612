//! # Customer Errors
//!
//! Error types for the customer pipeline.

use thiserror::Error;

/// Result type for record store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Caller-supplied input did not meet the service's precondition.
///
/// The message is surfaced verbatim to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Rejection of a customer ID.
    ///
    /// The raw value is wrapped in square brackets so that a missing value
    /// (`null`) is visible at a glance.
    pub fn invalid_customer_id(customer_id: Option<i32>) -> Self {
        let rendered = match customer_id {
            Some(id) => id.to_string(),
            None => "null".to_string(),
        };
        Self {
            message: format!("Invalid customer ID [{}].", rendered),
        }
    }

    /// Get the message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Record store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Record cannot be keyed
    #[error("Customer record has no id")]
    MissingId,

    /// Store could not serve the request
    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    /// Seed data could not be loaded
    #[error("Failed to load seed data: {0}")]
    Seed(String),
}

impl StoreError {
    /// Get error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingId => "STORE_MISSING_ID",
            Self::Unavailable(_) => "STORE_UNAVAILABLE",
            Self::Seed(_) => "STORE_SEED_FAILED",
        }
    }
}
