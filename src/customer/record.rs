//! # Customer Records
//!
//! The store-resident customer record and the representation exchanged
//! with API callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Street address assigned to records built from a wire record
pub const UNKNOWN_STREET_ADDRESS: &str = "Unknown";

/// Internal customer record.
///
/// Records held by a store always carry an `id`; only records synthesized
/// from a wire record may lack one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    #[serde(default)]
    pub id: Option<i32>,

    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub street_address: Option<String>,

    /// Set by the store on each successful read
    #[serde(default)]
    pub last_read_timestamp: Option<DateTime<Utc>>,
}

impl CustomerRecord {
    pub fn new(id: i32, full_name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            full_name: Some(full_name.into()),
            ..Default::default()
        }
    }

    pub fn with_street_address(mut self, street_address: impl Into<String>) -> Self {
        self.street_address = Some(street_address.into());
        self
    }

    pub fn with_last_read_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.last_read_timestamp = Some(timestamp);
        self
    }
}

/// Customer representation returned by the HTTP API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerWireRecord {
    pub id: Option<i32>,
    pub full_name: Option<String>,
    pub last_read_timestamp: Option<DateTime<Utc>>,
}

/// An order placed by a customer.
///
/// Refers to its owner by key only; resolving the customer is a separate
/// lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub order_number: String,
    pub customer_id: i32,
}
