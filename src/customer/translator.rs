//! # Customer Translator
//!
//! Converts between `CustomerWireRecord` and `CustomerRecord`. Values are
//! copied as-is; only the shape changes.

use super::record::{CustomerRecord, CustomerWireRecord, UNKNOWN_STREET_ADDRESS};

/// Stateless translator between wire and internal customer records
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerTranslator;

impl CustomerTranslator {
    pub fn new() -> Self {
        Self
    }

    /// Translate a record into its wire representation
    pub fn to_wire(&self, record: &CustomerRecord) -> CustomerWireRecord {
        CustomerWireRecord {
            id: record.id,
            full_name: record.full_name.clone(),
            last_read_timestamp: record.last_read_timestamp,
        }
    }

    /// Translate a wire record into a new internal record.
    ///
    /// The wire type carries no address, so the street address is always
    /// `UNKNOWN_STREET_ADDRESS`.
    pub fn to_internal(&self, wire: &CustomerWireRecord) -> CustomerRecord {
        CustomerRecord {
            id: wire.id,
            full_name: wire.full_name.clone(),
            street_address: Some(UNKNOWN_STREET_ADDRESS.to_string()),
            last_read_timestamp: wire.last_read_timestamp,
        }
    }
}
