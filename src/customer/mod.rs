//! # Customer Module
//!
//! The customer read pipeline: validation, store lookup and translation
//! between the internal record and its wire representation.
//!
//! # Flow
//!
//! ```text
//! handler -> CustomerService -> RecordStore -> CustomerService -> CustomerTranslator -> handler
//! ```

pub mod errors;
pub mod record;
pub mod service;
pub mod store;
pub mod translator;

pub use errors::{StoreError, StoreResult, ValidationError};
pub use record::{CustomerRecord, CustomerWireRecord, OrderRecord, UNKNOWN_STREET_ADDRESS};
pub use service::{CustomerLookup, CustomerService};
pub use store::{MemoryRecordStore, RecordStore, StoreFuture};
pub use translator::CustomerTranslator;
