//! # Record Store
//!
//! Keyed storage for customer records. The service only ever looks
//! records up by id; stores may stamp the read time on a hit.

use std::collections::HashMap;
use std::fs;
use std::future::{self, Future};
use std::path::Path;
use std::pin::Pin;
use std::sync::RwLock;

use chrono::Utc;
use tracing::{debug, info};

use super::errors::{StoreError, StoreResult};
use super::record::CustomerRecord;

/// Boxed future returned by store lookups
pub type StoreFuture<'a> =
    Pin<Box<dyn Future<Output = StoreResult<Option<CustomerRecord>>> + Send + 'a>>;

/// Trait for customer record storage
pub trait RecordStore: Send + Sync {
    /// Find the customer with the given id.
    ///
    /// Returns `Ok(None)` when no record matches.
    fn find_by_id(&self, id: i32) -> StoreFuture<'_>;
}

/// In-memory record store
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: RwLock<HashMap<i32, CustomerRecord>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a JSON array of customer records.
    ///
    /// A missing file yields an empty store.
    pub fn from_seed_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let store = Self::new();

        if !path.exists() {
            info!(path = %path.display(), "seed file not found, starting with an empty store");
            return Ok(store);
        }

        let content = fs::read_to_string(path)
            .map_err(|e| StoreError::Seed(format!("{}: {}", path.display(), e)))?;

        if content.trim().is_empty() {
            return Ok(store);
        }

        let records: Vec<CustomerRecord> = serde_json::from_str(&content)
            .map_err(|e| StoreError::Seed(format!("{}: {}", path.display(), e)))?;

        for record in records {
            store.insert(record)?;
        }

        info!(path = %path.display(), records = store.len(), "loaded seed records");
        Ok(store)
    }

    /// Insert or replace a record
    pub fn insert(&self, record: CustomerRecord) -> StoreResult<()> {
        let id = record.id.ok_or(StoreError::MissingId)?;
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Unavailable("Lock poisoned".to_string()))?;
        records.insert(id, record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_and_stamp(&self, id: i32) -> StoreResult<Option<CustomerRecord>> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Unavailable("Lock poisoned".to_string()))?;

        let Some(record) = records.get_mut(&id) else {
            debug!(customer_id = id, "no record");
            return Ok(None);
        };

        record.last_read_timestamp = Some(Utc::now());
        Ok(Some(record.clone()))
    }
}

impl RecordStore for MemoryRecordStore {
    fn find_by_id(&self, id: i32) -> StoreFuture<'_> {
        Box::pin(future::ready(self.read_and_stamp(id)))
    }
}
