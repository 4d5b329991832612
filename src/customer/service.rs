//! # Customer Service
//!
//! Business rules for reading customers. Validates the requested id and
//! delegates the lookup to the record store.

use std::sync::Arc;

use tracing::debug;

use super::errors::{StoreResult, ValidationError};
use super::record::CustomerRecord;
use super::store::RecordStore;

/// Outcome of a customer lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerLookup {
    /// A record matched the id
    Found(CustomerRecord),
    /// The id is valid but no record matches
    Absent,
    /// The id failed validation; the store was not consulted
    Invalid(ValidationError),
}

/// Customer service
///
/// Holds only a shared handle to the store, so clones are cheap and
/// concurrent calls need no coordination.
#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn RecordStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Returns whether the given customer id is valid
    pub fn is_valid_customer_id(customer_id: Option<i32>) -> bool {
        matches!(customer_id, Some(id) if id > 0)
    }

    /// Look up the customer with the given id.
    ///
    /// Store failures are returned as `Err` unmodified.
    pub async fn get_customer(&self, customer_id: Option<i32>) -> StoreResult<CustomerLookup> {
        let id = match customer_id {
            Some(id) if Self::is_valid_customer_id(customer_id) => id,
            _ => {
                debug!(customer_id = ?customer_id, "rejected customer id");
                return Ok(CustomerLookup::Invalid(ValidationError::invalid_customer_id(
                    customer_id,
                )));
            }
        };

        Ok(match self.store.find_by_id(id).await? {
            Some(record) => CustomerLookup::Found(record),
            None => CustomerLookup::Absent,
        })
    }
}

impl std::fmt::Debug for CustomerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomerService").finish_non_exhaustive()
    }
}
