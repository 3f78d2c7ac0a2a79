//! Message store contract and the in-memory implementation.
//!
//! The store is a durable key-value collection keyed by message id. The
//! contract is a trait so the backing store is swappable: the shipped
//! implementation keeps records in a [`DashMap`], and deployments backed by
//! a managed database implement the same three operations.
//!
//! Consistency contract: after a successful [`MessageStore::put`], a
//! [`MessageStore::get`] for the same id observes the record. No cross-key
//! guarantee is made. [`MessageStore::count`] is a scan: the store keeps no
//! running counter, so callers must not assume O(1) cost.

use dashmap::DashMap;
use thiserror::Error;
use tracing::debug;

use relay_model::MessageRecord;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend did not acknowledge the operation. Transient; the caller
    /// may resubmit the request.
    #[error("message store unavailable: {reason}")]
    Unavailable {
        /// Backend-provided failure description.
        reason: String,
    },
}

impl StoreError {
    /// Create an `Unavailable` error.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

/// Access contract for the message store.
pub trait MessageStore: Send + Sync + 'static {
    /// Insert one record keyed by its id.
    ///
    /// Ids are unique across the store; the service never reuses one, so an
    /// insert never observes an existing record under the same key.
    fn put(&self, record: MessageRecord) -> Result<(), StoreError>;

    /// Point lookup by id. `Ok(None)` means no record exists.
    fn get(&self, id: &str) -> Result<Option<MessageRecord>, StoreError>;

    /// Count all records. Implemented as a full scan.
    fn count(&self) -> Result<u64, StoreError>;
}

/// In-memory message store backed by a concurrent hash map.
#[derive(Debug, Default)]
pub struct MemoryMessageStore {
    records: DashMap<String, MessageRecord>,
}

impl MemoryMessageStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }
}

impl MessageStore for MemoryMessageStore {
    fn put(&self, record: MessageRecord) -> Result<(), StoreError> {
        debug!(id = %record.id, "storing message");
        self.records.insert(record.id.clone(), record);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<MessageRecord>, StoreError> {
        Ok(self.records.get(id).map(|r| r.value().clone()))
    }

    fn count(&self) -> Result<u64, StoreError> {
        Ok(u64::try_from(self.records.iter().count()).unwrap_or(u64::MAX))
    }
}
