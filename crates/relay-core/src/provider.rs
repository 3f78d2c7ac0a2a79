//! Message service provider: the business logic behind the API contract.
//!
//! The provider is stateless per request. Each operation touches at most one
//! record, and concurrent requests share nothing but the store itself.

use std::fmt;
use std::sync::Arc;

use tracing::info;

use relay_model::{MessageApiError, MessageCountOutput, MessageRecord};

use crate::error::store_error_to_api;
use crate::storage::{MemoryMessageStore, MessageStore};

/// The Relay message service.
pub struct RelayMessages {
    store: Arc<dyn MessageStore>,
}

impl fmt::Debug for RelayMessages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayMessages").finish_non_exhaustive()
    }
}

impl Default for RelayMessages {
    fn default() -> Self {
        Self::new()
    }
}

impl RelayMessages {
    /// Create a service over a fresh in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryMessageStore::new()))
    }

    /// Create a service over an explicit store implementation.
    #[must_use]
    pub fn with_store(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    /// Create a message from the raw request body.
    ///
    /// Generates a fresh UUID v4 id, persists `{id, message}`, and returns
    /// the stored record. Creation is never idempotent: two calls with the
    /// same body produce two records with distinct ids.
    ///
    /// The body must be UTF-8. A surrounding pair of double quotes is
    /// stripped so JSON-string-encoded bodies round-trip cleanly, and an
    /// empty body is accepted as a zero-length message.
    pub fn handle_create_message(&self, body: &[u8]) -> Result<MessageRecord, MessageApiError> {
        let text = std::str::from_utf8(body)
            .map_err(|_| MessageApiError::malformed("message body must be valid UTF-8"))?;
        let text = trim_surrounding_quotes(text);

        let record = MessageRecord::new(uuid::Uuid::new_v4().to_string(), text);
        self.store
            .put(record.clone())
            .map_err(store_error_to_api)?;

        info!(id = %record.id, bytes = record.message.len(), "created message");
        Ok(record)
    }

    /// Look up a message by id.
    pub fn handle_get_message(&self, message_id: &str) -> Result<MessageRecord, MessageApiError> {
        self.store
            .get(message_id)
            .map_err(store_error_to_api)?
            .ok_or_else(|| MessageApiError::not_found(message_id))
    }

    /// Count all messages in the store.
    pub fn handle_get_message_count(&self) -> Result<MessageCountOutput, MessageApiError> {
        let message_count = self.store.count().map_err(store_error_to_api)?;
        Ok(MessageCountOutput { message_count })
    }
}

/// Strip one pair of surrounding double quotes, if present.
fn trim_surrounding_quotes(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}
