//! Message record and response payload types.

use serde::{Deserialize, Serialize};

/// A single stored message.
///
/// Serializes to the `{"id": ..., "message": ...}` shape returned by both
/// `POST /messages` and `GET /messages/{message_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Server-generated unique identifier (UUID v4), stable for the lifetime
    /// of the message.
    pub id: String,
    /// The message text, immutable after creation.
    pub message: String,
}

impl MessageRecord {
    /// Create a record from an id and message text.
    #[must_use]
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
        }
    }
}

/// Response payload for `GET /messages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageCountOutput {
    /// Total number of messages in the store.
    pub message_count: u64,
}
