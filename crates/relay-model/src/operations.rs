//! Message API operation enum.

use std::fmt;

/// All operations exposed by the message API.
///
/// `GetMessage` carries the path parameter extracted by the router because
/// the id is part of the route, not the body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageOperation {
    /// Create a new message from the request body (`POST /messages`).
    CreateMessage,
    /// Count all messages (`GET /messages`).
    GetMessageCount,
    /// Fetch one message by id (`GET /messages/{message_id}`).
    GetMessage {
        /// The `message_id` path parameter.
        message_id: String,
    },
}

impl MessageOperation {
    /// Returns the operation name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateMessage => "CreateMessage",
            Self::GetMessageCount => "GetMessageCount",
            Self::GetMessage { .. } => "GetMessage",
        }
    }
}

impl fmt::Display for MessageOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
