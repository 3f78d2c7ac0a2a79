//! Message handler implementation bridging HTTP to business logic.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;

use relay_http::body::MessageResponseBody;
use relay_http::dispatch::MessageHandler;
use relay_http::response::json_response;
use relay_model::{MessageApiError, MessageOperation};

use crate::provider::RelayMessages;

/// Handler that bridges the HTTP layer to the message service.
#[derive(Debug)]
pub struct RelayMessageHandler {
    provider: Arc<RelayMessages>,
}

impl RelayMessageHandler {
    /// Create a new handler wrapping a provider.
    #[must_use]
    pub fn new(provider: Arc<RelayMessages>) -> Self {
        Self { provider }
    }
}

impl MessageHandler for RelayMessageHandler {
    fn handle_operation(
        &self,
        op: MessageOperation,
        body: Bytes,
    ) -> Pin<
        Box<
            dyn Future<Output = Result<http::Response<MessageResponseBody>, MessageApiError>>
                + Send,
        >,
    > {
        let provider = Arc::clone(&self.provider);
        Box::pin(async move { dispatch(provider.as_ref(), &op, &body) })
    }
}

/// Dispatch a message API operation to the appropriate provider method.
fn dispatch(
    provider: &RelayMessages,
    op: &MessageOperation,
    body: &[u8],
) -> Result<http::Response<MessageResponseBody>, MessageApiError> {
    // Generate a request ID for responses.
    let request_id = uuid::Uuid::new_v4().to_string();

    match op {
        MessageOperation::CreateMessage => {
            let output = provider.handle_create_message(body)?;
            serialize(&output, http::StatusCode::CREATED, &request_id)
        }
        MessageOperation::GetMessage { message_id } => {
            let output = provider.handle_get_message(message_id)?;
            serialize(&output, http::StatusCode::OK, &request_id)
        }
        MessageOperation::GetMessageCount => {
            let output = provider.handle_get_message_count()?;
            serialize(&output, http::StatusCode::OK, &request_id)
        }
    }
}

/// Serialize an output type into a JSON HTTP response.
fn serialize<T: serde::Serialize>(
    output: &T,
    status: http::StatusCode,
    request_id: &str,
) -> Result<http::Response<MessageResponseBody>, MessageApiError> {
    let json = serde_json::to_vec(output)
        .map_err(|e| MessageApiError::internal_error(format!("Failed to serialize response: {e}")))?;
    Ok(json_response(json, status, request_id))
}
