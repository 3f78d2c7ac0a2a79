//! Message handler trait and operation dispatch.

use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;

use relay_model::{MessageApiError, MessageOperation};

use crate::body::MessageResponseBody;

/// Trait the message business logic provider must implement.
///
/// The handler receives the routed operation and the raw request body bytes,
/// and returns a complete HTTP response. This trait is the boundary between
/// the transport layer and the business logic layer.
pub trait MessageHandler: Send + Sync + 'static {
    /// Handle a message API operation and produce an HTTP response.
    fn handle_operation(
        &self,
        op: MessageOperation,
        body: Bytes,
    ) -> Pin<
        Box<
            dyn Future<Output = Result<http::Response<MessageResponseBody>, MessageApiError>>
                + Send,
        >,
    >;
}

/// Dispatch a message API operation to the handler.
pub async fn dispatch_operation<H: MessageHandler>(
    handler: &H,
    op: MessageOperation,
    body: Bytes,
) -> Result<http::Response<MessageResponseBody>, MessageApiError> {
    tracing::debug!(operation = %op, "dispatching message operation");
    handler.handle_operation(op, body).await
}
