//! Message API request router.
//!
//! The API exposes three routes:
//!
//! ```text
//! GET  /messages               -> GetMessageCount
//! POST /messages               -> CreateMessage
//! GET  /messages/{message_id}  -> GetMessage
//! ```
//!
//! Routing works on method + path segments. An empty `{message_id}` segment
//! (a trailing slash) is a malformed request: the path parameter is required
//! by the route, so its absence is the caller's error, not a "not found".

use relay_model::MessageApiError;
use relay_model::MessageOperation;

/// Resolve a message API operation from the request method and path.
pub fn resolve_operation(
    method: &http::Method,
    path: &str,
) -> Result<MessageOperation, MessageApiError> {
    let mut segments = path.trim_start_matches('/').splitn(2, '/');

    let root = segments.next().unwrap_or_default();
    if root != "messages" {
        return Err(MessageApiError::route_not_found(path));
    }

    match segments.next() {
        None => match *method {
            http::Method::GET => Ok(MessageOperation::GetMessageCount),
            http::Method::POST => Ok(MessageOperation::CreateMessage),
            _ => Err(MessageApiError::method_not_allowed(method, path)),
        },
        Some(rest) => {
            // A second slash would make this a deeper, unknown route.
            if rest.contains('/') {
                return Err(MessageApiError::route_not_found(path));
            }
            if *method != http::Method::GET {
                return Err(MessageApiError::method_not_allowed(method, path));
            }
            if rest.is_empty() {
                return Err(MessageApiError::malformed(
                    "message_id path parameter is required",
                ));
            }
            Ok(MessageOperation::GetMessage {
                message_id: rest.to_owned(),
            })
        }
    }
}
