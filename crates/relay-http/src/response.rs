//! Message API response serialization and error formatting.

use relay_model::MessageApiError;

use crate::body::MessageResponseBody;

/// Content type for message API responses.
pub const CONTENT_TYPE: &str = "application/json";

/// Serialize a message API error into a JSON response body.
///
/// Errors use the `{"message": ...}` shape:
///
/// ```json
/// { "message": "Message abc-123 not found." }
/// ```
#[must_use]
pub fn error_to_json(error: &MessageApiError) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({
        "message": error.message,
    }))
    .expect("JSON serialization of error cannot fail")
}

/// Convert a `MessageApiError` into a complete HTTP error response.
#[must_use]
pub fn error_to_response(
    error: &MessageApiError,
    request_id: &str,
) -> http::Response<MessageResponseBody> {
    let json = error_to_json(error);
    let body = MessageResponseBody::from_json(json);

    http::Response::builder()
        .status(error.status_code())
        .header("content-type", CONTENT_TYPE)
        .header("x-request-id", request_id)
        .body(body)
        .expect("valid error response")
}

/// Build a success response from JSON bytes.
#[must_use]
pub fn json_response(
    json: Vec<u8>,
    status: http::StatusCode,
    request_id: &str,
) -> http::Response<MessageResponseBody> {
    let body = MessageResponseBody::from_json(json);

    http::Response::builder()
        .status(status)
        .header("content-type", CONTENT_TYPE)
        .header("x-request-id", request_id)
        .body(body)
        .expect("valid JSON response")
}

/// Build the empty response answering a CORS preflight request.
#[must_use]
pub fn preflight_response(request_id: &str) -> http::Response<MessageResponseBody> {
    http::Response::builder()
        .status(http::StatusCode::NO_CONTENT)
        .header("x-request-id", request_id)
        .body(MessageResponseBody::empty())
        .expect("valid preflight response")
}
