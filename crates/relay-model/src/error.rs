//! Message API error model.
//!
//! Errors are returned to clients as JSON `{"message": ...}` bodies; the
//! code determines the HTTP status. The taxonomy keeps "malformed request"
//! (the caller's fault, reject before touching the store) distinct from
//! "not found" (well-formed id, no record) and "store unavailable"
//! (transient backend failure, retryable by the caller).

use std::fmt;

/// Error codes for the message API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum MessageApiErrorCode {
    /// Missing or invalid path/body parameter.
    #[default]
    MalformedRequest,
    /// No message with the requested id.
    NotFound,
    /// The request path matches no route.
    RouteNotFound,
    /// The route exists but not for this method.
    MethodNotAllowed,
    /// The message store did not acknowledge the operation.
    StoreUnavailable,
    /// Response serialization or other server-side failure.
    InternalError,
}

impl MessageApiErrorCode {
    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedRequest => "MalformedRequest",
            Self::NotFound => "NotFound",
            Self::RouteNotFound => "RouteNotFound",
            Self::MethodNotAllowed => "MethodNotAllowed",
            Self::StoreUnavailable => "StoreUnavailable",
            Self::InternalError => "InternalError",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> http::StatusCode {
        match self {
            Self::MalformedRequest => http::StatusCode::BAD_REQUEST,
            Self::NotFound | Self::RouteNotFound => http::StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => http::StatusCode::METHOD_NOT_ALLOWED,
            Self::StoreUnavailable => http::StatusCode::SERVICE_UNAVAILABLE,
            Self::InternalError => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for MessageApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error response from the message API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageApiError {
    /// The error code, which determines the HTTP status.
    pub code: MessageApiErrorCode,
    /// Human-readable message returned to the caller.
    pub message: String,
}

impl MessageApiError {
    /// Create an error with an explicit code and message.
    #[must_use]
    pub fn with_message(code: MessageApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Malformed request (400).
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::with_message(MessageApiErrorCode::MalformedRequest, message)
    }

    /// Message not found (404).
    #[must_use]
    pub fn not_found(message_id: &str) -> Self {
        Self::with_message(
            MessageApiErrorCode::NotFound,
            format!("Message {message_id} not found."),
        )
    }

    /// Unknown route (404).
    #[must_use]
    pub fn route_not_found(path: &str) -> Self {
        Self::with_message(
            MessageApiErrorCode::RouteNotFound,
            format!("No route matches {path}"),
        )
    }

    /// Known route, unsupported method (405).
    #[must_use]
    pub fn method_not_allowed(method: &http::Method, path: &str) -> Self {
        Self::with_message(
            MessageApiErrorCode::MethodNotAllowed,
            format!("{method} is not supported on {path}"),
        )
    }

    /// Store unavailable (503).
    #[must_use]
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::with_message(MessageApiErrorCode::StoreUnavailable, message)
    }

    /// Internal error (500).
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::with_message(MessageApiErrorCode::InternalError, message)
    }

    /// The HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> http::StatusCode {
        self.code.status_code()
    }
}

impl fmt::Display for MessageApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for MessageApiError {}
