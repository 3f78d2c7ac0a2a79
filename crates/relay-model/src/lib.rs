//! Wire types for the Relay message API.
//!
//! The message API is a small JSON-over-REST protocol, so the model is
//! hand-written: a record type, a count output, an operation enum, and the
//! error model with its HTTP status mapping.

pub mod error;
pub mod operations;
pub mod types;

pub use error::{MessageApiError, MessageApiErrorCode};
pub use operations::MessageOperation;
pub use types::{MessageCountOutput, MessageRecord};
