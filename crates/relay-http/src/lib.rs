//! HTTP transport layer for the Relay message API, providing:
//!
//! - **Router**: resolves method + path into a [`MessageOperation`]
//! - **Handler trait**: the boundary between HTTP and business logic
//! - **Service**: hyper `Service` implementation for the message API
//! - **Response helpers**: JSON success/error formatting with CORS headers
//!
//! [`MessageOperation`]: relay_model::MessageOperation
#![allow(missing_docs)]

pub mod body;
pub mod dispatch;
pub mod response;
pub mod router;
pub mod service;

pub use body::MessageResponseBody;
pub use dispatch::MessageHandler;
pub use service::MessageHttpService;
