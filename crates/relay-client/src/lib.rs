//! Client for the Relay message API.
//!
//! The client is deliberately narrow: three operations (`create`, `get`,
//! `count`) behind the [`MessageApi`] trait, so consumers depend on the API
//! contract rather than on any particular transport library. Configuration
//! is an immutable [`ClientConfig`] built once at startup from the same JSON
//! document the web deployment serves as `config.json`.

pub mod client;
pub mod config;

pub use client::{ClientError, HttpMessageClient, MessageApi};
pub use config::ClientConfig;
