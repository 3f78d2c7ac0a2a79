//! Relay message service business logic.
#![allow(missing_docs, clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod handler;
pub mod provider;
pub mod storage;
