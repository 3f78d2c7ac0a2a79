//! Client configuration.
//!
//! Loaded once at startup from a JSON document with at least an
//! `apiEndpoint` field (the shape the web deployment serves as
//! `config.json`) and passed by reference to every consumer. A trailing `/`
//! on the endpoint is stripped so path joining stays consistent.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::ClientError;

/// Default request timeout. The service is expected to answer well within
/// this; something is wrong if a request takes longer than a few seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

fn default_stage() -> String {
    "dev".to_owned()
}

/// Immutable client configuration, constructed once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Base URL of the message API.
    pub api_endpoint: String,
    /// Deployment stage name.
    #[serde(default = "default_stage")]
    pub stage: String,
}

impl ClientConfig {
    /// Create a configuration for the given endpoint, using the default stage.
    #[must_use]
    pub fn new(api_endpoint: impl Into<String>) -> Self {
        Self {
            api_endpoint: api_endpoint.into(),
            stage: default_stage(),
        }
        .normalized()
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json_slice(data: &[u8]) -> Result<Self, ClientError> {
        let config: Self = serde_json::from_slice(data)
            .map_err(|e| ClientError::Config(format!("invalid client configuration: {e}")))?;
        Ok(config.normalized())
    }

    /// Load a configuration from a JSON file on disk.
    pub fn load(path: &std::path::Path) -> Result<Self, ClientError> {
        let data = std::fs::read(path).map_err(|e| {
            ClientError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_slice(&data)
    }

    /// Strip a trailing `/` from the endpoint.
    fn normalized(mut self) -> Self {
        while self.api_endpoint.ends_with('/') {
            self.api_endpoint.pop();
        }
        self
    }
}
