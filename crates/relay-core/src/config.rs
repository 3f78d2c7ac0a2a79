//! Message service configuration.

use std::env;

/// Message service configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Bind address for the server.
    pub gateway_listen: String,
    /// Log level.
    pub log_level: String,
}

impl RelayConfig {
    /// Create configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            gateway_listen: env::var("GATEWAY_LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_owned()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_owned()),
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            gateway_listen: "0.0.0.0:8080".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_default_config() {
        let config = RelayConfig::default();
        assert_eq!(config.gateway_listen, "0.0.0.0:8080");
        assert_eq!(config.log_level, "info");
    }
}
