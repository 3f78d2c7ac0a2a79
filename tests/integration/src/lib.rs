//! Integration tests for the Relay server.
//!
//! These tests require a running server at `localhost:8080`.
//! They are marked `#[ignore]` so they don't run during normal `cargo test`.
//!
//! Run them with:
//! ```text
//! cargo test -p relay-integration -- --ignored
//! ```

use std::sync::Once;

use relay_client::{ClientConfig, HttpMessageClient};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Endpoint URL for the server.
#[must_use]
pub fn endpoint_url() -> String {
    std::env::var("RELAY_ENDPOINT_URL").unwrap_or_else(|_| "http://localhost:8080".to_owned())
}

/// Create a configured message API client pointing at the local server.
#[must_use]
pub fn message_client() -> HttpMessageClient {
    init_tracing();
    HttpMessageClient::new(&ClientConfig::new(endpoint_url()))
        .expect("failed to build message client")
}

/// Create a plain HTTP client for raw wire-level assertions.
#[must_use]
pub fn raw_client() -> reqwest::Client {
    init_tracing();
    reqwest::Client::new()
}

/// Generate a unique message text for a test.
#[must_use]
pub fn test_message_text(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

mod test_health;
mod test_messages;
