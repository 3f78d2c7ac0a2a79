//! HTTP client for the message API.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use relay_model::{MessageCountOutput, MessageRecord};

use crate::config::{ClientConfig, DEFAULT_TIMEOUT};

/// Errors returned by the message API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Invalid or unreadable client configuration.
    #[error("{0}")]
    Config(String),
    /// The server answered with an error response.
    #[error("api error ({status}): {message}")]
    Api {
        /// HTTP status of the error response.
        status: u16,
        /// Server-provided error message.
        message: String,
    },
    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// The message API contract, seen from the consumer side.
///
/// Operations are independent, non-cancellable, and unordered relative to
/// one another; the client performs no retries.
#[async_trait]
pub trait MessageApi: Send + Sync {
    /// Create a message and return the stored record with its assigned id.
    async fn create(&self, text: &str) -> Result<MessageRecord, ClientError>;

    /// Fetch the message with the given id.
    async fn get(&self, message_id: &str) -> Result<MessageRecord, ClientError>;

    /// Fetch the total message count.
    async fn count(&self) -> Result<u64, ClientError>;
}

/// reqwest-backed implementation of [`MessageApi`].
#[derive(Debug, Clone)]
pub struct HttpMessageClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpMessageClient {
    /// Build a client from the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_endpoint.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl MessageApi for HttpMessageClient {
    async fn create(&self, text: &str) -> Result<MessageRecord, ClientError> {
        debug!(bytes = text.len(), "creating message");
        let resp = self
            .http
            .post(self.url("/messages"))
            .body(text.to_owned())
            .send()
            .await?;
        parse_response(resp).await
    }

    async fn get(&self, message_id: &str) -> Result<MessageRecord, ClientError> {
        debug!(%message_id, "fetching message");
        let resp = self
            .http
            .get(self.url(&format!("/messages/{message_id}")))
            .send()
            .await?;
        parse_response(resp).await
    }

    async fn count(&self) -> Result<u64, ClientError> {
        let resp = self.http.get(self.url("/messages")).send().await?;
        let output: MessageCountOutput = parse_response(resp).await?;
        Ok(output.message_count)
    }
}

/// Decode a success payload, or turn an error response into [`ClientError::Api`].
async fn parse_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json().await?);
    }

    // Error bodies are `{"message": ...}`; fall back to the raw body text.
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(ToOwned::to_owned))
        .unwrap_or(body);

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_from(status: u16, body: &str) -> reqwest::Response {
        http::Response::builder()
            .status(status)
            .body(body.to_owned())
            .unwrap()
            .into()
    }

    #[test]
    fn test_should_join_paths_against_base_url() {
        let client = HttpMessageClient::new(&ClientConfig::new("http://localhost:8080/")).unwrap();
        assert_eq!(client.url("/messages"), "http://localhost:8080/messages");
        assert_eq!(
            client.url("/messages/abc-123"),
            "http://localhost:8080/messages/abc-123"
        );
    }

    #[tokio::test]
    async fn test_should_decode_success_payload() {
        let resp = response_from(200, r#"{"id": "abc-123", "message": "hello"}"#);
        let record: MessageRecord = parse_response(resp).await.unwrap();
        assert_eq!(record.id, "abc-123");
        assert_eq!(record.message, "hello");
    }

    #[tokio::test]
    async fn test_should_surface_error_body_message() {
        let resp = response_from(404, r#"{"message": "Message abc not found."}"#);
        let err = parse_response::<MessageRecord>(resp).await.unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Message abc not found.");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_should_fall_back_to_raw_error_body() {
        let resp = response_from(503, "service unavailable");
        let err = parse_response::<MessageRecord>(resp).await.unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "service unavailable");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
