//! Message API HTTP service implementing the hyper `Service` trait.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::BodyExt;
use hyper::body::Incoming;

use relay_model::MessageApiError;

use crate::body::MessageResponseBody;
use crate::dispatch::{MessageHandler, dispatch_operation};
use crate::response::{CONTENT_TYPE, error_to_response, preflight_response};
use crate::router::resolve_operation;

/// Hyper `Service` implementation for the message API.
///
/// Wraps a [`MessageHandler`] and routes incoming HTTP requests to the
/// appropriate message operation. Health probes and CORS preflight requests
/// are answered before routing.
#[derive(Debug)]
pub struct MessageHttpService<H: MessageHandler> {
    handler: Arc<H>,
}

impl<H: MessageHandler> MessageHttpService<H> {
    /// Create a new `MessageHttpService`.
    pub fn new(handler: Arc<H>) -> Self {
        Self { handler }
    }
}

impl<H: MessageHandler> Clone for MessageHttpService<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<H: MessageHandler> hyper::service::Service<http::Request<Incoming>>
    for MessageHttpService<H>
{
    type Response = http::Response<MessageResponseBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: http::Request<Incoming>) -> Self::Future {
        let handler = Arc::clone(&self.handler);
        let request_id = uuid::Uuid::new_v4().to_string();

        Box::pin(async move {
            let response = process_request(req, handler.as_ref(), &request_id).await;
            let response = add_common_headers(response, &request_id);
            Ok(response)
        })
    }
}

/// Process a single message API request through the full pipeline.
async fn process_request<H: MessageHandler>(
    req: http::Request<Incoming>,
    handler: &H,
    request_id: &str,
) -> http::Response<MessageResponseBody> {
    let (parts, incoming) = req.into_parts();
    let path = parts.uri.path().to_owned();

    // 1. Answer health probes before routing.
    if is_health_check(&parts.method, &path) {
        return health_check_response();
    }

    // 2. Answer CORS preflight requests before routing.
    if parts.method == http::Method::OPTIONS {
        return preflight_response(request_id);
    }

    // 3. Route: resolve the operation from method + path.
    let op = match resolve_operation(&parts.method, &path) {
        Ok(op) => op,
        Err(err) => return error_to_response(&err, request_id),
    };

    // 4. Collect body.
    let body = match collect_body(incoming).await {
        Ok(body) => body,
        Err(err) => return error_to_response(&err, request_id),
    };

    // 5. Dispatch to handler.
    match dispatch_operation(handler, op, body).await {
        Ok(response) => response,
        Err(err) => error_to_response(&err, request_id),
    }
}

/// Collect the incoming body into a single `Bytes` buffer.
async fn collect_body(incoming: Incoming) -> Result<Bytes, MessageApiError> {
    incoming
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .map_err(|e| MessageApiError::internal_error(format!("Failed to read request body: {e}")))
}

/// Check if the request is a health check probe.
fn is_health_check(method: &http::Method, path: &str) -> bool {
    *method == http::Method::GET && (path == "/_health" || path == "/health")
}

/// Produce the health check response.
fn health_check_response() -> http::Response<MessageResponseBody> {
    let body = r#"{"services":{"messages":"running"}}"#;
    http::Response::builder()
        .status(http::StatusCode::OK)
        .header("content-type", CONTENT_TYPE)
        .body(MessageResponseBody::from_bytes(body))
        .expect("static health response should be valid")
}

/// Add common response headers to every message API response.
///
/// The CORS set matches what the original deployment attached so a browser
/// page on another origin can call the API directly.
fn add_common_headers(
    mut response: http::Response<MessageResponseBody>,
    request_id: &str,
) -> http::Response<MessageResponseBody> {
    let headers = response.headers_mut();

    if let Ok(hv) = http::HeaderValue::from_str(request_id) {
        headers.entry("x-request-id").or_insert(hv);
    }

    headers.insert("server", http::HeaderValue::from_static("Relay"));

    // CORS headers.
    headers.insert(
        "access-control-allow-origin",
        http::HeaderValue::from_static("*"),
    );
    headers.insert(
        "access-control-allow-headers",
        http::HeaderValue::from_static("Content-Type"),
    );
    headers.insert(
        "access-control-allow-methods",
        http::HeaderValue::from_static("OPTIONS,POST,GET"),
    );

    response
}
