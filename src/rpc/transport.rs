//! HTTP transport for JSON-RPC bodies

use reqwest::header::CONTENT_TYPE;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Default time allowed to establish a connection
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default time allowed for a whole round trip
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Any failure before a response body is in hand
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Cannot build HTTP client: {0}")]
    Client(String),
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Node returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// A single POST of a JSON body. Implementations make exactly one attempt.
pub trait Transport: Send + Sync {
    fn post(
        &self,
        url: &str,
        body: String,
    ) -> impl Future<Output = Result<String, TransportError>> + Send;
}

/// `reqwest` backed transport with pooled connections
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the default timeouts
    ///
    /// # Errors
    /// Fails if a TLS backend cannot be initialized.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeouts(DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeouts(connect: Duration, request: Duration) -> Result<Self, TransportError> {
        let client = reqwest::ClientBuilder::new()
            .connect_timeout(connect)
            .timeout(request)
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn post(&self, url: &str, body: String) -> Result<String, TransportError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}
