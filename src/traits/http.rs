//! HTTP client trait abstraction.
//!
//! Provides a trait-based abstraction for the single HTTP operation the
//! widget performs (GET), enabling dependency injection and mocking in
//! tests.

use async_trait::async_trait;
use bytes::Bytes;

/// HTTP response wrapper.
///
/// Carries only what the widget consumes: the status code and the raw
/// body. Status-code policy (which codes count as success) is decided by
/// the caller, not here.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Bytes,
}

impl HttpResponse {
    /// Create a new response.
    pub fn new(status: u16, body: Bytes) -> Self {
        Self { status, body }
    }

    /// Check if the response carries status 200.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Get the response body as a string.
    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }

    /// Parse the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level errors.
///
/// These cover failures below the HTTP status layer: the request never
/// completed. A completed response with a non-success status is not an
/// `HttpError`; callers classify those themselves.
#[derive(Debug, Clone)]
pub enum HttpError {
    /// Connection failed (refused, reset, DNS failure)
    ConnectionFailed(String),
    /// Request timed out
    Timeout(String),
    /// Other transport error
    Other(String),
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            HttpError::Timeout(msg) => write!(f, "Request timeout: {}", msg),
            HttpError::Other(msg) => write!(f, "HTTP error: {}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

/// Trait for the outbound HTTP capability.
///
/// One invocation performs one outbound network call. No retry and no
/// timeout enforcement happen at this layer; both are policy decisions
/// that belong to the caller.
///
/// # Example
///
/// ```ignore
/// use pagepulse::traits::{HttpClient, HttpError};
///
/// async fn fetch_body<C: HttpClient>(client: &C, url: &str) -> Result<String, HttpError> {
///     let response = client.get(url).await?;
///     response.text().map_err(|e| HttpError::Other(e.to_string()))
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request against a fully-formed absolute URL.
    async fn get(&self, url: &str) -> Result<HttpResponse, HttpError>;
}
