//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses or errors without network access. Responses can be keyed
//! by URL or queued in sequence; sequenced responses make multi-cycle
//! poll tests deterministic (each refresh consumes the next response).

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{HttpClient, HttpError, HttpResponse};

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a completed response.
    Success(HttpResponse),
    /// Return a transport error.
    Error(HttpError),
}

/// Mock HTTP client for testing.
///
/// # Example
///
/// ```ignore
/// use pagepulse::adapters::mock::{MockHttpClient, MockResponse};
/// use pagepulse::traits::{HttpClient, HttpResponse};
/// use bytes::Bytes;
///
/// let client = MockHttpClient::new();
/// client.set_response(
///     "http://api.example.com/data",
///     MockResponse::Success(HttpResponse::new(200, Bytes::from("{}"))),
/// );
///
/// let response = client.get("http://api.example.com/data").await?;
/// assert_eq!(response.status, 200);
/// assert_eq!(client.request_urls(), vec!["http://api.example.com/data"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Responses consumed in order, ahead of any URL match.
    queued: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Configured responses by URL (exact match, then prefix match).
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when nothing else matches.
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded request URLs for verification.
    requests: Arc<Mutex<Vec<String>>>,
    /// Artificial latency applied before each response resolves.
    delay: Arc<Mutex<Option<Duration>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response to be consumed by the next request, ahead of
    /// any URL-keyed responses. Queued responses are consumed in FIFO
    /// order.
    pub fn push_response(&self, response: MockResponse) {
        self.queued.lock().unwrap().push_back(response);
    }

    /// Set a response for a specific URL.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
    }

    /// Set a default response for requests without other matches.
    pub fn set_default_response(&self, response: MockResponse) {
        *self.default_response.lock().unwrap() = Some(response);
    }

    /// Delay each response by the given duration, to simulate a slow
    /// network or keep a fetch in flight while the test acts.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    /// Get all recorded request URLs, in order.
    pub fn request_urls(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests made so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn next_response(&self, url: &str) -> Option<MockResponse> {
        if let Some(queued) = self.queued.lock().unwrap().pop_front() {
            return Some(queued);
        }

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }
        for (pattern, response) in responses.iter() {
            if url.starts_with(pattern) {
                return Some(response.clone());
            }
        }

        self.default_response.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(url.to_string());

        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match self.next_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!(
                "No mock response for URL: {}",
                url
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[tokio::test]
    async fn test_get_with_url_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://example.com/test",
            MockResponse::Success(HttpResponse::new(200, Bytes::from("Hello"))),
        );

        let response = client.get("http://example.com/test").await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, Bytes::from("Hello"));

        assert_eq!(client.request_urls(), vec!["http://example.com/test"]);
    }

    #[tokio::test]
    async fn test_get_with_error() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://example.com/down",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );

        let result = client.get("http://example.com/down").await;
        assert!(matches!(result, Err(HttpError::ConnectionFailed(_))));
    }

    #[tokio::test]
    async fn test_queued_responses_consumed_in_order() {
        let client = MockHttpClient::new();
        client.push_response(MockResponse::Success(HttpResponse::new(
            200,
            Bytes::from("first"),
        )));
        client.push_response(MockResponse::Success(HttpResponse::new(
            200,
            Bytes::from("second"),
        )));

        let first = client.get("http://example.com").await.unwrap();
        let second = client.get("http://example.com").await.unwrap();
        assert_eq!(first.body, Bytes::from("first"));
        assert_eq!(second.body, Bytes::from("second"));
    }

    #[tokio::test]
    async fn test_queued_responses_take_priority_over_url_match() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://example.com",
            MockResponse::Success(HttpResponse::new(200, Bytes::from("keyed"))),
        );
        client.push_response(MockResponse::Success(HttpResponse::new(
            200,
            Bytes::from("queued"),
        )));

        let first = client.get("http://example.com").await.unwrap();
        assert_eq!(first.body, Bytes::from("queued"));

        // Queue drained, keyed response takes over
        let second = client.get("http://example.com").await.unwrap();
        assert_eq!(second.body, Bytes::from("keyed"));
    }

    #[tokio::test]
    async fn test_prefix_match() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://example.com/api",
            MockResponse::Success(HttpResponse::new(200, Bytes::from("API response"))),
        );

        let response = client
            .get("http://example.com/api/live/toppages/v3?apikey=k")
            .await
            .unwrap();
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_default_response() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(HttpResponse::new(
            404,
            Bytes::from("Not Found"),
        )));

        let response = client.get("http://example.com/anything").await.unwrap();
        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn test_no_response_configured() {
        let client = MockHttpClient::new();
        let result = client.get("http://example.com/missing").await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_request_recording() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(HttpResponse::new(200, Bytes::new())));

        client.get("http://example.com/a").await.unwrap();
        client.get("http://example.com/b").await.unwrap();

        assert_eq!(client.request_count(), 2);
        assert_eq!(
            client.request_urls(),
            vec!["http://example.com/a", "http://example.com/b"]
        );

        client.clear_requests();
        assert_eq!(client.request_count(), 0);
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(HttpResponse::new(200, Bytes::new())));

        let cloned = client.clone();
        cloned.get("http://example.com").await.unwrap();

        // Both handles see the same recorded requests
        assert_eq!(client.request_count(), 1);
    }
}
