//! Snapshot fetching: one GET against the configured endpoint, turned
//! into a typed [`Snapshot`] or a [`FetchError`].
//!
//! Status-code policy lives here, not in the transport: 200 is parsed,
//! and every other status (404 and 500 included) is a transport-kind
//! failure carrying the status code. No retry happens at this layer;
//! the next scheduled poll tick is the only retry.

use std::sync::Arc;

use crate::error::FetchError;
use crate::models::{self, Snapshot};
use crate::traits::HttpClient;

/// Fetches snapshots from one fixed endpoint over an injected
/// transport.
#[derive(Clone)]
pub struct SnapshotFetcher {
    endpoint: String,
    http: Arc<dyn HttpClient>,
}

impl SnapshotFetcher {
    /// Create a fetcher for the given absolute endpoint URL.
    pub fn new(endpoint: String, http: Arc<dyn HttpClient>) -> Self {
        Self { endpoint, http }
    }

    /// The endpoint URL this fetcher targets.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Perform one fetch-and-parse pass.
    ///
    /// All failure paths resolve to a [`FetchError`]; nothing panics
    /// past this boundary.
    pub async fn fetch_snapshot(&self) -> Result<Snapshot, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching snapshot");

        let response = self
            .http
            .get(&self.endpoint)
            .await
            .map_err(|err| FetchError::Transport {
                status: None,
                message: err.to_string(),
            })?;

        if !response.is_ok() {
            let message = response
                .text()
                .unwrap_or_else(|_| "<non-utf8 body>".to_string());
            return Err(FetchError::Transport {
                status: Some(response.status),
                message,
            });
        }

        let snapshot =
            models::parse_snapshot(&response.body).map_err(|err| FetchError::Parse {
                message: err.to_string(),
            })?;

        tracing::debug!(pages = snapshot.page_count(), "snapshot fetched");
        Ok(snapshot)
    }
}

impl std::fmt::Debug for SnapshotFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotFetcher")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
