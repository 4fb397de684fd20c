//! Widget configuration and endpoint assembly.
//!
//! All fields are supplied at construction; there are no defaults for
//! the required ones, and a missing field is a construction-time
//! [`ConfigError`]. The API host itself defaults to the production
//! analytics host and is overridable so tests can point the widget at a
//! local server.

use std::time::Duration;

use crate::error::ConfigError;

/// Production analytics API host.
pub const DEFAULT_API_HOST: &str = "api.chartbeat.com";

/// Inbound configuration for one widget instance.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Site whose pages are being ranked (the `host` query parameter).
    pub host: String,
    /// API key (the `apikey` query parameter).
    pub api_key: String,
    /// API version segment, e.g. `"v3"`.
    pub version: String,
    /// Endpoint path, e.g. `"live/toppages/"`.
    pub path: String,
    /// Poll interval; must be greater than zero.
    pub interval: Duration,
    api_host: String,
}

impl WidgetConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when any required string
    /// field is empty and [`ConfigError::ZeroInterval`] when the
    /// interval is zero.
    pub fn new(
        host: impl Into<String>,
        api_key: impl Into<String>,
        version: impl Into<String>,
        path: impl Into<String>,
        interval: Duration,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            host: host.into(),
            api_key: api_key.into(),
            version: version.into(),
            path: path.into(),
            interval,
            api_host: DEFAULT_API_HOST.to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Override the API host (host or host:port, no scheme), for
    /// pointing the widget at a local test server.
    pub fn with_api_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = api_host.into();
        self
    }

    /// The single absolute URL each refresh cycle fetches.
    ///
    /// Assembled as `http://<api_host>/<path><version>?apikey=..&host=..`
    /// with percent-encoded query values.
    pub fn endpoint_url(&self) -> String {
        format!(
            "http://{}/{}{}?apikey={}&host={}",
            self.api_host,
            self.path,
            self.version,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(&self.host),
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("host", &self.host),
            ("api_key", &self.api_key),
            ("version", &self.version),
            ("path", &self.path),
        ] {
            if value.is_empty() {
                return Err(ConfigError::MissingField { field });
            }
        }
        if self.interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }
}
