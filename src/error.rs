//! Error types for the widget core.
//!
//! Three error families cover the failure surface:
//!
//! - [`FetchError`] - a refresh cycle failed (transport or parse).
//!   Reported once per cycle through the error callout and recovered
//!   locally; the widget keeps its last-known-good state.
//! - [`SelectionError`] - an out-of-range pick. Non-fatal, ignored by
//!   the UI.
//! - [`ConfigError`] - a missing or invalid construction field. Fatal,
//!   surfaced at construction time.

use std::fmt;

/// High-level classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The request never completed, or completed with a non-success
    /// HTTP status.
    Transport,
    /// The response body did not match the expected shape.
    Parse,
}

/// A failed refresh cycle.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Transport-level failure: connection error, timeout, or a
    /// completed response with a non-200 status.
    Transport {
        /// HTTP status code, when the response completed.
        status: Option<u16>,
        message: String,
    },
    /// Malformed or incomplete response body.
    Parse { message: String },
}

impl FetchError {
    /// Classify this error.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport { .. } => FetchErrorKind::Transport,
            FetchError::Parse { .. } => FetchErrorKind::Parse,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "E_FETCH_TRANSPORT",
            FetchError::Parse { .. } => "E_FETCH_PARSE",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Transport { status: Some(status), .. } => {
                format!("The analytics server returned an error (HTTP {}).", status)
            }
            FetchError::Transport { status: None, .. } => {
                "Unable to reach the analytics server. Please check your connection.".to_string()
            }
            FetchError::Parse { .. } => {
                "Received an unexpected response from the analytics server.".to_string()
            }
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport {
                status: Some(status),
                message,
            } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            FetchError::Transport {
                status: None,
                message,
            } => {
                write!(f, "Transport error: {}", message)
            }
            FetchError::Parse { message } => write!(f, "Parse error: {}", message),
        }
    }
}

impl std::error::Error for FetchError {}

/// An invalid pick against the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// No snapshot has been applied yet; there is nothing to select.
    NoSnapshot,
    /// The picked index is outside the current page list.
    OutOfRange { index: usize, len: usize },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::NoSnapshot => write!(f, "no snapshot to select from"),
            SelectionError::OutOfRange { index, len } => {
                write!(f, "page index {} out of range (page count {})", index, len)
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// A missing or invalid construction field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required field was empty.
    MissingField { field: &'static str },
    /// The poll interval must be greater than zero.
    ZeroInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingField { field } => {
                write!(f, "missing required configuration field '{}'", field)
            }
            ConfigError::ZeroInterval => {
                write!(f, "poll interval must be greater than zero")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
