//! Concrete implementations of the capability traits.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - production HTTP transport using reqwest
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - configurable HTTP responses
//! - [`mock::RecordingRenderSink`] - records every render callout

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, RecordingRenderSink};
pub use reqwest_http::ReqwestHttpClient;
