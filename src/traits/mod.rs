//! Trait abstractions for dependency injection and testability.
//!
//! The widget core treats its two external collaborators as capabilities:
//!
//! - [`HttpClient`] - the transport primitive ("fetch a URL, get a
//!   response or an error")
//! - [`RenderSink`] - the UI mutation entry points ("render this list of
//!   items", "show this error")
//!
//! Production code injects [`crate::adapters::ReqwestHttpClient`] and a
//! real UI sink; tests inject the mocks from [`crate::adapters::mock`].

pub mod http;
pub mod render;

pub use http::{HttpClient, HttpError, HttpResponse};
pub use render::RenderSink;
