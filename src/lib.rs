//! Pagepulse - the data-refresh-and-render core of a ranked-pages
//! analytics widget.
//!
//! The widget polls an analytics API on a fixed interval, validates each
//! response into an immutable [`models::Snapshot`], and drives two linked
//! list views through a [`traits::RenderSink`]: the top-pages list and a
//! drill-down referrer list for the currently selected page. The HTTP
//! transport is abstracted behind [`traits::HttpClient`] so the network
//! can be mocked in tests.

pub mod adapters;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod poller;
pub mod reconciler;
pub mod traits;
pub mod view_state;
pub mod widget;
