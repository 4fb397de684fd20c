//! Recording render sink for testing.
//!
//! Captures every render callout the widget core makes so tests can
//! assert on exactly what would have been displayed, in what order.

use std::sync::{Arc, Mutex};

use crate::error::{FetchError, FetchErrorKind};
use crate::reconciler::{PageListItem, ReferrerListItem};
use crate::traits::RenderSink;

/// One recorded render callout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    /// The page list was replaced with these items.
    PageList(Vec<PageListItem>),
    /// The referrer list was replaced under this header.
    ReferrerList {
        header: String,
        items: Vec<ReferrerListItem>,
    },
    /// The referrer list region was cleared.
    ClearReferrerList,
    /// An error indicator was shown.
    Error { kind: FetchErrorKind },
}

/// Render sink that records every callout for later assertion.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderSink {
    events: Arc<Mutex<Vec<RenderEvent>>>,
}

impl RecordingRenderSink {
    /// Create a new recording sink with no events.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, in callout order.
    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Clear all recorded events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Number of page-list renders recorded so far.
    pub fn page_list_render_count(&self) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| matches!(event, RenderEvent::PageList(_)))
            .count()
    }

    /// The most recent referrer-list render, if any.
    pub fn last_referrer_render(&self) -> Option<(String, Vec<ReferrerListItem>)> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|event| match event {
                RenderEvent::ReferrerList { header, items } => {
                    Some((header.clone(), items.clone()))
                }
                _ => None,
            })
    }
}

impl RenderSink for RecordingRenderSink {
    fn on_render_page_list(&self, items: &[PageListItem]) {
        self.events
            .lock()
            .unwrap()
            .push(RenderEvent::PageList(items.to_vec()));
    }

    fn on_render_referrer_list(&self, header: &str, items: &[ReferrerListItem]) {
        self.events.lock().unwrap().push(RenderEvent::ReferrerList {
            header: header.to_string(),
            items: items.to_vec(),
        });
    }

    fn on_clear_referrer_list(&self) {
        self.events.lock().unwrap().push(RenderEvent::ClearReferrerList);
    }

    fn on_error(&self, error: &FetchError) {
        self.events.lock().unwrap().push(RenderEvent::Error {
            kind: error.kind(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_callouts_in_order() {
        let sink = RecordingRenderSink::new();

        sink.on_render_page_list(&[PageListItem {
            title: "Home".to_string(),
            visitor_count: 42,
        }]);
        sink.on_render_referrer_list(
            "Home referrers",
            &[ReferrerListItem {
                domain: "google.com".to_string(),
                visitor_count: 10,
            }],
        );
        sink.on_clear_referrer_list();

        let events = sink.events();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], RenderEvent::PageList(_)));
        assert!(matches!(events[1], RenderEvent::ReferrerList { .. }));
        assert_eq!(events[2], RenderEvent::ClearReferrerList);
    }

    #[test]
    fn test_records_error_kind() {
        let sink = RecordingRenderSink::new();
        sink.on_error(&FetchError::Parse {
            message: "bad body".to_string(),
        });

        assert_eq!(
            sink.events(),
            vec![RenderEvent::Error {
                kind: FetchErrorKind::Parse
            }]
        );
    }

    #[test]
    fn test_page_list_render_count() {
        let sink = RecordingRenderSink::new();
        assert_eq!(sink.page_list_render_count(), 0);

        sink.on_render_page_list(&[]);
        sink.on_clear_referrer_list();
        sink.on_render_page_list(&[]);

        assert_eq!(sink.page_list_render_count(), 2);
    }

    #[test]
    fn test_last_referrer_render() {
        let sink = RecordingRenderSink::new();
        assert!(sink.last_referrer_render().is_none());

        sink.on_render_referrer_list("First referrers", &[]);
        sink.on_render_referrer_list(
            "Second referrers",
            &[ReferrerListItem {
                domain: "bing.com".to_string(),
                visitor_count: 3,
            }],
        );

        let (header, items) = sink.last_referrer_render().unwrap();
        assert_eq!(header, "Second referrers");
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_clear() {
        let sink = RecordingRenderSink::new();
        sink.on_render_page_list(&[]);
        sink.clear();
        assert!(sink.events().is_empty());
    }
}
