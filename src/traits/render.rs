//! Render callout trait abstraction.
//!
//! The widget core never touches the UI directly. Every visible change
//! goes through this trait, which a host (DOM bridge, TUI, plain
//! console) implements. All callouts use replace-in-place semantics: the
//! previous content of a region is fully discarded and replaced by the
//! new one, so implementations never need to diff.

use crate::error::FetchError;
use crate::reconciler::{PageListItem, ReferrerListItem};

/// UI mutation entry points the core calls.
///
/// Callouts are synchronous and must not fail; rendering failures are the
/// implementation's own concern and must not propagate back into the
/// refresh cycle.
pub trait RenderSink: Send + Sync {
    /// Replace the top-pages list with `items`, in order.
    fn on_render_page_list(&self, items: &[PageListItem]);

    /// Replace the referrer list region with `items` under the given
    /// header (e.g. `"Home referrers"`).
    fn on_render_referrer_list(&self, header: &str, items: &[ReferrerListItem]);

    /// Clear the referrer list region; the detail view is closed.
    fn on_clear_referrer_list(&self);

    /// Show a fetch error. Called at most once per failed refresh cycle.
    /// Implementations must replace any indicator already shown rather
    /// than stacking a new one.
    fn on_error(&self, error: &FetchError);
}
