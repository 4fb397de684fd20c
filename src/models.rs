//! Data model for the widget: the wire format returned by the analytics
//! API and the immutable domain snapshot the rest of the crate consumes.
//!
//! The API returns top pages ranked by current visitors, each with its
//! top referrers:
//!
//! ```json
//! {
//!   "pages": [
//!     {
//!       "title": "Home",
//!       "stats": {
//!         "people": 42,
//!         "toprefs": [ { "domain": "google.com", "visitors": 10 } ]
//!       }
//!     }
//!   ]
//! }
//! ```
//!
//! A snapshot is replaced wholesale on each successful fetch and never
//! partially mutated.

use serde::Deserialize;

/// One complete, immutable fetch result.
///
/// Page order is the API's own rank order and is index-stable: a
/// [`crate::view_state::Selection`] refers to a position in this
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Ranked pages, most visited first.
    pub pages: Vec<PageStat>,
}

impl Snapshot {
    /// Number of ranked pages in this snapshot.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Look up a page by rank position.
    pub fn page(&self, index: usize) -> Option<&PageStat> {
        self.pages.get(index)
    }
}

/// Stats for one ranked page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStat {
    pub title: String,
    pub visitor_count: u64,
    /// Top referrers, in the API's own ranking.
    pub referrers: Vec<ReferrerStat>,
}

/// Visitor count for one referrer domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferrerStat {
    pub domain: String,
    pub visitor_count: u64,
}

// Wire-format types. Field names match the API response; these exist
// only to be deserialized and immediately projected into the domain
// types above.

#[derive(Debug, Deserialize)]
struct WireResponse {
    pages: Vec<WirePage>,
}

#[derive(Debug, Deserialize)]
struct WirePage {
    title: String,
    stats: WireStats,
}

#[derive(Debug, Deserialize)]
struct WireStats {
    people: u64,
    /// Absent for pages with no referrer data; treated as empty.
    #[serde(default)]
    toprefs: Vec<WireReferrer>,
}

#[derive(Debug, Deserialize)]
struct WireReferrer {
    domain: String,
    visitors: u64,
}

/// Parse a raw response body into a [`Snapshot`].
///
/// Any structural deviation (missing required field, non-numeric or
/// negative count) is an error. A missing `toprefs` list is tolerated
/// as an empty referrer list.
pub fn parse_snapshot(body: &[u8]) -> Result<Snapshot, serde_json::Error> {
    let wire: WireResponse = serde_json::from_slice(body)?;
    let pages = wire
        .pages
        .into_iter()
        .map(|page| PageStat {
            title: page.title,
            visitor_count: page.stats.people,
            referrers: page
                .stats
                .toprefs
                .into_iter()
                .map(|referrer| ReferrerStat {
                    domain: referrer.domain,
                    visitor_count: referrer.visitors,
                })
                .collect(),
        })
        .collect();
    Ok(Snapshot { pages })
}
