//! List reconciliation: deriving what the two list regions should
//! display from the current view state.
//!
//! `render` is a pure function: identical input always produces an
//! identical [`RenderPlan`], and no I/O happens here. The plan is
//! decoupled from the mechanics of mutating the UI, which belong to the
//! [`crate::traits::RenderSink`] implementation.

use crate::view_state::ViewState;

/// One row of the top-pages list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageListItem {
    pub title: String,
    pub visitor_count: u64,
}

/// One row of the referrer drill-down list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferrerListItem {
    pub domain: String,
    pub visitor_count: u64,
}

/// Derived description of what the two list regions should display.
///
/// `referrer_list_items` and `referrer_header_title` are present
/// together (a valid selection exists and the detail view is open) or
/// absent together (the detail view is closed).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderPlan {
    pub page_list_items: Vec<PageListItem>,
    pub referrer_list_items: Option<Vec<ReferrerListItem>>,
    pub referrer_header_title: Option<String>,
}

/// Header shown above the referrer list for a page.
pub fn referrer_header(page_title: &str) -> String {
    format!("{} referrers", page_title)
}

/// Compute the render plan for the given view state.
///
/// The page list is always the snapshot's pages projected in original
/// order (empty when no snapshot has arrived yet). The referrer list
/// and its header are derived only when a valid selection exists; in
/// every other case the detail panel is treated as closed.
pub fn render(view: &ViewState) -> RenderPlan {
    let page_list_items = view
        .snapshot
        .as_ref()
        .map(|snapshot| {
            snapshot
                .pages
                .iter()
                .map(|page| PageListItem {
                    title: page.title.clone(),
                    visitor_count: page.visitor_count,
                })
                .collect()
        })
        .unwrap_or_default();

    let (referrer_list_items, referrer_header_title) = match view.selected_page() {
        Some(page) => {
            let items = page
                .referrers
                .iter()
                .map(|referrer| ReferrerListItem {
                    domain: referrer.domain.clone(),
                    visitor_count: referrer.visitor_count,
                })
                .collect();
            (Some(items), Some(referrer_header(&page.title)))
        }
        None => (None, None),
    };

    RenderPlan {
        page_list_items,
        referrer_list_items,
        referrer_header_title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PageStat, ReferrerStat, Snapshot};

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            pages: vec![
                PageStat {
                    title: "Home".to_string(),
                    visitor_count: 42,
                    referrers: vec![
                        ReferrerStat {
                            domain: "google.com".to_string(),
                            visitor_count: 10,
                        },
                        ReferrerStat {
                            domain: "bing.com".to_string(),
                            visitor_count: 3,
                        },
                    ],
                },
                PageStat {
                    title: "About".to_string(),
                    visitor_count: 7,
                    referrers: vec![ReferrerStat {
                        domain: "duckduckgo.com".to_string(),
                        visitor_count: 1,
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_empty_state_renders_empty_plan() {
        let plan = render(&ViewState::new());
        assert!(plan.page_list_items.is_empty());
        assert!(plan.referrer_list_items.is_none());
        assert!(plan.referrer_header_title.is_none());
    }

    #[test]
    fn test_page_list_matches_snapshot_length_and_order() {
        let mut view = ViewState::new();
        view.apply_snapshot(sample_snapshot());

        let plan = render(&view);
        assert_eq!(plan.page_list_items.len(), 2);
        assert_eq!(
            plan.page_list_items[0],
            PageListItem {
                title: "Home".to_string(),
                visitor_count: 42
            }
        );
        assert_eq!(
            plan.page_list_items[1],
            PageListItem {
                title: "About".to_string(),
                visitor_count: 7
            }
        );
        // No selection, so the detail region stays closed
        assert!(plan.referrer_list_items.is_none());
        assert!(plan.referrer_header_title.is_none());
    }

    #[test]
    fn test_selection_projects_referrers_in_order() {
        let mut view = ViewState::new();
        view.apply_snapshot(sample_snapshot());
        view.select(0).unwrap();

        let plan = render(&view);
        assert_eq!(plan.referrer_header_title.as_deref(), Some("Home referrers"));
        assert_eq!(
            plan.referrer_list_items.unwrap(),
            vec![
                ReferrerListItem {
                    domain: "google.com".to_string(),
                    visitor_count: 10
                },
                ReferrerListItem {
                    domain: "bing.com".to_string(),
                    visitor_count: 3
                },
            ]
        );
    }

    #[test]
    fn test_selection_of_second_page() {
        let mut view = ViewState::new();
        view.apply_snapshot(sample_snapshot());
        view.select(1).unwrap();

        let plan = render(&view);
        assert_eq!(
            plan.referrer_header_title.as_deref(),
            Some("About referrers")
        );
        assert_eq!(plan.referrer_list_items.unwrap().len(), 1);
    }

    #[test]
    fn test_selected_page_with_no_referrers_renders_empty_list() {
        let mut view = ViewState::new();
        view.apply_snapshot(Snapshot {
            pages: vec![PageStat {
                title: "Lonely".to_string(),
                visitor_count: 1,
                referrers: Vec::new(),
            }],
        });
        view.select(0).unwrap();

        let plan = render(&view);
        // Open detail view, but nothing to list
        assert_eq!(plan.referrer_list_items.unwrap().len(), 0);
        assert_eq!(
            plan.referrer_header_title.as_deref(),
            Some("Lonely referrers")
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut view = ViewState::new();
        view.apply_snapshot(sample_snapshot());
        view.select(0).unwrap();

        assert_eq!(render(&view), render(&view));
    }

    #[test]
    fn test_referrer_header_format() {
        assert_eq!(referrer_header("Home"), "Home referrers");
    }
}
