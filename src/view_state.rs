//! Selection-aware view state.
//!
//! `ViewState` is the one shared mutable resource in the widget. It is
//! owned by the poll task and mutated only by fetch completions and by
//! pick commands, so no locking is needed. It holds no rendering logic;
//! deriving what the lists should display is [`crate::reconciler`]'s
//! job.

use crate::error::SelectionError;
use crate::models::{PageStat, Snapshot};

/// The user's currently chosen page, referenced by position in the
/// latest snapshot.
///
/// A selection is only meaningful against the snapshot it was validated
/// for; [`ViewState::apply_snapshot`] re-validates it against each new
/// snapshot and clears it (never clamps it) when the page dropped out
/// of the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub page_index: usize,
}

/// Mutable state for one running widget instance.
#[derive(Debug, Default)]
pub struct ViewState {
    /// Latest successfully fetched snapshot, if any.
    pub snapshot: Option<Snapshot>,
    /// Current selection, if the detail view is open.
    pub selection: Option<Selection>,
    /// Whether the referrer detail view is open.
    pub detail_open: bool,
}

impl ViewState {
    /// Create an empty view state: no snapshot, no selection, detail
    /// view closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot wholesale.
    ///
    /// If the current selection is out of range for the new snapshot,
    /// it is cleared and the detail view closes.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        if let Some(selection) = self.selection {
            if selection.page_index >= snapshot.page_count() {
                self.selection = None;
                self.detail_open = false;
            }
        }
        self.snapshot = Some(snapshot);
    }

    /// Select a page by its position in the current snapshot and open
    /// the detail view.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] without mutating anything when no
    /// snapshot is present or the index is out of range.
    pub fn select(&mut self, page_index: usize) -> Result<(), SelectionError> {
        let len = self
            .snapshot
            .as_ref()
            .map(Snapshot::page_count)
            .ok_or(SelectionError::NoSnapshot)?;
        if page_index >= len {
            return Err(SelectionError::OutOfRange {
                index: page_index,
                len,
            });
        }
        self.selection = Some(Selection { page_index });
        self.detail_open = true;
        Ok(())
    }

    /// Clear the selection and close the detail view.
    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.detail_open = false;
    }

    /// The currently selected page's stats, when a valid selection
    /// exists.
    pub fn selected_page(&self) -> Option<&PageStat> {
        let selection = self.selection?;
        self.snapshot.as_ref()?.page(selection.page_index)
    }
}
