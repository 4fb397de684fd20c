//! The poll loop: a single task that owns the view state and drives
//! fetch-and-render cycles.
//!
//! The loop multiplexes two inputs: a repeating interval timer (each
//! tick runs one fetch-validate-update-render cycle) and a command
//! channel carrying pick events and the stop signal. All `ViewState`
//! mutation happens inside this task, so the state needs no locking.
//!
//! Stopping flips a shared "running" guard before the task is
//! signalled. An HTTP response that resolves after the guard dropped is
//! discarded: it neither mutates the view state nor triggers a render
//! callout.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::fetcher::SnapshotFetcher;
use crate::reconciler;
use crate::traits::RenderSink;
use crate::view_state::ViewState;

/// Commands delivered to the poll loop from the outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollCommand {
    /// The user picked a page-list position; open its referrer view.
    Pick(usize),
    /// Close the referrer view.
    ClearPick,
    /// Shut the loop down.
    Stop,
}

/// Spawn the poll loop task.
///
/// The first cycle runs immediately; subsequent cycles run every
/// `poll_interval`. The task exits when it receives
/// [`PollCommand::Stop`], when the command channel closes, or when the
/// `running` guard turns false.
///
/// Returns a JoinHandle that can be awaited for a clean shutdown.
pub fn spawn_poll_loop(
    fetcher: SnapshotFetcher,
    sink: Arc<dyn RenderSink>,
    poll_interval: Duration,
    running: Arc<AtomicBool>,
    mut command_rx: mpsc::UnboundedReceiver<PollCommand>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!(
            interval_ms = poll_interval.as_millis() as u64,
            endpoint = fetcher.endpoint(),
            "poll loop started"
        );

        let mut view = ViewState::new();
        let mut interval = tokio::time::interval(poll_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if !running.load(Ordering::SeqCst) {
                        break;
                    }
                    run_cycle(&fetcher, sink.as_ref(), &mut view, &running).await;
                    if !running.load(Ordering::SeqCst) {
                        break;
                    }
                }
                command = command_rx.recv() => match command {
                    Some(PollCommand::Pick(index)) => handle_pick(&mut view, sink.as_ref(), index),
                    Some(PollCommand::ClearPick) => handle_clear_pick(&mut view, sink.as_ref()),
                    Some(PollCommand::Stop) | None => break,
                },
            }
        }

        tracing::debug!("poll loop stopped");
    })
}

/// Run one fetch-validate-update-render cycle.
///
/// On success the snapshot is applied and the page list re-rendered; a
/// selection that survived the new snapshot gets its referrer list
/// recomputed from the new data, and a selection the new snapshot
/// invalidated clears the detail region. On failure the error callout
/// fires once and the last-known-good state is preserved.
async fn run_cycle(
    fetcher: &SnapshotFetcher,
    sink: &dyn RenderSink,
    view: &mut ViewState,
    running: &AtomicBool,
) {
    let result = fetcher.fetch_snapshot().await;

    // The widget may have been stopped while the request was in
    // flight; a late response must not touch the view state.
    if !running.load(Ordering::SeqCst) {
        tracing::debug!("discarding fetch result: widget stopped");
        return;
    }

    match result {
        Ok(snapshot) => {
            let had_selection = view.selection.is_some();
            view.apply_snapshot(snapshot);

            let plan = reconciler::render(view);
            sink.on_render_page_list(&plan.page_list_items);

            match (&plan.referrer_header_title, &plan.referrer_list_items) {
                (Some(header), Some(items)) => {
                    // Re-open the detail view against the fresh data
                    sink.on_render_referrer_list(header, items);
                }
                _ if had_selection => {
                    // The selected page dropped out of the ranking
                    sink.on_clear_referrer_list();
                }
                _ => {}
            }
        }
        Err(error) => {
            tracing::warn!(code = error.error_code(), "fetch cycle failed: {}", error);
            sink.on_error(&error);
        }
    }
}

/// Handle a pick: select the page and render the detail region only.
///
/// The page list itself is unaffected by a selection change. Invalid
/// picks are logged and ignored.
fn handle_pick(view: &mut ViewState, sink: &dyn RenderSink, index: usize) {
    match view.select(index) {
        Ok(()) => {
            let plan = reconciler::render(view);
            if let (Some(header), Some(items)) =
                (&plan.referrer_header_title, &plan.referrer_list_items)
            {
                sink.on_render_referrer_list(header, items);
            }
        }
        Err(error) => {
            tracing::debug!("ignoring pick: {}", error);
        }
    }
}

/// Handle a clear-pick: close the detail view.
fn handle_clear_pick(view: &mut ViewState, sink: &dyn RenderSink) {
    if view.selection.is_some() {
        view.clear_selection();
        sink.on_clear_referrer_list();
    }
}
