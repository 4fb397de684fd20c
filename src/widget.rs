//! The widget facade: construction, lifecycle, and the selection
//! surface.
//!
//! A `Widget` wires a validated [`WidgetConfig`] to an injected
//! transport and render sink, and owns the poll loop's lifecycle.
//! Configuration problems surface at [`WidgetConfig`] construction, so
//! building a widget itself cannot fail.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::WidgetConfig;
use crate::fetcher::SnapshotFetcher;
use crate::poller::{spawn_poll_loop, PollCommand};
use crate::traits::{HttpClient, RenderSink};

/// A running (or stopped) analytics widget instance.
pub struct Widget {
    config: WidgetConfig,
    http: Arc<dyn HttpClient>,
    sink: Arc<dyn RenderSink>,
    running: Arc<AtomicBool>,
    command_tx: Option<mpsc::UnboundedSender<PollCommand>>,
    task: Option<JoinHandle<()>>,
}

impl Widget {
    /// Create a widget from a validated configuration and its two
    /// collaborators. The widget starts idle; call [`Self::start`] to
    /// begin polling.
    pub fn new(
        config: WidgetConfig,
        http: Arc<dyn HttpClient>,
        sink: Arc<dyn RenderSink>,
    ) -> Self {
        Self {
            config,
            http,
            sink,
            running: Arc::new(AtomicBool::new(false)),
            command_tx: None,
            task: None,
        }
    }

    /// The configuration this widget was built with.
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Whether the poll loop is currently running.
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Start polling: one immediate fetch-and-render cycle, then one
    /// every configured interval.
    ///
    /// Calling `start` while already running is a no-op; the interval
    /// is not restarted.
    pub fn start(&mut self) {
        if self.task.is_some() {
            tracing::debug!("start ignored: widget already running");
            return;
        }

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        // A fresh guard per start: a restart must never revive the
        // previous task's discarded in-flight result.
        let running = Arc::new(AtomicBool::new(true));
        self.running = Arc::clone(&running);

        let fetcher = SnapshotFetcher::new(self.config.endpoint_url(), Arc::clone(&self.http));
        let task = spawn_poll_loop(
            fetcher,
            Arc::clone(&self.sink),
            self.config.interval,
            running,
            command_rx,
        );

        self.command_tx = Some(command_tx);
        self.task = Some(task);
    }

    /// Stop polling.
    ///
    /// No view-state mutation and no render callout can happen after
    /// this returns: the running guard drops before the loop is
    /// signalled, so even a fetch still in flight resolves into a
    /// discard. The in-flight request itself is not cancelled.
    ///
    /// Calling `stop` while idle is a no-op. A stopped widget can be
    /// started again; it begins from an empty view state.
    pub fn stop(&mut self) {
        if self.task.is_none() {
            return;
        }

        self.running.store(false, Ordering::SeqCst);
        if let Some(command_tx) = self.command_tx.take() {
            let _ = command_tx.send(PollCommand::Stop);
        }
        // The loop exits on the stop signal; the handle is detached
        // rather than awaited so stop() never blocks on an in-flight
        // request.
        let _ = self.task.take();

        tracing::info!("widget stopped");
    }

    /// Forward a user pick of a rendered page-list position.
    ///
    /// Out-of-range picks are ignored by the loop; picks on a stopped
    /// widget are dropped.
    pub fn pick(&self, page_index: usize) {
        match &self.command_tx {
            Some(command_tx) => {
                if command_tx.send(PollCommand::Pick(page_index)).is_err() {
                    tracing::debug!("pick dropped: poll loop gone");
                }
            }
            None => tracing::debug!("pick dropped: widget not running"),
        }
    }

    /// Close the referrer detail view.
    pub fn clear_pick(&self) {
        if let Some(command_tx) = &self.command_tx {
            let _ = command_tx.send(PollCommand::ClearPick);
        }
    }
}

impl Drop for Widget {
    fn drop(&mut self) {
        self.stop();
    }
}
