//! Forwards WebView callbacks to the loader for the load in flight.
//!
//! wry invokes its handlers on the UI thread while the timeout timer runs as
//! a task on the shell's tokio runtime, so the state lives behind an
//! `Arc<Mutex<_>>` shared by every clone.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use emberloom_loader::HostSink;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tracing::{debug, trace, warn};

use crate::events::PageLoadState;
use crate::ipc::IpcMessage;

/// Failure reason reported when a load outlives its timeout.
pub const TIMEOUT_MESSAGE: &str = "The request timed out.";

#[derive(Debug, Default)]
struct BridgeState {
    sink: Option<HostSink>,
    /// Bumped per load so a timer from an older load does nothing.
    load_seq: u64,
    /// Highest fraction forwarded for the current load.
    reported: f64,
    completed: bool,
    timer: Option<AbortHandle>,
}

impl BridgeState {
    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadBridge {
    state: Arc<Mutex<BridgeState>>,
    runtime: Handle,
}

impl LoadBridge {
    /// Timeout timers run on `runtime`.
    pub fn new(runtime: Handle) -> Self {
        Self {
            state: Arc::default(),
            runtime,
        }
    }

    /// Route signals to `sink` and start the timeout for a new load,
    /// cancelling the previous load's timer.
    pub fn begin(&self, sink: HostSink, timeout: Duration) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };
        state.cancel_timer();
        state.load_seq += 1;
        state.sink = Some(sink);
        state.reported = 0.0;
        state.completed = false;
        let seq = state.load_seq;

        let bridge = self.clone();
        let timer = self.runtime.spawn(async move {
            tokio::time::sleep(timeout).await;
            bridge.expire(seq);
        });
        state.timer = Some(timer.abort_handle());
    }

    /// Stop forwarding and cancel the pending timeout.
    pub fn disarm(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.cancel_timer();
            state.sink = None;
            state.load_seq += 1;
        }
    }

    /// Whether a timeout is still pending for the current load.
    pub fn timer_pending(&self) -> bool {
        self.state
            .lock()
            .map(|state| state.timer.is_some())
            .unwrap_or(false)
    }

    pub fn is_armed(&self) -> bool {
        self.state
            .lock()
            .map(|state| state.sink.is_some())
            .unwrap_or(false)
    }

    /// Handle a wry page-load callback.
    pub fn page_load(&self, state: PageLoadState, url: &str) {
        // The blank document a view starts with is not the requested page.
        if url.starts_with("about:") {
            trace!(?state, url, "ignoring blank page load");
            return;
        }
        self.report(state.progress());
    }

    /// Handle a raw IPC body posted by the page.
    pub fn ipc_message(&self, body: &str) {
        let Some(message) = IpcMessage::from_json(body) else {
            warn!(body_len = body.len(), "IPC message rejected: invalid JSON");
            return;
        };
        match message.load_progress() {
            Some(fraction) => self.report(fraction),
            None => debug!(kind = %message.kind, "ignoring IPC message"),
        }
    }

    /// Forward `fraction` if it advances the current load.
    pub fn report(&self, fraction: f64) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };
        if state.completed || fraction <= state.reported {
            return;
        }
        state.reported = fraction;
        if fraction >= 1.0 {
            state.completed = true;
            state.cancel_timer();
        }
        if let Some(sink) = &state.sink {
            sink.progress(fraction);
        }
    }

    /// Report a navigation failure and stop forwarding for this load.
    pub fn fail(&self, message: impl Into<String>) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };
        state.completed = true;
        state.cancel_timer();
        if let Some(sink) = state.sink.take() {
            sink.navigation_failed(message);
        }
    }

    fn expire(&self, seq: u64) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };
        if state.load_seq != seq || state.completed {
            return;
        }
        state.completed = true;
        state.timer = None;
        if let Some(sink) = state.sink.take() {
            warn!(generation = sink.generation(), "page load timed out");
            sink.navigation_failed(TIMEOUT_MESSAGE);
        }
    }
}
