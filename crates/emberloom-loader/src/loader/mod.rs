//! The web resource loader.
//!
//! `WebResourceLoader` owns the [`LoadStatus`] of one session. Hosts and
//! connectivity observers only enqueue [`LoaderEvent`]s; the owner applies
//! them on its own thread with [`WebResourceLoader::pump`] (once per frame)
//! or [`WebResourceLoader::process_next`]. Observers therefore never see a
//! status that is mid-update.

mod handle;
mod session;
mod transitions;

#[cfg(test)]
mod tests;

pub use handle::LoaderHandle;
pub use session::LoaderSession;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use crate::error::LoaderError;
use crate::events::LoaderEvent;
use crate::host::WebHost;
use crate::publisher::{StatusPublisher, StatusStream};
use crate::status::LoadStatus;

/// Tracks the load lifecycle of one embedded page.
pub struct WebResourceLoader {
    session: LoaderSession,
    host: Option<Box<dyn WebHost>>,
    /// Bumped on every load and on teardown; stale host events are dropped.
    generation: u64,
    /// Last progress fraction that made it past deduplication.
    last_fraction: Option<f64>,
    loads_issued: u64,
    publisher: StatusPublisher,
    events_tx: UnboundedSender<LoaderEvent>,
    events_rx: UnboundedReceiver<LoaderEvent>,
    torn_down: bool,
}

impl WebResourceLoader {
    pub fn new(session: LoaderSession) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        debug!(session = %session.id().short(), url = %session.url(), "loader created");
        Self {
            session,
            host: None,
            generation: 0,
            last_fraction: None,
            loads_issued: 0,
            publisher: StatusPublisher::new(LoadStatus::Standby),
            events_tx,
            events_rx,
            torn_down: false,
        }
    }

    /// Build a loader for an https endpoint string.
    pub fn from_url_str(raw: &str) -> Result<Self, LoaderError> {
        Ok(Self::new(LoaderSession::parse(raw)?))
    }

    pub fn session(&self) -> &LoaderSession {
        &self.session
    }

    pub fn status(&self) -> &LoadStatus {
        self.publisher.current()
    }

    pub fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    /// How many load requests have been issued to a host.
    pub fn loads_issued(&self) -> u64 {
        self.loads_issued
    }

    /// Current status followed by every later change.
    pub fn observe(&mut self) -> StatusStream {
        self.publisher.subscribe()
    }

    /// A sendable handle for reporting connectivity from other threads.
    pub fn handle(&self) -> LoaderHandle {
        LoaderHandle::new(self.events_tx.clone())
    }

    /// Apply every queued event. Returns how many were processed.
    pub fn pump(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
            processed += 1;
        }
        processed
    }

    /// Wait for one queued event and apply it. Returns `false` once the
    /// loader has been torn down.
    pub async fn process_next(&mut self) -> bool {
        match self.events_rx.recv().await {
            Some(event) => {
                self.handle_event(event);
                true
            }
            None => false,
        }
    }

    /// Release the host and end every stream and sink.
    pub fn teardown(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        if let Some(mut host) = self.host.take() {
            host.release();
        }
        self.generation += 1;
        self.events_rx.close();
        self.publisher.close();
        info!(session = %self.session.id().short(), "loader torn down");
    }
}

impl Drop for WebResourceLoader {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for WebResourceLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebResourceLoader")
            .field("session", &self.session)
            .field("status", self.status())
            .field("attached", &self.is_attached())
            .field("generation", &self.generation)
            .finish()
    }
}
