//! The contract a native web view must satisfy to be driven by the loader.

use std::time::Duration;

use emberloom_common::HostError;
use tokio::sync::mpsc::UnboundedSender;
use url::Url;

use crate::events::LoaderEvent;

/// Load timeout used when a session does not specify one.
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(12);

/// A navigation request handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub url: Url,
    /// Enforced by the host; expiry is reported back as a navigation failure.
    pub timeout: Duration,
}

/// A view that can load a URL and report progress and failures.
///
/// Implementations may call the [`HostSink`] from any thread. The loader
/// applies the events on its own thread when it pumps its queue.
pub trait WebHost {
    /// Start loading `request`, reporting through `events` until the next
    /// `begin_load` or `release`.
    fn begin_load(&mut self, request: &LoadRequest, events: HostSink) -> Result<(), HostError>;

    /// Stop reporting and drop any resources tied to the current load.
    fn release(&mut self) {}
}

impl<T: WebHost + ?Sized> WebHost for Box<T> {
    fn begin_load(&mut self, request: &LoadRequest, events: HostSink) -> Result<(), HostError> {
        (**self).begin_load(request, events)
    }

    fn release(&mut self) {
        (**self).release()
    }
}

/// Sending half given to a host for one load.
///
/// Events are tagged with the load generation; once the loader starts a new
/// load or is torn down, events from older sinks are discarded.
#[derive(Debug, Clone)]
pub struct HostSink {
    tx: UnboundedSender<LoaderEvent>,
    generation: u64,
}

impl HostSink {
    pub(crate) fn new(tx: UnboundedSender<LoaderEvent>, generation: u64) -> Self {
        Self { tx, generation }
    }

    /// Report raw page-load progress. Returns `false` once the loader is gone.
    pub fn progress(&self, fraction: f64) -> bool {
        self.tx
            .send(LoaderEvent::Progress {
                generation: self.generation,
                fraction,
            })
            .is_ok()
    }

    /// Report a failed navigation. Returns `false` once the loader is gone.
    pub fn navigation_failed(&self, message: impl Into<String>) -> bool {
        self.tx
            .send(LoaderEvent::NavigationFailed {
                generation: self.generation,
                message: message.into(),
            })
            .is_ok()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the owning loader has been torn down.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
