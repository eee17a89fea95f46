use tokio::sync::mpsc::UnboundedSender;

use crate::events::LoaderEvent;

/// Cloneable, `Send` handle for feeding connectivity changes to a loader
/// that lives on another thread.
#[derive(Debug, Clone)]
pub struct LoaderHandle {
    tx: UnboundedSender<LoaderEvent>,
}

impl LoaderHandle {
    pub(super) fn new(tx: UnboundedSender<LoaderEvent>) -> Self {
        Self { tx }
    }

    /// Queue a reachability change. Returns `false` once the loader is gone.
    pub fn set_connectivity(&self, available: bool) -> bool {
        self.tx.send(LoaderEvent::Connectivity(available)).is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
