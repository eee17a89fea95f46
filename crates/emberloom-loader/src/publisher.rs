//! Current-value-plus-updates publication of [`LoadStatus`].

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::Stream;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::status::LoadStatus;

/// Holds the active status and fans every change out to subscribers.
#[derive(Debug)]
pub struct StatusPublisher {
    current: LoadStatus,
    subscribers: Vec<UnboundedSender<LoadStatus>>,
}

impl StatusPublisher {
    pub fn new(initial: LoadStatus) -> Self {
        Self {
            current: initial,
            subscribers: Vec::new(),
        }
    }

    pub fn current(&self) -> &LoadStatus {
        &self.current
    }

    /// Replace the current status. Returns `false` (and notifies nobody)
    /// when `next` is equivalent to the current status.
    pub fn publish(&mut self, next: LoadStatus) -> bool {
        if next == self.current {
            return false;
        }
        self.current = next;
        let current = &self.current;
        self.subscribers.retain(|tx| tx.send(current.clone()).is_ok());
        true
    }

    /// New stream whose first item is the current status.
    pub fn subscribe(&mut self) -> StatusStream {
        let (tx, rx) = mpsc::unbounded_channel();
        // The receiver is alive, so this cannot fail.
        let _ = tx.send(self.current.clone());
        self.subscribers.push(tx);
        StatusStream { rx }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// End every subscriber stream.
    pub fn close(&mut self) {
        self.subscribers.clear();
    }
}

/// Ordered status changes for one consumer, starting with the status that
/// was current at subscription time. Ends when the loader is torn down.
#[derive(Debug)]
pub struct StatusStream {
    rx: UnboundedReceiver<LoadStatus>,
}

impl StatusStream {
    /// Wait for the next status.
    pub async fn recv(&mut self) -> Option<LoadStatus> {
        self.rx.recv().await
    }

    /// Next queued status without waiting.
    pub fn try_recv(&mut self) -> Option<LoadStatus> {
        self.rx.try_recv().ok()
    }

    /// Drain everything queued and return the newest status, if any.
    pub fn latest(&mut self) -> Option<LoadStatus> {
        let mut last = None;
        while let Ok(status) = self.rx.try_recv() {
            last = Some(status);
        }
        last
    }

    /// Drain everything queued, in order.
    pub fn drain(&mut self) -> Vec<LoadStatus> {
        let mut out = Vec::new();
        while let Ok(status) = self.rx.try_recv() {
            out.push(status);
        }
        out
    }
}

impl Stream for StatusStream {
    type Item = LoadStatus;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}
