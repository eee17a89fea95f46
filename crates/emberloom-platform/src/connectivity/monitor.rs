use std::sync::Arc;
use std::time::Duration;

use emberloom_common::PlatformError;
use emberloom_config::schema::ConnectivityConfig;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};
use url::Url;

use super::probe::{ReachabilityProbe, TcpProbe};

/// Probes reachability and publishes changes on a watch channel.
pub struct ConnectivityMonitor {
    probe: Arc<dyn ReachabilityProbe>,
    interval: Duration,
    state: watch::Sender<bool>,
}

impl ConnectivityMonitor {
    /// Starts out connected; the first failed probe flips it.
    pub fn new(probe: impl ReachabilityProbe + 'static, interval: Duration) -> Self {
        let (state, _) = watch::channel(true);
        Self {
            probe: Arc::new(probe),
            interval,
            state,
        }
    }

    /// TCP monitor for `endpoint`, or for `probe_target` when configured.
    pub fn from_config(config: &ConnectivityConfig, endpoint: &Url) -> Result<Self, PlatformError> {
        let probe = match &config.probe_target {
            Some(target) => TcpProbe::new(target.clone(), config.probe_timeout()),
            None => TcpProbe::for_endpoint(endpoint, config.probe_timeout())?,
        };
        info!(
            target = probe.target(),
            interval_secs = config.probe_interval_secs,
            "connectivity monitor configured"
        );
        Ok(Self::new(probe, config.probe_interval()))
    }

    pub fn is_connected(&self) -> bool {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.state.subscribe()
    }

    /// Run one probe. Returns the new reachability if it changed.
    pub async fn poll_once(&self) -> Option<bool> {
        let reachable = match self.probe.probe().await {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "reachability probe failed");
                false
            }
        };

        let changed = self.state.send_if_modified(|current| {
            if *current == reachable {
                return false;
            }
            *current = reachable;
            true
        });

        if changed {
            info!(connected = reachable, "connectivity changed");
            Some(reachable)
        } else {
            None
        }
    }

    /// Probe on the configured interval from a tokio task, calling
    /// `on_change` for every change. The loop ends when the handle is
    /// stopped or dropped, or when `on_change` returns `false`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(self, mut on_change: F) -> MonitorHandle
    where
        F: FnMut(bool) -> bool + Send + 'static,
    {
        let state = self.subscribe();
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if let Some(connected) = self.poll_once().await {
                    if !on_change(connected) {
                        debug!("connectivity listener gone, stopping monitor");
                        break;
                    }
                }
            }
        });
        MonitorHandle { task, state }
    }
}

/// Owns a running monitor task. Dropping it stops the task.
#[derive(Debug)]
pub struct MonitorHandle {
    task: JoinHandle<()>,
    state: watch::Receiver<bool>,
}

impl MonitorHandle {
    pub fn is_connected(&self) -> bool {
        *self.state.borrow()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for MonitorHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
