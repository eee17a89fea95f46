//! Status transitions driven by attach, connectivity, retry and host events.

use emberloom_common::HostError;
use tracing::{debug, info, trace, warn};

use crate::error::LoaderError;
use crate::events::LoaderEvent;
use crate::host::{HostSink, WebHost};
use crate::status::{LoadStatus, PROGRESS_EPSILON};

use super::WebResourceLoader;

impl WebResourceLoader {
    /// Obtain a host from `factory` and start loading the session URL.
    ///
    /// Attaching again replaces the previous host: it is released, its
    /// pending events are dropped, and a single load is issued on the new
    /// host. While the status is `NoConnection` the host is stored but the
    /// load waits for connectivity to return.
    pub fn attach<F, H>(&mut self, factory: F) -> Result<(), LoaderError>
    where
        F: FnOnce() -> Result<H, HostError>,
        H: WebHost + 'static,
    {
        let host = match factory() {
            Ok(host) => host,
            Err(e) => {
                warn!(session = %self.session.id().short(), error = %e, "host factory failed");
                self.transition(LoadStatus::failure(e.to_string()));
                return Err(e.into());
            }
        };

        if let Some(mut previous) = self.host.take() {
            info!(session = %self.session.id().short(), "replacing attached host");
            previous.release();
            // Invalidate the previous host's sink even if no new load starts.
            self.generation += 1;
        }
        self.host = Some(Box::new(host));

        if matches!(self.status(), LoadStatus::NoConnection) {
            debug!(session = %self.session.id().short(), "attached while offline, deferring load");
            return Ok(());
        }
        self.initiate_load().map_err(LoaderError::from)
    }

    /// Apply a reachability change.
    ///
    /// Losing the network always yields `NoConnection` and abandons the load
    /// in flight, so its late progress or failure is dropped. Regaining it
    /// while `NoConnection` re-issues the load on the attached host.
    pub fn set_connectivity(&mut self, available: bool) {
        let offline = matches!(self.status(), LoadStatus::NoConnection);
        match (available, offline) {
            (false, true) => {}
            (false, false) => {
                self.generation += 1;
                if let Some(host) = self.host.as_mut() {
                    host.release();
                }
                self.transition(LoadStatus::NoConnection);
            }
            (true, true) => {
                if self.host.is_none() {
                    debug!(session = %self.session.id().short(), "connectivity restored with no host attached");
                    return;
                }
                if let Err(e) = self.initiate_load() {
                    warn!(session = %self.session.id().short(), error = %e, "reload after reconnect failed");
                }
            }
            _ => {}
        }
    }

    /// Re-issue the load after a navigation failure.
    pub fn retry(&mut self) -> Result<(), LoaderError> {
        if !matches!(self.status(), LoadStatus::Failure { .. }) {
            return Err(LoaderError::NotRetryable {
                status: self.status().to_string(),
            });
        }
        if self.host.is_none() {
            return Err(LoaderError::NotAttached);
        }
        self.initiate_load().map_err(LoaderError::from)
    }

    pub(super) fn handle_event(&mut self, event: LoaderEvent) {
        match event {
            LoaderEvent::Progress {
                generation,
                fraction,
            } => {
                if self.is_current(generation) {
                    self.on_progress(fraction);
                }
            }
            LoaderEvent::NavigationFailed {
                generation,
                message,
            } => {
                if self.is_current(generation) {
                    self.on_navigation_failed(message);
                }
            }
            LoaderEvent::Connectivity(available) => self.set_connectivity(available),
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        if generation != self.generation {
            trace!(generation, current = self.generation, "dropping stale host event");
            return false;
        }
        true
    }

    fn on_progress(&mut self, fraction: f64) {
        if fraction.is_nan() {
            warn!(session = %self.session.id().short(), "ignoring NaN progress");
            return;
        }
        if !matches!(self.status(), LoadStatus::Progressing { .. }) {
            trace!(fraction, status = self.status().kind(), "ignoring progress outside a load");
            return;
        }

        let fraction = fraction.max(0.0);
        // Reaching 1.0 always completes, however close the last fraction was.
        if let Some(last) = self.last_fraction.filter(|_| fraction < 1.0) {
            if (fraction - last).abs() < PROGRESS_EPSILON {
                return;
            }
        }
        self.last_fraction = Some(fraction);

        let next = if fraction >= 1.0 {
            LoadStatus::Finished
        } else {
            LoadStatus::progressing(fraction)
        };
        self.transition(next);
    }

    fn on_navigation_failed(&mut self, message: String) {
        warn!(session = %self.session.id().short(), reason = %message, "navigation failed");
        self.transition(LoadStatus::failure(message));
    }

    /// Start a new load generation on the attached host.
    fn initiate_load(&mut self) -> Result<(), HostError> {
        if self.host.is_none() {
            return Ok(());
        }

        self.generation += 1;
        self.last_fraction = None;
        self.loads_issued += 1;
        self.transition(LoadStatus::progressing(0.0));

        let request = self.session.request();
        let sink = HostSink::new(self.events_tx.clone(), self.generation);
        info!(
            session = %self.session.id().short(),
            url = %request.url,
            timeout_secs = request.timeout.as_secs(),
            generation = self.generation,
            "issuing load"
        );

        let result = match self.host.as_mut() {
            Some(host) => host.begin_load(&request, sink),
            None => Ok(()),
        };
        if let Err(e) = &result {
            self.transition(LoadStatus::failure(e.to_string()));
        }
        result
    }

    /// Publish `next` if it differs from the current status.
    fn transition(&mut self, next: LoadStatus) -> bool {
        let from = self.status().kind();
        let to = next.kind();
        let changed = self.publisher.publish(next);
        if changed {
            debug!(session = %self.session.id().short(), from, to, status = %self.status(), "status changed");
        }
        changed
    }
}
