//! Graceful shutdown: stop probing, tear down the loader, drop the views.

use tracing::{info, warn};

use super::core::EmberloomApp;
use super::types::RUNTIME_SHUTDOWN_TIMEOUT;

impl EmberloomApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Stop the connectivity monitor (no more loader events)
    /// 2. Tear down the loader (releases the game view, ends status streams)
    /// 3. Destroy the views
    /// 4. Persist the error journal, if anything went wrong this run
    /// 5. Shut down the tokio runtime
    pub(super) fn shutdown(&mut self) {
        info!("Initiating graceful shutdown");

        if let Some(monitor) = self.monitor.take() {
            monitor.stop();
        }

        if let Some(loader) = self.loader.take() {
            loader.teardown();
        }
        self.statuses = None;

        self.game_view = None;
        self.overlay = None;

        self.persist_error_report();

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(RUNTIME_SHUTDOWN_TIMEOUT);
        }

        self.should_exit = true;
        info!("Graceful shutdown complete");
    }

    fn persist_error_report(&mut self) {
        if self.journal.is_empty() {
            return;
        }
        let dir = match emberloom_platform::log_dir() {
            Ok(dir) => dir,
            Err(e) => {
                warn!(error = %e, "No log directory for the error report");
                return;
            }
        };
        match emberloom_platform::write_error_report(&dir, &self.journal.report()) {
            Some(path) => info!(path = %path.display(), "Error report written"),
            None => warn!("Failed to write error report"),
        }
        self.journal.clear();
    }
}
