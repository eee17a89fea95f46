//! Game screen: the loader, its host and the status it publishes.

use tracing::{debug, error, info, warn};

use emberloom_loader::{LoadStatus, LoaderSession, StatusScreen, WebResourceLoader};
use emberloom_platform::ConnectivityMonitor;
use emberloom_webview::{GameView, OverlayCommand, OverlayView, WebViewConfig};

use super::core::EmberloomApp;

impl EmberloomApp {
    /// Build the loader and attach the game view. Runs once, when the
    /// splash completes.
    pub(super) fn start_game(&mut self) {
        if self.loader.is_some() {
            return;
        }
        let (Some(window), Some(bounds)) = (self.window.clone(), self.view_bounds()) else {
            return;
        };
        let Some(runtime) = self.tokio_runtime.as_ref().map(|rt| rt.handle().clone()) else {
            error!("No async runtime, cannot start the game view");
            return;
        };

        let session = LoaderSession::new(self.endpoint.clone())
            .with_load_timeout(self.config.endpoint.load_timeout());
        info!(session = %session.id().short(), url = %session.url(), "Starting game screen");

        let mut loader = WebResourceLoader::new(session);
        self.statuses = Some(loader.observe());
        self.start_connectivity(&loader);

        let config = WebViewConfig::from(&self.config.webview);
        let clear_data = self.config.webview.clear_data_on_launch;
        let mut created = None;
        let attached = loader.attach(|| {
            let view = GameView::create(window.as_ref(), bounds, &config, runtime)?;
            if clear_data {
                if let Err(e) = view.clear_browsing_data() {
                    warn!(error = %e, "Failed to clear browsing data");
                }
            }
            if let Err(e) = view.set_visible(false) {
                warn!(error = %e, "Failed to hide game view");
            }
            created = Some(view.clone());
            Ok(view)
        });
        if let Err(e) = attached {
            error!(error = %e, "Game view failed to start loading");
        }

        self.game_view = created;
        self.loader = Some(loader);
        self.poll_loader();
    }

    fn start_connectivity(&mut self, loader: &WebResourceLoader) {
        if !self.config.connectivity.enabled {
            debug!("Connectivity monitoring disabled");
            return;
        }
        let Some(rt) = &self.tokio_runtime else {
            return;
        };
        let monitor = match ConnectivityMonitor::from_config(&self.config.connectivity, &self.endpoint)
        {
            Ok(monitor) => monitor,
            Err(e) => {
                warn!(error = %e, "Connectivity monitoring unavailable");
                return;
            }
        };

        let handle = loader.handle();
        let _guard = rt.enter();
        self.monitor = Some(monitor.spawn(move |available| handle.set_connectivity(available)));
    }

    /// Apply queued loader events and render every resulting status.
    pub(super) fn poll_loader(&mut self) {
        let Some(loader) = self.loader.as_mut() else {
            return;
        };
        loader.pump();

        let updates = self
            .statuses
            .as_mut()
            .map(|stream| stream.drain())
            .unwrap_or_default();
        for status in updates {
            self.apply_status(status);
        }
    }

    /// Show `status`: journal errors, toggle the views, update the title.
    pub(super) fn apply_status(&mut self, status: LoadStatus) {
        let screen = StatusScreen::from(&status);
        debug!(status = %status, "Showing status");

        match status.to_shell_error() {
            Some(err) => self.journal.record(err, self.endpoint.as_str()),
            None if status.is_successful() => self.journal.clear_current(),
            None => {}
        }

        if let Some(view) = &self.game_view {
            if let Err(e) = view.set_visible(!screen.overlay_visible()) {
                warn!(error = %e, "Failed to toggle game view");
            }
            if !screen.overlay_visible() {
                if let Err(e) = view.focus() {
                    warn!(error = %e, "Failed to focus game view");
                }
            }
        }
        if let Some(overlay) = &self.overlay {
            overlay.show(&screen);
        }

        self.status = status;
        self.screen = screen;
        self.update_window_title();
    }

    pub(super) fn poll_overlay_commands(&mut self) {
        let commands = self
            .overlay
            .as_ref()
            .map(OverlayView::drain_commands)
            .unwrap_or_default();
        for command in commands {
            match command {
                OverlayCommand::Retry => self.retry_load(),
            }
        }
    }

    /// Re-issue the load after a failure.
    pub(super) fn retry_load(&mut self) {
        let Some(loader) = self.loader.as_mut() else {
            return;
        };
        match loader.retry() {
            Ok(()) => info!("Retrying game load"),
            Err(e) => debug!(error = %e, "Retry ignored"),
        }
        self.poll_loader();
    }
}
