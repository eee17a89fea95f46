//! Window creation, async runtime and overlay setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use emberloom_webview::OverlayView;

use super::core::EmberloomApp;
use super::types::WINDOW_SIZE;

impl EmberloomApp {
    /// Create the window, the runtime for background probes and the status
    /// overlay. Returns `false` if the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title("Emberloom")
            .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_SIZE.0, WINDOW_SIZE.1));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };
        self.window = Some(window);

        match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("emberloom-net")
            .enable_all()
            .build()
        {
            Ok(rt) => self.tokio_runtime = Some(rt),
            Err(e) => {
                tracing::error!("Failed to start async runtime: {e}");
                return false;
            }
        }

        self.create_overlay();
        true
    }

    fn create_overlay(&mut self) {
        let (Some(window), Some(bounds)) = (self.window.as_ref(), self.view_bounds()) else {
            return;
        };
        match OverlayView::create(window.as_ref(), bounds) {
            Ok(overlay) => {
                overlay.show(&self.screen);
                self.overlay = Some(overlay);
            }
            Err(e) => tracing::error!(error = %e, "Failed to create status overlay"),
        }
    }
}
