//! Fixed-rate polling of the splash, the loader and the overlay.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::EmberloomApp;
use super::types::POLL_INTERVAL;

impl EmberloomApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_boot();
            self.poll_loader();
            self.poll_overlay_commands();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Create the game screen once the splash has run its course.
    fn poll_boot(&mut self) {
        if self.loader.is_some() {
            return;
        }
        self.boot.update();
        if self.boot.is_ready() {
            self.start_game();
        }
    }
}
