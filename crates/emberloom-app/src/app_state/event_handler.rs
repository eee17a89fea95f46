//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use emberloom_loader::LoadStatus;

use super::core::EmberloomApp;

impl ApplicationHandler for EmberloomApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.update_window_title();
        if self.boot.is_ready() {
            self.start_game();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_view_bounds();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

/// F5 or `r` retries a failed load.
pub(super) fn is_retry_key(key: &Key) -> bool {
    match key {
        Key::Named(NamedKey::F5) => true,
        Key::Character(c) => c.eq_ignore_ascii_case("r"),
        _ => false,
    }
}

impl EmberloomApp {
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key, state, ..
        } = event;
        if state != ElementState::Pressed {
            return;
        }

        if self.boot.skip_by_key() {
            tracing::debug!("Splash skipped");
            self.start_game();
            return;
        }

        if matches!(self.status, LoadStatus::Failure { .. }) && is_retry_key(&logical_key) {
            self.retry_load();
        }
    }
}
