//! Child WebView placement.

use super::core::EmberloomApp;

/// A rect covering the whole client area, in physical pixels.
pub(super) fn full_window_bounds(width: u32, height: u32) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(0, 0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(width, height)),
    }
}

impl EmberloomApp {
    /// Bounds for a child view given the current window size.
    pub(super) fn view_bounds(&self) -> Option<wry::Rect> {
        let size = self.window.as_ref()?.inner_size();
        Some(full_window_bounds(size.width, size.height))
    }

    /// Resize both child views to fill the window.
    pub(super) fn sync_view_bounds(&self) {
        let Some(bounds) = self.view_bounds() else {
            return;
        };
        if let Some(view) = &self.game_view {
            if let Err(e) = view.set_bounds(bounds) {
                tracing::warn!(error = %e, "Failed to update game view bounds");
            }
        }
        if let Some(overlay) = &self.overlay {
            overlay.set_bounds(bounds);
        }
    }
}
