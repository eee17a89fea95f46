//! The game WebView and its [`WebHost`] implementation.

use std::rc::Rc;

use emberloom_common::HostError;
use emberloom_loader::{HostSink, LoadRequest, WebHost};
use tracing::{debug, info, warn};
use wry::WebView;

use crate::bridge::LoadBridge;

mod create;
pub mod handlers;

/// Handle to the game WebView.
///
/// Clones share the same view: one is attached to the loader as its host,
/// the shell keeps another to resize and show it.
#[derive(Clone)]
pub struct GameView {
    webview: Rc<WebView>,
    bridge: LoadBridge,
}

impl GameView {
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), HostError> {
        self.webview
            .set_bounds(bounds)
            .map_err(|e| HostError::Unavailable(e.to_string()))
    }

    /// Show or hide the view. Hidden views keep loading.
    pub fn set_visible(&self, visible: bool) -> Result<(), HostError> {
        self.webview
            .set_visible(visible)
            .map_err(|e| HostError::Unavailable(e.to_string()))
    }

    pub fn focus(&self) -> Result<(), HostError> {
        self.webview
            .focus()
            .map_err(|e| HostError::Unavailable(e.to_string()))
    }

    /// Remove cookies, caches and local storage of the view.
    pub fn clear_browsing_data(&self) -> Result<(), HostError> {
        info!("clearing web view browsing data");
        self.webview
            .clear_all_browsing_data()
            .map_err(|e| HostError::Unavailable(e.to_string()))
    }
}

impl WebHost for GameView {
    fn begin_load(&mut self, request: &LoadRequest, events: HostSink) -> Result<(), HostError> {
        debug!(url = %request.url, generation = events.generation(), "web view loading");
        self.bridge.begin(events, request.timeout);
        if let Err(e) = self.webview.load_url(request.url.as_str()) {
            self.bridge.disarm();
            return Err(HostError::Navigation(e.to_string()));
        }
        Ok(())
    }

    fn release(&mut self) {
        self.bridge.disarm();
        if let Err(e) = self.webview.load_url("about:blank") {
            warn!(error = %e, "failed to blank released web view");
        }
    }
}

impl std::fmt::Debug for GameView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameView")
            .field("bridge", &self.bridge)
            .finish_non_exhaustive()
    }
}
