use std::rc::Rc;

use emberloom_common::HostError;
use tokio::runtime::Handle;
use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::bridge::LoadBridge;
use crate::config::WebViewConfig;
use crate::ipc::IPC_INIT_SCRIPT;

use super::handlers;
use super::GameView;

impl GameView {
    /// Create the WebView as a child of `window`, positioned at `bounds`.
    ///
    /// The view starts blank; nothing is requested until the loader calls
    /// `begin_load`. Load timeouts are timed on `runtime`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        bounds: wry::Rect,
        config: &WebViewConfig,
        runtime: Handle,
    ) -> Result<Self, HostError> {
        let bridge = LoadBridge::new(runtime);

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_back_forward_navigation_gestures(config.back_forward_gestures)
            .with_initialization_script(IPC_INIT_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = handlers::attach_ipc_handler(builder, bridge.clone());
        builder = handlers::attach_page_load_handler(builder, bridge.clone());
        builder = handlers::attach_navigation_handler(builder);

        let webview = builder
            .build_as_child(window)
            .map_err(|e| HostError::Creation(e.to_string()))?;

        debug!(?config, "game web view created");

        Ok(Self {
            webview: Rc::new(webview),
            bridge,
        })
    }
}
