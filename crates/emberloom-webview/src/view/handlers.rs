use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::bridge::LoadBridge;
use crate::events::PageLoadState;

/// Navigation is limited to secure origins and the blank document.
pub fn is_navigation_allowed(url: &str) -> bool {
    url.starts_with("https://") || url == "about:blank"
}

pub(super) fn attach_ipc_handler(builder: WebViewBuilder<'_>, bridge: LoadBridge) -> WebViewBuilder<'_> {
    builder.with_ipc_handler(move |request| {
        bridge.ipc_message(request.body());
    })
}

pub(super) fn attach_page_load_handler(
    builder: WebViewBuilder<'_>,
    bridge: LoadBridge,
) -> WebViewBuilder<'_> {
    builder.with_on_page_load_handler(move |event, url| {
        let state = PageLoadState::from(event);
        debug!(?state, url = %url, "page load");
        bridge.page_load(state, &url);
    })
}

pub(super) fn attach_navigation_handler(builder: WebViewBuilder<'_>) -> WebViewBuilder<'_> {
    builder.with_navigation_handler(move |url| {
        if !is_navigation_allowed(&url) {
            warn!(url = %url, "navigation blocked: insecure URL");
            return false;
        }
        true
    })
}
