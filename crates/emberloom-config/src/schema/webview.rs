//! Embedded web view configuration types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSettings {
    /// Let the window background show through until the page paints.
    pub transparent: bool,
    pub devtools: bool,
    /// Play media inline without a user gesture.
    pub autoplay: bool,
    pub back_forward_gestures: bool,
    pub clipboard: bool,
    pub user_agent: Option<String>,
    /// Wipe caches, cookies and local storage before the first load.
    pub clear_data_on_launch: bool,
}

impl Default for WebViewSettings {
    fn default() -> Self {
        Self {
            transparent: true,
            devtools: cfg!(debug_assertions),
            autoplay: true,
            back_forward_gestures: true,
            clipboard: true,
            user_agent: None,
            clear_data_on_launch: false,
        }
    }
}
