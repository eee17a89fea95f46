use emberloom_config::schema::WebViewSettings;

/// Builder options for the game WebView.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebViewConfig {
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools.
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    pub clipboard: bool,
    /// Play media without a user gesture.
    pub autoplay: bool,
    /// Swipe navigation on platforms that support it.
    pub back_forward_gestures: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self::from(&WebViewSettings::default())
    }
}

impl From<&WebViewSettings> for WebViewConfig {
    fn from(settings: &WebViewSettings) -> Self {
        Self {
            transparent: settings.transparent,
            devtools: settings.devtools,
            user_agent: settings
                .user_agent
                .as_ref()
                .map(|ua| ua.trim().to_string())
                .filter(|ua| !ua.is_empty()),
            clipboard: settings.clipboard,
            autoplay: settings.autoplay,
            back_forward_gestures: settings.back_forward_gestures,
        }
    }
}
