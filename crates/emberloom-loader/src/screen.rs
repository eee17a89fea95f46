//! Which screen the UI shows for a given status.

use crate::status::LoadStatus;

/// Opacity of the page behind the loading overlay.
pub const DIMMED_OPACITY: f64 = 0.3;

/// One of the five screens keyed by the [`LoadStatus`] variant.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusScreen {
    /// Nothing requested yet.
    Splash,
    /// Progress bar driven by `fraction`.
    Progress { fraction: f64 },
    /// The live page, no overlay.
    Live,
    /// Error text.
    Error { message: String },
    /// Offline message.
    Offline,
}

impl From<&LoadStatus> for StatusScreen {
    fn from(status: &LoadStatus) -> Self {
        match status {
            LoadStatus::Standby => Self::Splash,
            LoadStatus::Progressing { fraction } => Self::Progress {
                fraction: fraction.clamp(0.0, 1.0),
            },
            LoadStatus::Finished => Self::Live,
            LoadStatus::Failure { reason } => Self::Error {
                message: reason.clone(),
            },
            LoadStatus::NoConnection => Self::Offline,
        }
    }
}

impl StatusScreen {
    /// Everything except the live page is drawn over the web content.
    pub fn overlay_visible(&self) -> bool {
        !matches!(self, Self::Live)
    }

    pub fn content_opacity(&self) -> f64 {
        if self.overlay_visible() {
            DIMMED_OPACITY
        } else {
            1.0
        }
    }

    /// Text for the body of the overlay.
    pub fn body_text(&self) -> String {
        match self {
            Self::Splash => "Loading...".into(),
            Self::Progress { fraction } => format!("{}%", (fraction * 100.0) as u32),
            Self::Live => String::new(),
            Self::Error { message } => format!("Error: {message}"),
            Self::Offline => "No Connection".into(),
        }
    }
}
