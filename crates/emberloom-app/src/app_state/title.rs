//! Window title management: reflects the load status.

use emberloom_loader::LoadStatus;

use super::core::EmberloomApp;

pub(super) fn title_text(status: &LoadStatus) -> String {
    format!("Emberloom — {}", status.status_line())
}

impl EmberloomApp {
    /// Format: "Emberloom — Status: {status}"
    pub(super) fn update_window_title(&self) {
        let Some(ref window) = self.window else {
            return;
        };
        window.set_title(&title_text(&self.status));
    }
}
