//! Status overlay drawn above the game while it is not live.
//!
//! A second child WebView renders the splash, progress, error and offline
//! screens from inline HTML. Rust pushes each [`StatusScreen`] with
//! `evaluate_script`; the page posts a `retry` IPC message from the error
//! screen, which the shell drains with [`OverlayView::drain_commands`].

use std::sync::{Arc, Mutex};

use emberloom_common::HostError;
use emberloom_loader::StatusScreen;
use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::{WebView, WebViewBuilder};

use crate::ipc::IpcMessage;

/// Commands posted by the overlay page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayCommand {
    Retry,
}

impl OverlayCommand {
    fn from_ipc(body: &str) -> Option<Self> {
        match IpcMessage::from_json(body)?.kind.as_str() {
            "retry" => Some(Self::Retry),
            _ => None,
        }
    }
}

/// Script that renders `screen` in the overlay page.
pub fn render_script(screen: &StatusScreen) -> String {
    let (kind, fraction) = match screen {
        StatusScreen::Splash => ("splash", None),
        StatusScreen::Progress { fraction } => ("progress", Some(*fraction)),
        StatusScreen::Live => ("live", None),
        StatusScreen::Error { .. } => ("error", None),
        StatusScreen::Offline => ("offline", None),
    };
    let state = serde_json::json!({
        "screen": kind,
        "text": screen.body_text(),
        "fraction": fraction,
        "dim": 1.0 - screen.content_opacity(),
    });
    format!("window.emberloom && window.emberloom.render({state});")
}

const OVERLAY_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
  html, body { margin: 0; height: 100%; font-family: -apple-system, system-ui, sans-serif; }
  body { display: flex; align-items: center; justify-content: center; color: #fff;
         background: rgba(0, 0, 0, 0.7); user-select: none; }
  #panel { text-align: center; max-width: 70%; }
  #text { font-size: 20px; margin-bottom: 16px; }
  #bar { width: 240px; height: 6px; background: rgba(255,255,255,0.2); border-radius: 3px;
         margin: 0 auto; display: none; }
  #fill { height: 100%; width: 0; background: #ffb347; border-radius: 3px; }
  #retry { display: none; margin-top: 16px; padding: 8px 20px; font-size: 16px; }
</style>
</head>
<body>
<div id="panel">
  <div id="text">Loading...</div>
  <div id="bar"><div id="fill"></div></div>
  <button id="retry">Retry</button>
</div>
<script>
  window.emberloom = {
    render: function(state) {
      document.body.style.background = "rgba(0, 0, 0, " + state.dim + ")";
      document.getElementById("text").textContent = state.text;
      var bar = document.getElementById("bar");
      bar.style.display = state.fraction === null ? "none" : "block";
      if (state.fraction !== null) {
        document.getElementById("fill").style.width = Math.round(state.fraction * 100) + "%";
      }
      document.getElementById("retry").style.display = state.screen === "error" ? "inline-block" : "none";
    }
  };
  document.getElementById("retry").addEventListener("click", function() {
    window.ipc.postMessage(JSON.stringify({ kind: "retry", payload: null }));
  });
</script>
</body>
</html>
"#;

pub struct OverlayView {
    webview: WebView,
    commands: Arc<Mutex<Vec<OverlayCommand>>>,
}

impl OverlayView {
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        bounds: wry::Rect,
    ) -> Result<Self, HostError> {
        let commands = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&commands);

        let webview = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(true)
            .with_html(OVERLAY_HTML)
            .with_navigation_handler(|url| url.starts_with("about:") || url.starts_with("data:"))
            .with_ipc_handler(move |request| match OverlayCommand::from_ipc(request.body()) {
                Some(command) => {
                    debug!(?command, "overlay command");
                    if let Ok(mut pending) = sink.lock() {
                        pending.push(command);
                    }
                }
                None => warn!(body_len = request.body().len(), "unknown overlay message"),
            })
            .build_as_child(window)
            .map_err(|e| HostError::Creation(e.to_string()))?;

        Ok(Self { webview, commands })
    }

    /// Render `screen`, hiding the overlay entirely when the game is live.
    pub fn show(&self, screen: &StatusScreen) {
        if let Err(e) = self.webview.set_visible(screen.overlay_visible()) {
            warn!(error = %e, "failed to toggle overlay");
        }
        if let Err(e) = self.webview.evaluate_script(&render_script(screen)) {
            warn!(error = %e, "failed to render overlay");
        }
    }

    pub fn set_bounds(&self, bounds: wry::Rect) {
        if let Err(e) = self.webview.set_bounds(bounds) {
            warn!(error = %e, "failed to resize overlay");
        }
    }

    /// Drain all pending commands.
    pub fn drain_commands(&self) -> Vec<OverlayCommand> {
        match self.commands.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use emberloom_loader::LoadStatus;

    use super::*;

    fn state_of(script: &str) -> serde_json::Value {
        let start = script.find("render(").unwrap() + "render(".len();
        let end = script.rfind(");").unwrap();
        serde_json::from_str(&script[start..end]).unwrap()
    }

    #[test]
    fn renders_progress() {
        let screen = StatusScreen::from(&LoadStatus::progressing(0.42));
        let state = state_of(&render_script(&screen));
        assert_eq!(state["screen"], "progress");
        assert_eq!(state["text"], "42%");
        assert_eq!(state["fraction"], 0.42);
    }

    #[test]
    fn renders_error_text() {
        let screen = StatusScreen::from(&LoadStatus::failure("The request timed out."));
        let state = state_of(&render_script(&screen));
        assert_eq!(state["screen"], "error");
        assert_eq!(state["text"], "Error: The request timed out.");
        assert!(state["fraction"].is_null());
    }

    #[test]
    fn dims_everything_but_live() {
        let offline = state_of(&render_script(&StatusScreen::Offline));
        assert!((offline["dim"].as_f64().unwrap() - 0.7).abs() < 1e-9);

        let live = state_of(&render_script(&StatusScreen::Live));
        assert!(live["dim"].as_f64().unwrap().abs() < 1e-9);
    }

    #[test]
    fn error_text_is_escaped() {
        let screen = StatusScreen::Error {
            message: "bad \"quote\" </script>".into(),
        };
        let state = state_of(&render_script(&screen));
        assert_eq!(state["text"], "Error: bad \"quote\" </script>");
    }

    #[test]
    fn parses_retry_command() {
        assert_eq!(
            OverlayCommand::from_ipc(r#"{"kind":"retry","payload":null}"#),
            Some(OverlayCommand::Retry)
        );
        assert_eq!(OverlayCommand::from_ipc(r#"{"kind":"quit"}"#), None);
        assert_eq!(OverlayCommand::from_ipc("nope"), None);
    }
}
