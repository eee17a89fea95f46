//! IPC protocol between the page and the shell.
//!
//! JavaScript calls `window.ipc.postMessage(JSON.stringify({...}))`, which
//! triggers the `ipc_handler` registered on the WebView. The only message
//! the shell acts on is `load_progress`, posted by [`IPC_INIT_SCRIPT`].

use serde::{Deserialize, Serialize};

/// Message kind carrying a load fraction as its payload.
pub const LOAD_PROGRESS_KIND: &str = "load_progress";

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload (arbitrary JSON).
    #[serde(default)]
    pub payload: IpcPayload,
}

/// Payload of an IPC message: a simple string or structured JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    #[default]
    None,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// The fraction carried by a `load_progress` message.
    pub fn load_progress(&self) -> Option<f64> {
        if self.kind != LOAD_PROGRESS_KIND {
            return None;
        }
        let fraction: Option<f64> = match &self.payload {
            IpcPayload::Json(value) => value.as_f64(),
            IpcPayload::Text(text) => text.trim().parse().ok(),
            IpcPayload::None => None,
        };
        fraction.filter(|f| f.is_finite())
    }
}

/// Reports `document.readyState` transitions as load progress.
///
/// Injected as an initialization script, so it runs before the page's own
/// scripts on every navigation.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    if (window.__emberloomProgress) { return; }
    window.__emberloomProgress = true;
    var fractions = { loading: 0.3, interactive: 0.7, complete: 1.0 };
    function report() {
        var fraction = fractions[document.readyState];
        if (fraction === undefined || !window.ipc) { return; }
        window.ipc.postMessage(JSON.stringify({
            kind: "load_progress",
            payload: fraction
        }));
    }
    report();
    document.addEventListener("readystatechange", report);
})();
"#;
