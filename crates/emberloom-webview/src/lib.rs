//! `wry`-backed web host for the game screen.
//!
//! Wraps the `wry` crate to provide:
//! - A child WebView configured from the `[webview]` settings
//! - Page-load and `document.readyState` progress reporting over IPC
//! - A per-load timeout owned by the host
//! - A navigation allowlist restricted to secure origins
//! - An HTML overlay that renders the status screens

pub mod bridge;
pub mod config;
pub mod events;
pub mod ipc;
pub mod overlay;
pub mod view;

pub use bridge::{LoadBridge, TIMEOUT_MESSAGE};
pub use config::WebViewConfig;
pub use events::PageLoadState;
pub use ipc::{IpcMessage, IpcPayload};
pub use overlay::{OverlayCommand, OverlayView};
pub use view::GameView;
