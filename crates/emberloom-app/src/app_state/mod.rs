//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates the splash, the game view and its loader, the
//! status overlay and connectivity monitoring.

mod bounds;
mod core;
mod event_handler;
mod game;
mod init;
mod polling;
mod shutdown;
mod title;
mod types;

pub use core::EmberloomApp;
