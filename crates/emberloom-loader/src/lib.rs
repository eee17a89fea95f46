//! Load-status state machine for an embedded web page.
//!
//! A [`WebResourceLoader`] is bound to one target URL. It hands a
//! [`LoadRequest`] to a [`WebHost`], turns the host's noisy progress and
//! failure signals into a [`LoadStatus`], reacts to connectivity changes,
//! and publishes every status change to [`StatusStream`] observers.

pub mod error;
pub mod events;
pub mod host;
pub mod loader;
pub mod publisher;
pub mod screen;
pub mod status;

pub use error::LoaderError;
pub use events::LoaderEvent;
pub use host::{HostSink, LoadRequest, WebHost, DEFAULT_LOAD_TIMEOUT};
pub use loader::{LoaderHandle, LoaderSession, WebResourceLoader};
pub use publisher::{StatusPublisher, StatusStream};
pub use screen::StatusScreen;
pub use status::{LoadStatus, PROGRESS_EPSILON};
