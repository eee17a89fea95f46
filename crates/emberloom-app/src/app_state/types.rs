//! Internal constants for the app state module.

use std::time::Duration;

/// How often to pump the loader and poll the overlay (approx 60 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Initial logical window size.
pub(super) const WINDOW_SIZE: (f64, f64) = (1024.0, 768.0);

/// Grace period for background tasks at shutdown.
pub(super) const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);
