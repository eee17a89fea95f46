//! Target endpoint configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default game endpoint.
pub const DEFAULT_ENDPOINT_URL: &str = "https://cluckfargame.com/app";

/// Where the shell points its web view and how long a load may take.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub url: String,
    /// Load request timeout in seconds (valid range: 1-120).
    pub load_timeout_secs: u32,
    /// Reject endpoints that are not https with a host.
    pub require_https: bool,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT_URL.into(),
            load_timeout_secs: 12,
            require_https: true,
        }
    }
}

impl EndpointConfig {
    pub fn load_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.load_timeout_secs))
    }
}
