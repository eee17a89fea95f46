//! Network reachability monitoring configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectivityConfig {
    pub enabled: bool,
    /// Seconds between reachability probes (valid range: 1-300).
    pub probe_interval_secs: u32,
    /// Seconds before a single probe is considered failed (valid range: 1-60).
    pub probe_timeout_secs: u32,
    /// `host:port` to probe instead of the endpoint's own host.
    pub probe_target: Option<String>,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            probe_interval_secs: 5,
            probe_timeout_secs: 3,
            probe_target: None,
        }
    }
}

impl ConnectivityConfig {
    pub fn probe_interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.probe_interval_secs))
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.probe_timeout_secs))
    }
}
