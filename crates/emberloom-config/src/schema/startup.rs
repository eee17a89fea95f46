//! Startup sequence configuration types.

use serde::{Deserialize, Serialize};

/// Splash screen settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    pub enabled: bool,
    /// Seconds the splash stays up before the game screen is built.
    pub duration: f64,
    pub skip_on_key: bool,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration: 2.0,
            skip_on_key: true,
        }
    }
}

/// Startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct StartupConfig {
    pub splash: SplashConfig,
}
