//! Configuration schema types for Emberloom.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod connectivity;
mod endpoint;
mod startup;
mod system;
mod webview;

pub use connectivity::*;
pub use endpoint::*;
pub use startup::*;
pub use system::*;
pub use webview::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Emberloom.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct EmberloomConfig {
    pub endpoint: EndpointConfig,
    pub startup: StartupConfig,
    pub connectivity: ConnectivityConfig,
    pub webview: WebViewSettings,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
