//! Emberloom configuration system.
//!
//! TOML-based configuration with full validation. Every section has
//! defaults, so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use emberloom_config::{config_to_json, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{EmberloomConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use emberloom_common::ConfigError;

/// Load config from `override_path` when given, otherwise from the platform
/// default path (created from the template if missing), then validate.
pub fn load_config(override_path: Option<&Path>) -> Result<EmberloomConfig, ConfigError> {
    let config = match override_path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &EmberloomConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
