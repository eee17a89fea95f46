//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod endpoint;
mod helpers;
mod misc;


use crate::schema::EmberloomConfig;
use emberloom_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &EmberloomConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    endpoint::validate_endpoint(&mut errors, config);
    misc::validate_startup(&mut errors, config);
    misc::validate_connectivity(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
