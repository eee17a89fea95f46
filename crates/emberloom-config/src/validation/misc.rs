//! Validation for the startup and connectivity sections.

use crate::schema::EmberloomConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_startup(errors: &mut Vec<String>, config: &EmberloomConfig) {
    validate_range_f64(
        errors,
        "startup.splash.duration",
        config.startup.splash.duration,
        0.0,
        30.0,
    );
}

pub(crate) fn validate_connectivity(errors: &mut Vec<String>, config: &EmberloomConfig) {
    let connectivity = &config.connectivity;
    validate_range(
        errors,
        "connectivity.probe_interval_secs",
        connectivity.probe_interval_secs,
        1,
        300,
    );
    validate_range(
        errors,
        "connectivity.probe_timeout_secs",
        connectivity.probe_timeout_secs,
        1,
        60,
    );

    if let Some(target) = &connectivity.probe_target {
        let port_ok = target
            .rsplit_once(':')
            .is_some_and(|(host, port)| !host.is_empty() && port.parse::<u16>().is_ok());
        if !port_ok {
            errors.push(format!(
                "connectivity.probe_target = {target:?} must be host:port"
            ));
        }
    }
}
