//! Endpoint URL and timeout validation.

use emberloom_common::endpoint::{parse_endpoint, validate_endpoint as secure_endpoint};

use crate::schema::EmberloomConfig;

use super::helpers::validate_range;

pub(crate) fn validate_endpoint(errors: &mut Vec<String>, config: &EmberloomConfig) {
    let endpoint = &config.endpoint;

    let checked = if endpoint.require_https {
        secure_endpoint(&endpoint.url).map(|_| ())
    } else {
        parse_endpoint(&endpoint.url).map(|_| ())
    };
    if let Err(e) = checked {
        errors.push(format!("endpoint.url: {e}"));
    }

    validate_range(
        errors,
        "endpoint.load_timeout_secs",
        endpoint.load_timeout_secs,
        1,
        120,
    );
}
