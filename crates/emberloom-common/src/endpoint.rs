//! Target endpoint parsing and validation.

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    #[error("invalid endpoint url '{url}': {reason}")]
    Invalid { url: String, reason: String },

    #[error("endpoint must use https with a host: {0}")]
    Insecure(String),
}

/// Parse an endpoint string into a `Url` without policy checks.
pub fn parse_endpoint(raw: &str) -> Result<Url, EndpointError> {
    Url::parse(raw.trim()).map_err(|e| EndpointError::Invalid {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Whether `url` is an https URL with a non-empty host.
pub fn is_secure_endpoint(url: &Url) -> bool {
    url.scheme() == "https" && url.host_str().is_some_and(|h| !h.is_empty())
}

/// Parse and require https + host.
pub fn validate_endpoint(raw: &str) -> Result<Url, EndpointError> {
    let url = parse_endpoint(raw)?;
    if !is_secure_endpoint(&url) {
        return Err(EndpointError::Insecure(url.to_string()));
    }
    Ok(url)
}
