use emberloom_common::{EndpointError, HostError};

/// Misuse of the loader API. Load failures themselves are statuses, not errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoaderError {
    #[error(transparent)]
    Endpoint(#[from] EndpointError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error("no web host attached")]
    NotAttached,

    #[error("cannot retry while {status}")]
    NotRetryable { status: String },
}
