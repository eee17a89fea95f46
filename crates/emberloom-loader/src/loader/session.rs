//! Immutable description of one loader session.

use std::time::Duration;

use emberloom_common::{endpoint, SessionId};
use url::Url;

use crate::error::LoaderError;
use crate::host::{LoadRequest, DEFAULT_LOAD_TIMEOUT};

/// One presentation of the game screen: a fixed target and its timeout.
#[derive(Debug, Clone)]
pub struct LoaderSession {
    id: SessionId,
    url: Url,
    load_timeout: Duration,
}

impl LoaderSession {
    pub fn new(url: Url) -> Self {
        Self {
            id: SessionId::new(),
            url,
            load_timeout: DEFAULT_LOAD_TIMEOUT,
        }
    }

    /// Parse `raw`, requiring an https URL with a host.
    pub fn parse(raw: &str) -> Result<Self, LoaderError> {
        Ok(Self::new(endpoint::validate_endpoint(raw)?))
    }

    pub fn with_load_timeout(mut self, timeout: Duration) -> Self {
        self.load_timeout = timeout;
        self
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn load_timeout(&self) -> Duration {
        self.load_timeout
    }

    pub(crate) fn request(&self) -> LoadRequest {
        LoadRequest {
            url: self.url.clone(),
            timeout: self.load_timeout,
        }
    }
}
