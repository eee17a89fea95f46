use std::time::Duration;

use async_trait::async_trait;
use emberloom_common::PlatformError;
use tokio::net::TcpStream;
use url::Url;

/// A single reachability check.
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    /// `Ok(())` when the network path to the target is usable.
    async fn probe(&self) -> Result<(), PlatformError>;
}

/// Opens (and immediately drops) a TCP connection to `host:port`.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    target: String,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(target: impl Into<String>, timeout: Duration) -> Self {
        Self {
            target: target.into(),
            timeout,
        }
    }

    /// Probe the host and port a URL would connect to.
    pub fn for_endpoint(url: &Url, timeout: Duration) -> Result<Self, PlatformError> {
        let host = url
            .host_str()
            .ok_or_else(|| PlatformError::ProbeError(format!("{url} has no host")))?;
        let port = url
            .port_or_known_default()
            .ok_or_else(|| PlatformError::ProbeError(format!("{url} has no known port")))?;
        Ok(Self::new(format!("{host}:{port}"), timeout))
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

#[async_trait]
impl ReachabilityProbe for TcpProbe {
    async fn probe(&self) -> Result<(), PlatformError> {
        match tokio::time::timeout(self.timeout, TcpStream::connect(self.target.as_str())).await {
            Ok(Ok(_stream)) => Ok(()),
            Ok(Err(e)) => Err(PlatformError::ProbeError(format!("{}: {e}", self.target))),
            Err(_) => Err(PlatformError::ProbeError(format!(
                "{}: timed out after {}s",
                self.target,
                self.timeout.as_secs_f32()
            ))),
        }
    }
}
