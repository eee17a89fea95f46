use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("connectivity probe error: {0}")]
    ProbeError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Errors raised by a web host while creating a view or issuing a load.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("host unavailable: {0}")]
    Unavailable(String),

    #[error("failed to create web view: {0}")]
    Creation(String),

    #[error("navigation rejected: {0}")]
    Navigation(String),
}

#[derive(Debug, thiserror::Error)]
pub enum EmberloomError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// User-facing shell errors, each with a stable numeric code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    #[error("Network unavailable. Check your internet connection.")]
    NetworkUnavailable,

    #[error("Could not load the game: {0}")]
    WebViewLoadFailed(String),

    #[error("Access to {0} was denied. Check the application settings.")]
    PermissionDenied(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ShellError {
    pub fn code(&self) -> u32 {
        match self {
            Self::NetworkUnavailable => 1001,
            Self::WebViewLoadFailed(_) => 1004,
            Self::PermissionDenied(_) => 1006,
            Self::Unexpected(_) => 1999,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::NetworkUnavailable => "Check Wi-Fi or mobile data and try again.",
            Self::WebViewLoadFailed(_) => "Check your internet connection and try again.",
            Self::PermissionDenied(_) => {
                "Open the system privacy settings and grant the required permission."
            }
            Self::Unexpected(_) => {
                "Restart the application. If the problem persists, contact support."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("endpoint.url must use https".into());
        assert_eq!(
            err.to_string(),
            "config validation error: endpoint.url must use https"
        );
    }

    #[test]
    fn host_error_display() {
        let err = HostError::Creation("no display".into());
        assert_eq!(err.to_string(), "failed to create web view: no display");

        let err = HostError::Navigation("bad url".into());
        assert_eq!(err.to_string(), "navigation rejected: bad url");
    }

    #[test]
    fn emberloom_error_from_config() {
        let err: EmberloomError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, EmberloomError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn emberloom_error_from_host() {
        let err: EmberloomError = HostError::Unavailable("gone".into()).into();
        assert!(matches!(err, EmberloomError::Host(_)));
        assert_eq!(err.to_string(), "host unavailable: gone");
    }

    #[test]
    fn emberloom_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: EmberloomError = io_err.into();
        assert!(matches!(err, EmberloomError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn shell_error_codes_are_stable() {
        assert_eq!(ShellError::NetworkUnavailable.code(), 1001);
        assert_eq!(ShellError::WebViewLoadFailed("x".into()).code(), 1004);
        assert_eq!(ShellError::PermissionDenied("camera".into()).code(), 1006);
        assert_eq!(ShellError::Unexpected("x".into()).code(), 1999);
    }

    #[test]
    fn shell_error_messages() {
        let err = ShellError::WebViewLoadFailed("timeout".into());
        assert_eq!(err.to_string(), "Could not load the game: timeout");
        assert!(err.recovery_suggestion().contains("internet"));

        let err = ShellError::PermissionDenied("notifications".into());
        assert!(err.to_string().contains("notifications"));
    }
}
