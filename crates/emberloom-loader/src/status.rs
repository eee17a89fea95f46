//! Load status of the embedded page.

use std::fmt;

use emberloom_common::ShellError;
use serde::{Deserialize, Serialize};

/// Progress fractions closer than this are treated as the same value.
pub const PROGRESS_EPSILON: f64 = 1e-4;

/// Where the page load currently stands. Exactly one variant is active.
///
/// Equality is equivalence: two `Progressing` values are equal when their
/// fractions differ by less than [`PROGRESS_EPSILON`], two `Failure` values
/// only when their reasons match exactly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadStatus {
    /// No load attempted yet.
    #[default]
    Standby,
    /// Load in flight; `fraction` is in `[0, 1)`.
    Progressing { fraction: f64 },
    /// The page finished loading.
    Finished,
    /// Navigation failed with a human-readable reason.
    Failure { reason: String },
    /// The network is unreachable. Supersedes any in-flight load.
    NoConnection,
}

impl PartialEq for LoadStatus {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Standby, Self::Standby)
            | (Self::Finished, Self::Finished)
            | (Self::NoConnection, Self::NoConnection) => true,
            (Self::Progressing { fraction: a }, Self::Progressing { fraction: b }) => {
                (a - b).abs() < PROGRESS_EPSILON
            }
            (Self::Failure { reason: a }, Self::Failure { reason: b }) => a == b,
            _ => false,
        }
    }
}

impl LoadStatus {
    pub fn progressing(fraction: f64) -> Self {
        Self::Progressing { fraction }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }

    /// The in-flight fraction, if loading.
    pub fn progress(&self) -> Option<f64> {
        match self {
            Self::Progressing { fraction } => Some(*fraction),
            _ => None,
        }
    }

    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Finished)
    }

    /// `Failure` or `NoConnection`.
    pub fn has_error(&self) -> bool {
        matches!(self, Self::Failure { .. } | Self::NoConnection)
    }

    pub fn error_reason(&self) -> Option<&str> {
        match self {
            Self::Failure { reason } => Some(reason),
            _ => None,
        }
    }

    /// Short label for logs and structured fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Standby => "standby",
            Self::Progressing { .. } => "progressing",
            Self::Finished => "finished",
            Self::Failure { .. } => "failure",
            Self::NoConnection => "no_connection",
        }
    }

    /// The line shown above the loading overlay.
    pub fn status_line(&self) -> String {
        format!("Status: {self}")
    }

    /// The user-facing error this status corresponds to, if any.
    pub fn to_shell_error(&self) -> Option<ShellError> {
        match self {
            Self::Failure { reason } => Some(ShellError::WebViewLoadFailed(reason.clone())),
            Self::NoConnection => Some(ShellError::NetworkUnavailable),
            _ => None,
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standby => f.write_str("Standby"),
            Self::Progressing { fraction } => {
                let percent = (fraction.clamp(0.0, 1.0) * 100.0) as u32;
                write!(f, "Loading {percent}%")
            }
            Self::Finished => f.write_str("Completed"),
            Self::Failure { reason } => write!(f, "Error: {reason}"),
            Self::NoConnection => f.write_str("No Connection"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standby() {
        assert_eq!(LoadStatus::default(), LoadStatus::Standby);
    }

    #[test]
    fn progressing_within_epsilon_is_equal() {
        assert_eq!(LoadStatus::progressing(0.5), LoadStatus::progressing(0.50005));
        assert_ne!(LoadStatus::progressing(0.5), LoadStatus::progressing(0.5002));
    }

    #[test]
    fn failure_requires_exact_reason() {
        assert_eq!(LoadStatus::failure("timeout"), LoadStatus::failure("timeout"));
        assert_ne!(LoadStatus::failure("timeout"), LoadStatus::failure("Timeout"));
    }

    #[test]
    fn different_variants_are_not_equal() {
        assert_ne!(LoadStatus::Standby, LoadStatus::Finished);
        assert_ne!(LoadStatus::progressing(1.0), LoadStatus::Finished);
        assert_ne!(LoadStatus::NoConnection, LoadStatus::failure("offline"));
    }

    #[test]
    fn accessors() {
        assert_eq!(LoadStatus::progressing(0.25).progress(), Some(0.25));
        assert_eq!(LoadStatus::Finished.progress(), None);
        assert!(LoadStatus::Finished.is_successful());
        assert!(!LoadStatus::progressing(0.9).is_successful());
        assert!(LoadStatus::NoConnection.has_error());
        assert!(LoadStatus::failure("x").has_error());
        assert!(!LoadStatus::Standby.has_error());
        assert_eq!(LoadStatus::failure("dns").error_reason(), Some("dns"));
        assert_eq!(LoadStatus::NoConnection.error_reason(), None);
    }

    #[test]
    fn display_text() {
        assert_eq!(LoadStatus::Standby.to_string(), "Standby");
        assert_eq!(LoadStatus::progressing(0.3).to_string(), "Loading 30%");
        assert_eq!(LoadStatus::progressing(0.999).to_string(), "Loading 99%");
        assert_eq!(LoadStatus::Finished.to_string(), "Completed");
        assert_eq!(LoadStatus::failure("timeout").to_string(), "Error: timeout");
        assert_eq!(LoadStatus::NoConnection.to_string(), "No Connection");
        assert_eq!(LoadStatus::Finished.status_line(), "Status: Completed");
    }

    #[test]
    fn shell_error_mapping() {
        assert_eq!(
            LoadStatus::NoConnection.to_shell_error(),
            Some(ShellError::NetworkUnavailable)
        );
        assert_eq!(
            LoadStatus::failure("timeout").to_shell_error(),
            Some(ShellError::WebViewLoadFailed("timeout".into()))
        );
        assert_eq!(LoadStatus::Finished.to_shell_error(), None);
    }

    #[test]
    fn serializes_tagged() {
        let json = serde_json::to_string(&LoadStatus::progressing(0.5)).unwrap();
        assert_eq!(json, r#"{"state":"progressing","fraction":0.5}"#);

        let back: LoadStatus = serde_json::from_str(r#"{"state":"no_connection"}"#).unwrap();
        assert_eq!(back, LoadStatus::NoConnection);
    }
}
