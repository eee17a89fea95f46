use std::path::PathBuf;

use emberloom_common::PlatformError;

pub(super) const APP_NAME: &str = "emberloom";

/// Returns the platform-specific configuration directory for Emberloom.
///
/// - macOS: `~/Library/Application Support/emberloom`
/// - Linux: `$XDG_CONFIG_HOME/emberloom` (defaults to `~/.config/emberloom`)
/// - Windows: `%APPDATA%\emberloom`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory for Emberloom.
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific cache directory for Emberloom.
pub fn cache_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::cache_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine cache directory".into()))?
        .join(APP_NAME))
}

/// `config_dir()/config.toml`
pub fn config_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("config.toml"))
}

/// `data_dir()/logs`
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// `log_dir()/crash-reports`
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}
