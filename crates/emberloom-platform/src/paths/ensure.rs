use std::fs;
use std::path::Path;

use emberloom_common::PlatformError;

use super::resolve::{cache_dir, config_dir, crash_report_dir, data_dir, log_dir};

/// Creates every Emberloom directory that does not exist yet.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    for dir in [
        config_dir()?,
        data_dir()?,
        cache_dir()?,
        log_dir()?,
        crash_report_dir()?,
    ] {
        create(&dir)?;
    }
    Ok(())
}

fn create(dir: &Path) -> Result<(), PlatformError> {
    fs::create_dir_all(dir)
        .map_err(|e| PlatformError::PathError(format!("{}: {e}", dir.display())))
}
