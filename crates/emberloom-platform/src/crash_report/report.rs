use std::backtrace::Backtrace;
use std::panic::PanicHookInfo;
use std::path::{Path, PathBuf};

use crate::paths::crash_report_dir;

use super::sanitize::sanitize_secrets;

/// Writes a crash report to disk when a panic occurs.
///
/// Runs inside the panic hook, so it never panics itself: any failure
/// yields `None`. Secrets are redacted before writing and on Unix the file
/// is readable by the owner only.
pub fn write_crash_report(info: &PanicHookInfo) -> Option<PathBuf> {
    let dir = crash_report_dir().ok()?;

    let message = if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };

    let location = info.location().map(|loc| {
        serde_json::json!({
            "file": loc.file(),
            "line": loc.line(),
            "column": loc.column(),
        })
    });

    let backtrace = Backtrace::force_capture().to_string();

    let report = serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "os": std::env::consts::OS,
        "arch": std::env::consts::ARCH,
        "panic_message": sanitize_secrets(&message),
        "location": location,
        "backtrace": sanitize_secrets(&backtrace),
    });

    write_json(&dir, "crash", &report)
}

/// Persists a shell error report (the text of an `ErrorJournal::report`)
/// into `dir`, redacted. Returns the written path.
pub fn write_error_report(dir: &Path, report: &str) -> Option<PathBuf> {
    let body = serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "os": std::env::consts::OS,
        "report": sanitize_secrets(report),
    });
    write_json(dir, "errors", &body)
}

fn write_json(dir: &Path, prefix: &str, body: &serde_json::Value) -> Option<PathBuf> {
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("{prefix}_{timestamp}.json"));

    let _ = std::fs::create_dir_all(dir);
    std::fs::write(&path, serde_json::to_string_pretty(body).ok()?).ok()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600));
    }

    Some(path)
}
