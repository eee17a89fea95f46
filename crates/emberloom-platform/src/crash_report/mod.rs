mod report;
mod sanitize;

pub use report::{write_crash_report, write_error_report};
pub use sanitize::sanitize_secrets;
