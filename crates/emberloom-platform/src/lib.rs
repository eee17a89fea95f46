//! Platform services for the Emberloom shell: directories, crash reports and
//! network reachability.

pub mod connectivity;
pub mod crash_report;
pub mod paths;

pub use connectivity::{ConnectivityMonitor, MonitorHandle, ReachabilityProbe, TcpProbe};
pub use crash_report::{sanitize_secrets, write_crash_report, write_error_report};
pub use paths::{cache_dir, config_dir, config_file, crash_report_dir, data_dir, ensure_dirs, log_dir};
