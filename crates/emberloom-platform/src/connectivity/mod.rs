//! Network reachability monitoring.
//!
//! A [`ConnectivityMonitor`] assumes the network is up, probes it on an
//! interval, and reports only the changes. The shell forwards those changes
//! to the web resource loader.

mod monitor;
mod probe;


pub use monitor::{ConnectivityMonitor, MonitorHandle};
pub use probe::{ReachabilityProbe, TcpProbe};
