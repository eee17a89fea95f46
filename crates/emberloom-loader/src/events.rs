//! Raw signals queued for the loader.

/// An event waiting to be applied on the loader's thread.
#[derive(Debug, Clone, PartialEq)]
pub enum LoaderEvent {
    /// Host-reported load progress for the load tagged `generation`.
    Progress { generation: u64, fraction: f64 },
    /// Host-reported navigation failure for the load tagged `generation`.
    NavigationFailed { generation: u64, message: String },
    /// Network reachability changed.
    Connectivity(bool),
}
