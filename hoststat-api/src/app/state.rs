use hoststat_core::MetricsCollector;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state for handlers. Read-only after start-up.
#[derive(Clone)]
pub struct AppState {
    pub collector: Arc<dyn MetricsCollector>,
    /// Volume reported by the storage endpoints.
    pub mount_point: Arc<PathBuf>,
}

impl AppState {
    pub fn new(collector: Arc<dyn MetricsCollector>, mount_point: impl Into<PathBuf>) -> Self {
        Self {
            collector,
            mount_point: Arc::new(mount_point.into()),
        }
    }
}
