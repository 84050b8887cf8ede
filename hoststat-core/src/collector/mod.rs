use crate::error::{CollectionError, Result};
use crate::models::{CpuSnapshot, MemorySnapshot, StorageSnapshot, SystemSnapshot};
use std::path::Path;
use std::time::Duration;

mod cpu;
mod identity;
mod memory;
mod storage;

/// Default CPU usage sampling window.
pub const DEFAULT_CPU_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Source of point-in-time host readings.
///
/// Every call is synchronous and may block (`collect_cpu` sleeps for its
/// sampling interval); async callers should run them on a blocking thread.
pub trait MetricsCollector: Send + Sync {
    fn collect_memory(&self) -> Result<MemorySnapshot>;
    fn collect_cpu(&self) -> Result<CpuSnapshot>;
    fn collect_storage(&self, mount_point: &Path) -> Result<StorageSnapshot>;
    fn collect_system_identity(&self) -> Result<SystemSnapshot>;
}

/// Reads the local machine through `sysinfo` and `statvfs`.
///
/// Holds no OS handles: every call refreshes a fresh `sysinfo::System`, so
/// concurrent requests never contend on a lock.
#[derive(Debug, Clone)]
pub struct HostCollector {
    cpu_sample_interval: Duration,
}

impl Default for HostCollector {
    fn default() -> Self {
        Self::new(DEFAULT_CPU_SAMPLE_INTERVAL)
    }
}

impl HostCollector {
    /// Intervals shorter than sysinfo's minimum update interval are raised to it.
    pub fn new(cpu_sample_interval: Duration) -> Self {
        Self {
            cpu_sample_interval: cpu_sample_interval.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL),
        }
    }

    pub fn cpu_sample_interval(&self) -> Duration {
        self.cpu_sample_interval
    }

    fn ensure_supported() -> Result<()> {
        if sysinfo::IS_SUPPORTED_SYSTEM {
            Ok(())
        } else {
            Err(CollectionError::Unsupported(
                std::env::consts::OS.to_string(),
            ))
        }
    }
}

impl MetricsCollector for HostCollector {
    fn collect_memory(&self) -> Result<MemorySnapshot> {
        self.memory_snapshot()
    }

    fn collect_cpu(&self) -> Result<CpuSnapshot> {
        self.cpu_snapshot()
    }

    fn collect_storage(&self, mount_point: &Path) -> Result<StorageSnapshot> {
        self.storage_snapshot(mount_point)
    }

    fn collect_system_identity(&self) -> Result<SystemSnapshot> {
        self.identity_snapshot()
    }
}
