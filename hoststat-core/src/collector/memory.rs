//! Physical memory

use super::*;
use sysinfo::{MemoryRefreshKind, RefreshKind, System};

impl HostCollector {
    pub(super) fn memory_snapshot(&self) -> Result<MemorySnapshot> {
        Self::ensure_supported()?;

        let sys = System::new_with_specifics(
            RefreshKind::new().with_memory(MemoryRefreshKind::everything()),
        );

        Ok(MemorySnapshot {
            total: sys.total_memory(),
            used: sys.used_memory(),
            available: sys.available_memory(),
        })
    }
}
