use chrono::{DateTime, Local, SecondsFormat};
use std::path::PathBuf;

use crate::report::{CpuInfo, RamInfo, StorageInfo, SystemInfo};
use crate::units::{bytes_to_gb, round_to, usage_percent};

/// Current local time as an RFC 3339 / ISO-8601 string with microseconds.
pub fn timestamp() -> String {
    format_timestamp(&Local::now())
}

pub(crate) fn format_timestamp(at: &DateTime<Local>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Host identity, static for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemSnapshot {
    pub taken_at: DateTime<Local>,
    pub os: String,
    pub os_version: String,
    pub architecture: String,
    pub machine: String,
    pub processor: String,
}

impl SystemSnapshot {
    pub fn timestamp(&self) -> String {
        format_timestamp(&self.taken_at)
    }

    pub fn report(&self) -> SystemInfo {
        SystemInfo {
            os: self.os.clone(),
            os_version: self.os_version.clone(),
            architecture: self.architecture.clone(),
            machine: self.machine.clone(),
            processor: self.processor.clone(),
        }
    }
}

/// Which figure RAM usage is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RamBasis {
    /// `total - available`; used by the combined system document.
    Host,
    /// Used memory exactly as the OS reports it, percent rounded to 1 place.
    /// On Linux sysinfo derives used as `total - available`, so both bases agree there.
    Reported,
}

/// Physical memory in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemorySnapshot {
    pub total: u64,
    pub used: u64,
    pub available: u64,
}

impl MemorySnapshot {
    pub fn used_bytes(&self, basis: RamBasis) -> u64 {
        match basis {
            RamBasis::Host => self.total.saturating_sub(self.available),
            RamBasis::Reported => self.used,
        }
    }

    pub fn usage_percent(&self, basis: RamBasis) -> f64 {
        let percent = usage_percent(self.used_bytes(basis), self.total);
        match basis {
            RamBasis::Host => percent,
            RamBasis::Reported => round_to(percent, 1),
        }
    }

    pub fn report(&self, basis: RamBasis) -> RamInfo {
        RamInfo {
            total_gb: bytes_to_gb(self.total),
            used_gb: bytes_to_gb(self.used_bytes(basis)),
            available_gb: bytes_to_gb(self.available),
            usage_percent: self.usage_percent(basis),
        }
    }
}

/// CPU topology, frequency and usage sampled over one interval.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuSnapshot {
    pub physical_cores: Option<usize>,
    pub logical_cores: usize,
    /// Mean usage across all cores, 0-100.
    pub usage_percent: f32,
    pub current_frequency_mhz: Option<f64>,
    pub max_frequency_mhz: Option<f64>,
}

impl CpuSnapshot {
    pub fn report(&self) -> CpuInfo {
        CpuInfo {
            physical_cores: self.physical_cores,
            total_cores: self.logical_cores,
            usage_percent: round_to(f64::from(self.usage_percent), 1).clamp(0.0, 100.0),
            current_frequency_mhz: self.current_frequency_mhz.map(|f| round_to(f, 2)),
            max_frequency_mhz: self.max_frequency_mhz.map(|f| round_to(f, 2)),
        }
    }
}

/// Which statvfs figures storage usage is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBasis {
    /// `used = total - available`, percent of total; used by the combined system document.
    Host,
    /// `used = total - free`, percent of `used + available` rounded to 1 place,
    /// so blocks reserved for root count as neither used nor free.
    Reported,
}

/// Filesystem usage for one mount point, in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageSnapshot {
    pub mount_point: PathBuf,
    pub total: u64,
    /// All free blocks, including those reserved for root (`f_bfree`).
    pub free: u64,
    /// Space available to unprivileged users (`f_bavail`).
    pub available: u64,
}

impl StorageSnapshot {
    pub fn used(&self, basis: StorageBasis) -> u64 {
        match basis {
            StorageBasis::Host => self.total.saturating_sub(self.available),
            StorageBasis::Reported => self.total.saturating_sub(self.free),
        }
    }

    pub fn usage_percent(&self, basis: StorageBasis) -> f64 {
        let used = self.used(basis);
        match basis {
            StorageBasis::Host => usage_percent(used, self.total),
            StorageBasis::Reported => {
                round_to(usage_percent(used, used.saturating_add(self.available)), 1)
            }
        }
    }

    pub fn report(&self, basis: StorageBasis) -> StorageInfo {
        StorageInfo {
            total_gb: bytes_to_gb(self.total),
            used_gb: bytes_to_gb(self.used(basis)),
            free_gb: bytes_to_gb(self.available),
            usage_percent: self.usage_percent(basis),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIB: u64 = 1 << 30;

    #[test]
    fn ram_sixteen_total_six_available() {
        let mem = MemorySnapshot {
            total: 16 * GIB,
            used: 10 * GIB,
            available: 6 * GIB,
        };
        for basis in [RamBasis::Host, RamBasis::Reported] {
            let ram = mem.report(basis);
            assert_eq!(ram.total_gb, 16.0);
            assert_eq!(ram.used_gb, 10.0);
            assert_eq!(ram.available_gb, 6.0);
            assert_eq!(ram.usage_percent, 62.5);
        }
    }

    #[test]
    fn ram_bases_can_disagree() {
        // buffers/cache make OS-reported used smaller than total - available
        let mem = MemorySnapshot {
            total: 8 * GIB,
            used: 2 * GIB,
            available: 4 * GIB,
        };
        assert_eq!(mem.usage_percent(RamBasis::Host), 50.0);
        assert_eq!(mem.usage_percent(RamBasis::Reported), 25.0);

        let host = mem.report(RamBasis::Host);
        assert!((host.used_gb + host.available_gb - host.total_gb).abs() <= 0.01);
    }

    #[test]
    fn zero_totals_report_zero_usage() {
        let mem = MemorySnapshot {
            total: 0,
            used: 0,
            available: 0,
        };
        assert_eq!(mem.report(RamBasis::Host).usage_percent, 0.0);

        let disk = StorageSnapshot {
            mount_point: PathBuf::from("/"),
            total: 0,
            free: 0,
            available: 0,
        };
        assert_eq!(disk.report(StorageBasis::Host).usage_percent, 0.0);
        assert_eq!(disk.report(StorageBasis::Reported).usage_percent, 0.0);
    }

    #[test]
    fn reported_ram_percent_has_one_decimal() {
        let mem = MemorySnapshot {
            total: 3 * GIB,
            used: GIB,
            available: 2 * GIB,
        };
        assert_eq!(mem.usage_percent(RamBasis::Reported), 33.3);
        assert!((mem.usage_percent(RamBasis::Host) - 100.0 / 3.0).abs() < 1e-9);
    }

    // 100 GiB volume, 50 GiB free of which 10 GiB reserved for root
    fn reserved_disk() -> StorageSnapshot {
        StorageSnapshot {
            mount_point: PathBuf::from("/"),
            total: 100 * GIB,
            free: 50 * GIB,
            available: 40 * GIB,
        }
    }

    #[test]
    fn host_storage_counts_reserved_blocks_as_used() {
        let info = reserved_disk().report(StorageBasis::Host);
        assert_eq!(info.total_gb, 100.0);
        assert_eq!(info.used_gb, 60.0);
        assert_eq!(info.free_gb, 40.0);
        assert_eq!(info.usage_percent, 60.0);
    }

    #[test]
    fn reported_storage_excludes_reserved_blocks() {
        let info = reserved_disk().report(StorageBasis::Reported);
        assert_eq!(info.total_gb, 100.0);
        assert_eq!(info.used_gb, 50.0);
        assert_eq!(info.free_gb, 40.0);
        // 50 / (50 + 40)
        assert_eq!(info.usage_percent, 55.6);
    }

    #[test]
    fn cpu_report_rounds_and_keeps_missing_frequencies() {
        let cpu = CpuSnapshot {
            physical_cores: None,
            logical_cores: 8,
            usage_percent: 12.345,
            current_frequency_mhz: Some(2_394.456),
            max_frequency_mhz: None,
        };
        let info = cpu.report();
        assert_eq!(info.total_cores, 8);
        assert_eq!(info.usage_percent, 12.3);
        assert_eq!(info.current_frequency_mhz, Some(2_394.46));
        assert_eq!(info.max_frequency_mhz, None);
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let ts = timestamp();
        assert!(DateTime::parse_from_rfc3339(&ts).is_ok(), "{ts}");
    }
}
