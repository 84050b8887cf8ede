//! CPU topology, frequency and sampled usage

use super::*;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

#[cfg(target_os = "linux")]
const CPU0_MAX_FREQ_KHZ: &str = "/sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_max_freq";

impl HostCollector {
    /// Blocks the calling thread for `cpu_sample_interval`.
    pub(super) fn cpu_snapshot(&self) -> Result<CpuSnapshot> {
        Self::ensure_supported()?;

        let mut sys = System::new_with_specifics(
            RefreshKind::new().with_cpu(CpuRefreshKind::everything()),
        );
        std::thread::sleep(self.cpu_sample_interval);
        sys.refresh_cpu_specifics(CpuRefreshKind::new().with_cpu_usage());

        let cpus = sys.cpus();
        if cpus.is_empty() {
            return Err(CollectionError::Unsupported("no CPUs reported".into()));
        }

        // mean of all cores
        let usage_percent =
            cpus.iter().map(|cpu| cpu.cpu_usage()).sum::<f32>() / cpus.len() as f32;

        let current_frequency_mhz = match cpus[0].frequency() {
            0 => None,
            mhz => Some(mhz as f64),
        };

        Ok(CpuSnapshot {
            physical_cores: sys.physical_core_count(),
            logical_cores: cpus.len(),
            usage_percent,
            current_frequency_mhz,
            max_frequency_mhz: max_frequency_mhz(),
        })
    }
}

#[cfg(target_os = "linux")]
fn max_frequency_mhz() -> Option<f64> {
    let raw = std::fs::read_to_string(CPU0_MAX_FREQ_KHZ).ok()?;
    parse_khz(&raw)
}

#[cfg(not(target_os = "linux"))]
fn max_frequency_mhz() -> Option<f64> {
    None
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_khz(raw: &str) -> Option<f64> {
    match raw.trim().parse::<u64>().ok()? {
        0 => None,
        khz => Some(khz as f64 / 1000.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn parses_sysfs_khz() {
        assert_eq!(parse_khz("3600000\n"), Some(3600.0));
        assert_eq!(parse_khz("2394456"), Some(2394.456));
        assert_eq!(parse_khz("0"), None);
        assert_eq!(parse_khz("garbage"), None);
    }

    #[test]
    fn interval_has_a_floor() {
        let collector = HostCollector::new(Duration::ZERO);
        assert_eq!(
            collector.cpu_sample_interval(),
            sysinfo::MINIMUM_CPU_UPDATE_INTERVAL
        );
    }

    #[test]
    fn samples_for_the_configured_interval() {
        let interval = Duration::from_millis(300);
        let collector = HostCollector::new(interval);

        let started = Instant::now();
        let cpu = collector.collect_cpu().unwrap();
        assert!(started.elapsed() >= collector.cpu_sample_interval());
        assert!(collector.cpu_sample_interval() >= interval);

        assert!(cpu.logical_cores > 0);
        let info = cpu.report();
        assert!((0.0..=100.0).contains(&info.usage_percent));
    }
}
