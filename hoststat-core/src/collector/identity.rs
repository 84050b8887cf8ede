//! Host identity labels

use super::*;
use chrono::Local;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

impl HostCollector {
    pub(super) fn identity_snapshot(&self) -> Result<SystemSnapshot> {
        let sys = System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::new()));
        let processor = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .unwrap_or_default();

        Ok(SystemSnapshot {
            taken_at: Local::now(),
            os: os_family(std::env::consts::OS),
            os_version: System::kernel_version().unwrap_or_default(),
            architecture: format!("{}bit", usize::BITS),
            machine: std::env::consts::ARCH.to_string(),
            processor,
        })
    }
}

/// Kernel family name as dashboards expect it (`uname -s` style).
fn os_family(target_os: &str) -> String {
    match target_os {
        "linux" => "Linux".into(),
        "macos" => "Darwin".into(),
        "windows" => "Windows".into(),
        "freebsd" => "FreeBSD".into(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_target_os_to_family() {
        assert_eq!(os_family("linux"), "Linux");
        assert_eq!(os_family("macos"), "Darwin");
        assert_eq!(os_family("windows"), "Windows");
        assert_eq!(os_family("haiku"), "haiku");
    }

    #[test]
    fn identity_labels_are_populated() {
        let id = HostCollector::default().collect_system_identity().unwrap();
        assert!(!id.os.is_empty());
        assert!(id.architecture.ends_with("bit"));
        assert_eq!(id.machine, std::env::consts::ARCH);
    }
}
