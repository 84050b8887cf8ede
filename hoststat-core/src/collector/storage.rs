//! Filesystem usage for a mount point

use super::*;
use std::io::ErrorKind;

impl HostCollector {
    pub(super) fn storage_snapshot(&self, mount_point: &Path) -> Result<StorageSnapshot> {
        let meta = std::fs::metadata(mount_point).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CollectionError::InvalidMount(mount_point.to_path_buf()),
            _ => CollectionError::Io(e),
        })?;
        if !meta.is_dir() {
            return Err(CollectionError::InvalidMount(mount_point.to_path_buf()));
        }

        let total = fs2::total_space(mount_point)?;
        let free = fs2::free_space(mount_point)?;
        let available = fs2::available_space(mount_point)?;

        Ok(StorageSnapshot {
            mount_point: mount_point.to_path_buf(),
            total,
            free,
            available,
        })
    }
}
