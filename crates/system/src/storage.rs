use std::path::{Path, PathBuf};
use sysinfo::Disks;
use sysmon_config::DriveConfig;
use sysmon_core::StorageEntry;
use tracing::debug;

/// A mounted filesystem: `(mount point, total bytes, available bytes)`.
pub type Mount = (PathBuf, u64, u64);

/// Query every configured drive. Drives whose path is missing or not on
/// any known filesystem are dropped.
pub fn read(drives: &[DriveConfig]) -> Vec<StorageEntry> {
    if drives.is_empty() {
        return Vec::new();
    }

    let disks = Disks::new_with_refreshed_list();
    let mounts: Vec<Mount> = disks
        .iter()
        .map(|d| (d.mount_point().to_path_buf(), d.total_space(), d.available_space()))
        .collect();

    drives
        .iter()
        .filter_map(|drive| {
            let entry = entry_for(drive, &mounts);
            if entry.is_none() {
                debug!("skipping drive '{}' at '{}'", drive.name, drive.mount);
            }
            entry
        })
        .collect()
}

/// Usage of `drive`, measured on the filesystem that contains its path.
pub fn entry_for(drive: &DriveConfig, mounts: &[Mount]) -> Option<StorageEntry> {
    let path = std::fs::canonicalize(&drive.mount).ok()?;
    let (_, total, available) = containing_mount(&path, mounts)?;
    let used = total.saturating_sub(*available);
    let used_percent = if *total == 0 {
        0
    } else {
        (used as f64 / *total as f64 * 100.0) as u8
    };

    Some(StorageEntry {
        name: drive.name.clone(),
        mount: drive.mount.clone(),
        icon: drive.icon.clone(),
        used_bytes: used,
        total_bytes: *total,
        used_percent,
    })
}

/// The mount with the longest mount point that is a prefix of `path`.
pub fn containing_mount<'a>(path: &Path, mounts: &'a [Mount]) -> Option<&'a Mount> {
    mounts
        .iter()
        .filter(|(mount, _, _)| path.starts_with(mount))
        .max_by_key(|(mount, _, _)| mount.components().count())
}
