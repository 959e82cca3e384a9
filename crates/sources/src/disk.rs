//! Root filesystem usage

use crate::util::format_percent;
use anyhow::{anyhow, Result};
use pulsefetch_core::{CollectorMetadata, FactCollector, BYTES_PER_GIB};
use pulsefetch_types::{FactRecord, Field, ToggleSet};
use std::path::Path;
use sysinfo::Disks;

/// Disk collector, reports the filesystem mounted at `/`
pub struct DiskCollector {
    metadata: CollectorMetadata,
}

impl DiskCollector {
    pub fn new() -> Self {
        Self {
            metadata: CollectorMetadata::new(
                "disk",
                "Disk Usage",
                "Used and total space of the root filesystem",
                &[Field::Disk, Field::DiskUsage],
            ),
        }
    }
}

impl Default for DiskCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FactCollector for DiskCollector {
    fn metadata(&self) -> &CollectorMetadata {
        &self.metadata
    }

    fn collect(&mut self, toggles: &ToggleSet, facts: &mut FactRecord) -> Result<()> {
        let disks = Disks::new_with_refreshed_list();
        let root = disks
            .iter()
            .find(|disk| disk.mount_point() == Path::new("/"))
            .ok_or_else(|| anyhow!("no filesystem mounted at /"))?;

        let total = root.total_space();
        let used = total.saturating_sub(root.available_space());

        if toggles.is_enabled(Field::Disk) {
            facts.set(Field::Disk, format_disk(used, total));
        }
        if toggles.is_enabled(Field::DiskUsage) {
            if let Some(percent) = format_percent(used, total) {
                facts.set(Field::DiskUsage, percent);
            }
        }

        Ok(())
    }
}

/// "usedGiB / totalGiB"
pub fn format_disk(used: u64, total: u64) -> String {
    format!("{}GiB / {}GiB", used / BYTES_PER_GIB, total / BYTES_PER_GIB)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_disk() {
        assert_eq!(format_disk(120 * BYTES_PER_GIB, 476 * BYTES_PER_GIB + 7), "120GiB / 476GiB");
    }
}
