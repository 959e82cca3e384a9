//! Operating system, kernel and uptime

use anyhow::Result;
use pulsefetch_core::{CollectorMetadata, FactCollector};
use pulsefetch_types::{FactRecord, Field, ToggleSet};
use sysinfo::System;

/// OS collector
///
/// Uses the sysinfo associated functions; none of them need a refreshed
/// `System` instance.
pub struct OsCollector {
    metadata: CollectorMetadata,
}

impl OsCollector {
    pub fn new() -> Self {
        Self {
            metadata: CollectorMetadata::new(
                "os",
                "Operating System",
                "Distribution, kernel version and uptime",
                &[Field::Os, Field::Kernel, Field::Uptime],
            ),
        }
    }
}

impl Default for OsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FactCollector for OsCollector {
    fn metadata(&self) -> &CollectorMetadata {
        &self.metadata
    }

    fn collect(&mut self, toggles: &ToggleSet, facts: &mut FactRecord) -> Result<()> {
        if toggles.is_enabled(Field::Os) {
            let name = System::name().unwrap_or_default();
            let version = System::os_version().unwrap_or_default();
            facts.set(Field::Os, format!("{} {}", name, version).trim());
        }

        if toggles.is_enabled(Field::Kernel) {
            if let Some(kernel) = System::kernel_version() {
                facts.set(Field::Kernel, kernel);
            }
        }

        if toggles.is_enabled(Field::Uptime) {
            facts.set(Field::Uptime, format_uptime(System::uptime()));
        }

        Ok(())
    }
}

/// Format seconds as "H hours, M mins"
pub fn format_uptime(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{} hours, {} mins", hours, minutes)
}
