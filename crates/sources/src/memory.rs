//! Memory (RAM) usage

use crate::util::format_percent;
use anyhow::{bail, Result};
use pulsefetch_core::{CollectorMetadata, FactCollector, BYTES_PER_MIB};
use pulsefetch_types::{FactRecord, Field, ToggleSet};
use sysinfo::System;

/// Memory collector
pub struct MemoryCollector {
    metadata: CollectorMetadata,
}

impl MemoryCollector {
    pub fn new() -> Self {
        Self {
            metadata: CollectorMetadata::new(
                "memory",
                "Memory (RAM)",
                "Used and total system memory",
                &[Field::Memory, Field::MemoryUsage],
            ),
        }
    }
}

impl Default for MemoryCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FactCollector for MemoryCollector {
    fn metadata(&self) -> &CollectorMetadata {
        &self.metadata
    }

    fn collect(&mut self, toggles: &ToggleSet, facts: &mut FactRecord) -> Result<()> {
        let mut system = System::new();
        system.refresh_memory();

        let total = system.total_memory();
        let used = system.used_memory();
        if total == 0 {
            bail!("sysinfo reported zero total memory");
        }

        if toggles.is_enabled(Field::Memory) {
            facts.set(Field::Memory, format_memory(used, total));
        }
        if toggles.is_enabled(Field::MemoryUsage) {
            if let Some(percent) = format_percent(used, total) {
                facts.set(Field::MemoryUsage, percent);
            }
        }

        Ok(())
    }
}

/// "usedMiB / totalMiB"
pub fn format_memory(used: u64, total: u64) -> String {
    format!("{}MiB / {}MiB", used / BYTES_PER_MIB, total / BYTES_PER_MIB)
}
