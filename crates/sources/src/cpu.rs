//! CPU model and usage

use anyhow::{anyhow, Result};
use pulsefetch_core::{CollectorMetadata, FactCollector};
use pulsefetch_types::{FactRecord, Field, ToggleSet};
use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// CPU collector
///
/// Usage needs two samples, so asking for "CPU Usage" costs one
/// `MINIMUM_CPU_UPDATE_INTERVAL` of wall time.
pub struct CpuCollector {
    metadata: CollectorMetadata,
}

impl CpuCollector {
    pub fn new() -> Self {
        Self {
            metadata: CollectorMetadata::new(
                "cpu",
                "CPU",
                "Processor model and overall usage",
                &[Field::Cpu, Field::CpuUsage],
            ),
        }
    }
}

impl Default for CpuCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FactCollector for CpuCollector {
    fn metadata(&self) -> &CollectorMetadata {
        &self.metadata
    }

    fn collect(&mut self, toggles: &ToggleSet, facts: &mut FactRecord) -> Result<()> {
        let mut system =
            System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::everything()));

        if toggles.is_enabled(Field::Cpu) {
            let brand = system
                .cpus()
                .first()
                .map(|cpu| cpu.brand().trim().to_string())
                .ok_or_else(|| anyhow!("sysinfo reported no CPUs"))?;
            facts.set(Field::Cpu, brand);
        }

        if toggles.is_enabled(Field::CpuUsage) {
            std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
            system.refresh_cpu_usage();
            facts.set(Field::CpuUsage, format!("{:.1}%", system.global_cpu_usage()));
        }

        Ok(())
    }
}
