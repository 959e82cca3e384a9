//! Battery charge

use crate::util::read_trimmed;
use anyhow::{anyhow, Result};
use pulsefetch_core::{CollectorMetadata, FactCollector};
use pulsefetch_types::{FactRecord, Field, ToggleSet};
use std::path::{Path, PathBuf};

const POWER_SUPPLY_DIR: &str = "/sys/class/power_supply";

/// Battery collector, reads `BAT*` entries from the power_supply class
pub struct BatteryCollector {
    metadata: CollectorMetadata,
    power_supply_dir: PathBuf,
}

impl BatteryCollector {
    pub fn new() -> Self {
        Self::with_power_supply_dir(POWER_SUPPLY_DIR)
    }

    pub fn with_power_supply_dir(power_supply_dir: impl Into<PathBuf>) -> Self {
        Self {
            metadata: CollectorMetadata::new(
                "battery",
                "Battery",
                "Charge level and state of the first battery",
                &[Field::Battery],
            ),
            power_supply_dir: power_supply_dir.into(),
        }
    }

    /// First battery directory, sorted by name (BAT0 before BAT1)
    fn first_battery(&self) -> Option<PathBuf> {
        let mut batteries: Vec<PathBuf> = std::fs::read_dir(&self.power_supply_dir)
            .ok()?
            .flatten()
            .filter(|entry| entry.file_name().to_string_lossy().starts_with("BAT"))
            .map(|entry| entry.path())
            .collect();
        batteries.sort();
        batteries.into_iter().next()
    }
}

impl Default for BatteryCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FactCollector for BatteryCollector {
    fn metadata(&self) -> &CollectorMetadata {
        &self.metadata
    }

    fn collect(&mut self, toggles: &ToggleSet, facts: &mut FactRecord) -> Result<()> {
        if toggles.is_enabled(Field::Battery) {
            let battery = self.first_battery().ok_or_else(|| anyhow!("no battery present"))?;
            facts.set(Field::Battery, read_battery(&battery)?);
        }
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.first_battery().is_some()
    }
}

/// "85% (Discharging)", or just "85%" when the status is unknown
fn read_battery(battery: &Path) -> Result<String> {
    let capacity = read_trimmed(battery.join("capacity"))?;
    match read_trimmed(battery.join("status")) {
        Ok(status) if !status.is_empty() => Ok(format!("{}% ({})", capacity, status)),
        _ => Ok(format!("{}%", capacity)),
    }
}
