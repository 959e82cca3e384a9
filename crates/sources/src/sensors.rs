//! Temperature sensors

use anyhow::{anyhow, Result};
use pulsefetch_core::{CollectorMetadata, FactCollector};
use pulsefetch_types::{FactRecord, Field, ToggleSet};
use sysinfo::Components;

/// Label fragments that mark CPU package sensors (lowercase)
const CPU_SENSOR_HINTS: &[&str] = &["cpu", "package", "tctl"];

/// Sensors collector
///
/// Reports the hottest CPU package sensor; falls back to the hottest sensor
/// of any kind when no CPU sensor is exposed.
pub struct SensorsCollector {
    metadata: CollectorMetadata,
}

impl SensorsCollector {
    pub fn new() -> Self {
        Self {
            metadata: CollectorMetadata::new(
                "sensors",
                "Sensors",
                "Hottest CPU temperature sensor",
                &[Field::Sensors],
            ),
        }
    }
}

impl Default for SensorsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FactCollector for SensorsCollector {
    fn metadata(&self) -> &CollectorMetadata {
        &self.metadata
    }

    fn collect(&mut self, toggles: &ToggleSet, facts: &mut FactRecord) -> Result<()> {
        if toggles.is_enabled(Field::Sensors) {
            let components = Components::new_with_refreshed_list();
            let readings: Vec<(String, f32)> = components
                .iter()
                .map(|component| (component.label().to_string(), component.temperature()))
                .collect();
            log::debug!("Found {} temperature sensors", readings.len());

            let reading = pick_sensor(&readings).ok_or_else(|| anyhow!("no temperature sensors"))?;
            facts.set(Field::Sensors, reading);
        }
        Ok(())
    }
}

/// Format the most relevant reading as "label: 54.0°C"
pub fn pick_sensor(readings: &[(String, f32)]) -> Option<String> {
    let valid: Vec<&(String, f32)> = readings
        .iter()
        .filter(|(_, celsius)| celsius.is_finite() && *celsius > 0.0)
        .collect();

    let is_cpu = |label: &str| {
        let label = label.to_lowercase();
        CPU_SENSOR_HINTS.iter().any(|hint| label.contains(hint))
    };

    let hottest_cpu = valid
        .iter()
        .filter(|(label, _)| is_cpu(label))
        .max_by(|a, b| a.1.total_cmp(&b.1));
    let hottest_any = valid.iter().max_by(|a, b| a.1.total_cmp(&b.1));

    hottest_cpu
        .or(hottest_any)
        .map(|(label, celsius)| format!("{}: {:.1}°C", label, celsius))
}
