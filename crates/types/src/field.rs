//! Displayable fact fields and the toggle set that selects them

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A fact that can appear as a row in the info panel.
///
/// Variant order is the canonical display order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Os,
    Host,
    Kernel,
    Uptime,
    Packages,
    Shell,
    Resolution,
    De,
    Wm,
    WmTheme,
    Theme,
    Icons,
    Terminal,
    Cpu,
    CpuUsage,
    Gpu,
    Memory,
    MemoryUsage,
    Disk,
    DiskUsage,
    Network,
    Battery,
    Sensors,
}

impl Field {
    /// Every field, in canonical display order
    pub const ALL: [Field; 23] = [
        Field::Os,
        Field::Host,
        Field::Kernel,
        Field::Uptime,
        Field::Packages,
        Field::Shell,
        Field::Resolution,
        Field::De,
        Field::Wm,
        Field::WmTheme,
        Field::Theme,
        Field::Icons,
        Field::Terminal,
        Field::Cpu,
        Field::CpuUsage,
        Field::Gpu,
        Field::Memory,
        Field::MemoryUsage,
        Field::Disk,
        Field::DiskUsage,
        Field::Network,
        Field::Battery,
        Field::Sensors,
    ];

    /// Label shown in the key column
    pub fn label(&self) -> &'static str {
        match self {
            Field::Os => "OS",
            Field::Host => "Host",
            Field::Kernel => "Kernel",
            Field::Uptime => "Uptime",
            Field::Packages => "Packages",
            Field::Shell => "Shell",
            Field::Resolution => "Resolution",
            Field::De => "DE",
            Field::Wm => "WM",
            Field::WmTheme => "WM Theme",
            Field::Theme => "Theme",
            Field::Icons => "Icons",
            Field::Terminal => "Terminal",
            Field::Cpu => "CPU",
            Field::CpuUsage => "CPU Usage",
            Field::Gpu => "GPU",
            Field::Memory => "Memory",
            Field::MemoryUsage => "Memory Usage",
            Field::Disk => "Disk",
            Field::DiskUsage => "Disk Usage",
            Field::Network => "Network",
            Field::Battery => "Battery",
            Field::Sensors => "Sensors",
        }
    }

    /// Key used in fact records (and, prefixed with `show_`, in config files)
    pub fn key(&self) -> &'static str {
        match self {
            Field::Os => "os",
            Field::Host => "host",
            Field::Kernel => "kernel",
            Field::Uptime => "uptime",
            Field::Packages => "packages",
            Field::Shell => "shell",
            Field::Resolution => "resolution",
            Field::De => "de",
            Field::Wm => "wm",
            Field::WmTheme => "wm_theme",
            Field::Theme => "theme",
            Field::Icons => "icons",
            Field::Terminal => "terminal",
            Field::Cpu => "cpu",
            Field::CpuUsage => "cpu_usage",
            Field::Gpu => "gpu",
            Field::Memory => "memory",
            Field::MemoryUsage => "memory_usage",
            Field::Disk => "disk",
            Field::DiskUsage => "disk_usage",
            Field::Network => "network",
            Field::Battery => "battery",
            Field::Sensors => "sensors",
        }
    }
}

/// The set of fields switched on for this run.
///
/// Built once from configuration and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleSet {
    enabled: BTreeSet<Field>,
}

impl ToggleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle set with every field enabled
    pub fn all() -> Self {
        Field::ALL.iter().copied().collect()
    }

    /// Builder-style toggle used while assembling the set
    pub fn with(mut self, field: Field, enabled: bool) -> Self {
        if enabled {
            self.enabled.insert(field);
        } else {
            self.enabled.remove(&field);
        }
        self
    }

    pub fn is_enabled(&self, field: Field) -> bool {
        self.enabled.contains(&field)
    }

    /// True if at least one of `fields` is enabled
    pub fn any_enabled(&self, fields: &[Field]) -> bool {
        fields.iter().any(|field| self.is_enabled(*field))
    }

    /// Enabled fields in canonical order
    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        self.enabled.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.enabled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }
}

impl FromIterator<Field> for ToggleSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            enabled: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_sorted_canonically() {
        let mut sorted = Field::ALL;
        sorted.sort();
        assert_eq!(sorted, Field::ALL);
        assert_eq!(Field::ALL.first(), Some(&Field::Os));
        assert_eq!(Field::ALL.last(), Some(&Field::Sensors));
    }

    #[test]
    fn test_toggle_set_iterates_in_canonical_order() {
        let toggles = ToggleSet::new()
            .with(Field::Sensors, true)
            .with(Field::Cpu, true)
            .with(Field::Os, true)
            .with(Field::Cpu, false);

        let fields: Vec<Field> = toggles.iter().collect();
        assert_eq!(fields, vec![Field::Os, Field::Sensors]);
        assert!(toggles.any_enabled(&[Field::Gpu, Field::Os]));
        assert!(!toggles.any_enabled(&[Field::Gpu, Field::Cpu]));
    }
}
