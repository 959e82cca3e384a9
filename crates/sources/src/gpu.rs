//! GPU names from the PCI bus

use crate::util::run_command;
use anyhow::Result;
use pulsefetch_core::{CollectorMetadata, FactCollector};
use pulsefetch_types::{FactRecord, Field, ToggleSet};

/// PCI class names that identify display adapters (lowercase)
const GPU_CLASSES: &[&str] = &["vga", "3d controller", "display controller"];

/// GPU collector
///
/// Produces one entry per adapter, so hybrid laptops show both GPUs on
/// separate panel lines.
pub struct GpuCollector {
    metadata: CollectorMetadata,
}

impl GpuCollector {
    pub fn new() -> Self {
        Self {
            metadata: CollectorMetadata::new(
                "gpu",
                "GPU",
                "Display adapters reported by lspci",
                &[Field::Gpu],
            ),
        }
    }
}

impl Default for GpuCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FactCollector for GpuCollector {
    fn metadata(&self) -> &CollectorMetadata {
        &self.metadata
    }

    fn collect(&mut self, toggles: &ToggleSet, facts: &mut FactRecord) -> Result<()> {
        if toggles.is_enabled(Field::Gpu) {
            let output = run_command("lspci", &["-mm"])?;
            let gpus = parse_lspci(&output);
            log::debug!("lspci reported {} GPU(s)", gpus.len());
            facts.set(Field::Gpu, gpus);
        }
        Ok(())
    }
}

/// Extract "vendor device" for every display adapter in `lspci -mm` output.
///
/// Machine-readable lines look like
/// `00:02.0 "VGA compatible controller" "Intel Corporation" "UHD Graphics 620" ...`
pub fn parse_lspci(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| {
            let lower = line.to_lowercase();
            GPU_CLASSES.iter().any(|class| lower.contains(class))
        })
        .filter_map(|line| {
            let parts: Vec<&str> = line.split('"').collect();
            if parts.len() >= 6 {
                Some(format!("{} {}", parts[3], parts[5]))
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LSPCI: &str = r#"00:00.0 "Host bridge" "Intel Corporation" "Device 9b61" -r0c "Lenovo" "Device 5089"
00:02.0 "VGA compatible controller" "Intel Corporation" "UHD Graphics" -r02 "Lenovo" "Device 5089"
00:14.0 "USB controller" "Intel Corporation" "Comet Lake USB 3.1 xHCI Host Controller" "Lenovo" "Device 5089"
01:00.0 "3D controller" "NVIDIA Corporation" "GP108M [GeForce MX330]" -ra1 "Lenovo" "Device 5089"
"#;

    #[test]
    fn test_parse_lspci() {
        assert_eq!(
            parse_lspci(LSPCI),
            vec![
                "Intel Corporation UHD Graphics".to_string(),
                "NVIDIA Corporation GP108M [GeForce MX330]".to_string(),
            ]
        );
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        assert!(parse_lspci("00:02.0 VGA compatible controller without quotes\n").is_empty());
        assert!(parse_lspci("").is_empty());
    }
}
