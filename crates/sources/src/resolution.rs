//! Screen resolution

use crate::util::run_command;
use anyhow::{anyhow, Result};
use pulsefetch_core::{CollectorMetadata, FactCollector};
use pulsefetch_types::{FactRecord, Field, ToggleSet};

/// Resolution collector, reads the active mode from `xrandr`
pub struct ResolutionCollector {
    metadata: CollectorMetadata,
}

impl ResolutionCollector {
    pub fn new() -> Self {
        Self {
            metadata: CollectorMetadata::new(
                "resolution",
                "Resolution",
                "Current display mode",
                &[Field::Resolution],
            ),
        }
    }
}

impl Default for ResolutionCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FactCollector for ResolutionCollector {
    fn metadata(&self) -> &CollectorMetadata {
        &self.metadata
    }

    fn collect(&mut self, toggles: &ToggleSet, facts: &mut FactRecord) -> Result<()> {
        if toggles.is_enabled(Field::Resolution) {
            let output = run_command("xrandr", &[])?;
            let mode = parse_xrandr(&output).ok_or_else(|| anyhow!("no active xrandr mode"))?;
            facts.set(Field::Resolution, mode);
        }
        Ok(())
    }
}

/// First mode marked current (`*`) in xrandr output
pub fn parse_xrandr(output: &str) -> Option<String> {
    output
        .lines()
        .find(|line| line.contains('*'))
        .and_then(|line| line.split_whitespace().next())
        .map(str::to_string)
}
