//! Hardware model ("Host" row)

use crate::util::read_trimmed;
use anyhow::{anyhow, Result};
use pulsefetch_core::{CollectorMetadata, FactCollector};
use pulsefetch_types::{FactRecord, Field, ToggleSet};
use std::path::PathBuf;

const DMI_DIR: &str = "/sys/class/dmi/id";

/// DMI entries tried in order
const MODEL_FILES: &[&str] = &["product_name", "board_name"];

/// Hardware model collector, reads the DMI tables exposed in sysfs
pub struct ModelCollector {
    metadata: CollectorMetadata,
    dmi_dir: PathBuf,
}

impl ModelCollector {
    pub fn new() -> Self {
        Self::with_dmi_dir(DMI_DIR)
    }

    pub fn with_dmi_dir(dmi_dir: impl Into<PathBuf>) -> Self {
        Self {
            metadata: CollectorMetadata::new(
                "model",
                "Hardware Model",
                "Product or board name from DMI",
                &[Field::Host],
            ),
            dmi_dir: dmi_dir.into(),
        }
    }

    fn read_model(&self) -> Result<String> {
        MODEL_FILES
            .iter()
            .filter_map(|name| read_trimmed(self.dmi_dir.join(name)).ok())
            .find(|model| !model.is_empty())
            .ok_or_else(|| anyhow!("no DMI model in {}", self.dmi_dir.display()))
    }
}

impl Default for ModelCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FactCollector for ModelCollector {
    fn metadata(&self) -> &CollectorMetadata {
        &self.metadata
    }

    fn collect(&mut self, toggles: &ToggleSet, facts: &mut FactRecord) -> Result<()> {
        if toggles.is_enabled(Field::Host) {
            facts.set(Field::Host, self.read_model()?);
        }
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.dmi_dir.is_dir()
    }
}
