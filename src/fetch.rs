//! Fact collection pipeline

use pulsefetch_core::{CollectorRegistry, FactCollector};
use pulsefetch_types::{FactRecord, ToggleSet};
use std::time::Instant;

/// Run every wanted collector in registration order.
///
/// Failures never abort the run: a collector that errors leaves its
/// fields absent and the error is logged at debug level.
pub fn collect_facts(registry: &CollectorRegistry, toggles: &ToggleSet) -> FactRecord {
    let started = Instant::now();
    let mut facts = FactRecord::new();
    let mut ran = 0;

    for mut collector in registry.create_all() {
        if run_collector(collector.as_mut(), toggles, &mut facts) {
            ran += 1;
        }
    }

    log::info!(
        "Collected {} facts from {} collectors in {:?}",
        facts.len(),
        ran,
        started.elapsed()
    );
    facts
}

/// Run one collector if this run needs it. Returns whether it ran.
pub fn run_collector(
    collector: &mut dyn FactCollector,
    toggles: &ToggleSet,
    facts: &mut FactRecord,
) -> bool {
    let id = collector.metadata().id.clone();

    if !collector.is_wanted(toggles) {
        log::trace!("Skipping collector '{}': no fields enabled", id);
        return false;
    }
    if !collector.is_available() {
        log::debug!("Collector '{}' is not available on this system", id);
        return false;
    }

    if let Err(e) = collector.collect(toggles, facts) {
        log::debug!("Collector '{}' failed: {:#}", id, e);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{bail, Result};
    use pulsefetch_core::{register_collector, CollectorMetadata};
    use pulsefetch_types::Field;

    struct OsProbe {
        metadata: CollectorMetadata,
    }

    impl Default for OsProbe {
        fn default() -> Self {
            Self {
                metadata: CollectorMetadata::new("os", "OS", "test probe", &[Field::Os, Field::Kernel]),
            }
        }
    }

    impl FactCollector for OsProbe {
        fn metadata(&self) -> &CollectorMetadata {
            &self.metadata
        }

        fn collect(&mut self, toggles: &ToggleSet, facts: &mut FactRecord) -> Result<()> {
            if toggles.is_enabled(Field::Os) {
                facts.set(Field::Os, "Arch Linux");
            }
            if toggles.is_enabled(Field::Kernel) {
                facts.set(Field::Kernel, "6.9.1-arch1");
            }
            Ok(())
        }
    }

    /// Writes a partial value, then fails
    struct BrokenProbe {
        metadata: CollectorMetadata,
    }

    impl Default for BrokenProbe {
        fn default() -> Self {
            Self {
                metadata: CollectorMetadata::new("gpu", "GPU", "test probe", &[Field::Gpu]),
            }
        }
    }

    impl FactCollector for BrokenProbe {
        fn metadata(&self) -> &CollectorMetadata {
            &self.metadata
        }

        fn collect(&mut self, _toggles: &ToggleSet, _facts: &mut FactRecord) -> Result<()> {
            bail!("lspci not installed")
        }
    }

    struct Unavailable {
        metadata: CollectorMetadata,
    }

    impl Default for Unavailable {
        fn default() -> Self {
            Self {
                metadata: CollectorMetadata::new("battery", "Battery", "test probe", &[Field::Battery]),
            }
        }
    }

    impl FactCollector for Unavailable {
        fn metadata(&self) -> &CollectorMetadata {
            &self.metadata
        }

        fn collect(&mut self, _toggles: &ToggleSet, facts: &mut FactRecord) -> Result<()> {
            facts.set(Field::Battery, "100%");
            Ok(())
        }

        fn is_available(&self) -> bool {
            false
        }
    }

    fn registry() -> CollectorRegistry {
        let mut registry = CollectorRegistry::new();
        register_collector!(registry, "os", "OS", OsProbe);
        register_collector!(registry, "gpu", "GPU", BrokenProbe);
        register_collector!(registry, "battery", "Battery", Unavailable);
        registry
    }

    #[test]
    fn test_failures_become_absent_values() {
        let facts = collect_facts(&registry(), &ToggleSet::all());
        assert_eq!(facts.text(Field::Os.key()), "Arch Linux");
        assert!(facts.field(Field::Gpu).is_none());
        assert!(facts.field(Field::Battery).is_none());
    }

    #[test]
    fn test_only_toggled_fields_are_written() {
        let toggles = ToggleSet::new().with(Field::Kernel, true);
        let facts = collect_facts(&registry(), &toggles);
        assert!(facts.field(Field::Os).is_none());
        assert_eq!(facts.text("kernel"), "6.9.1-arch1");
        assert_eq!(facts.len(), 1);
    }

    #[test]
    fn test_run_collector_skips_unwanted() {
        let mut probe = OsProbe::default();
        let mut facts = FactRecord::new();
        assert!(!run_collector(&mut probe, &ToggleSet::new(), &mut facts));
        assert!(facts.is_empty());

        let mut broken = BrokenProbe::default();
        assert!(run_collector(&mut broken, &ToggleSet::all(), &mut facts));
        assert!(facts.is_empty());
    }
}
