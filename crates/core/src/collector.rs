//! Fact collector trait and related types

use anyhow::Result;
use pulsefetch_types::{FactRecord, Field, ToggleSet};

/// Metadata about a fact collector
#[derive(Debug, Clone)]
pub struct CollectorMetadata {
    /// Unique identifier for this collector
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Description of what this collector probes
    pub description: String,
    /// Displayable fields this collector fills in
    pub provides: Vec<Field>,
    /// Collectors that must run even when none of their fields are toggled
    /// (the user@host title, for instance)
    pub always_run: bool,
}

impl CollectorMetadata {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        provides: &[Field],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            provides: provides.to_vec(),
            always_run: false,
        }
    }

    pub fn always_run(mut self) -> Self {
        self.always_run = true;
        self
    }
}

/// Trait for all fact collectors
///
/// Collectors probe one area of the host (CPU, memory, desktop, ...) and
/// write what they find into the shared fact record. A collector only
/// writes fields that are toggled on. Returning an error is never fatal:
/// the pipeline logs it and the affected fields simply stay absent.
pub trait FactCollector {
    /// Get metadata about this collector
    fn metadata(&self) -> &CollectorMetadata;

    /// Probe the host and store results in `facts`
    fn collect(&mut self, toggles: &ToggleSet, facts: &mut FactRecord) -> Result<()>;

    /// Check if this collector can work on the current system
    ///
    /// For example, the battery collector is unavailable on desktops.
    fn is_available(&self) -> bool {
        true
    }

    /// Whether this run needs the collector at all
    fn is_wanted(&self, toggles: &ToggleSet) -> bool {
        let metadata = self.metadata();
        metadata.always_run || toggles.any_enabled(&metadata.provides)
    }
}

/// Type-erased collector for dynamic dispatch
pub type BoxedCollector = Box<dyn FactCollector>;

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(CollectorMetadata);

    impl FactCollector for Fixed {
        fn metadata(&self) -> &CollectorMetadata {
            &self.0
        }

        fn collect(&mut self, _toggles: &ToggleSet, facts: &mut FactRecord) -> Result<()> {
            facts.set(Field::Shell, "zsh");
            Ok(())
        }
    }

    #[test]
    fn test_is_wanted_follows_toggles() {
        let collector = Fixed(CollectorMetadata::new("shell", "Shell", "Login shell", &[Field::Shell]));
        assert!(!collector.is_wanted(&ToggleSet::new()));
        assert!(collector.is_wanted(&ToggleSet::new().with(Field::Shell, true)));
    }

    #[test]
    fn test_always_run_ignores_toggles() {
        let collector = Fixed(CollectorMetadata::new("identity", "Identity", "user@host", &[]).always_run());
        assert!(collector.is_wanted(&ToggleSet::new()));
    }
}
