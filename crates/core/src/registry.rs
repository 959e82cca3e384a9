//! Registry for fact collectors

use super::BoxedCollector;

/// Function that creates a fact collector
pub type CollectorFactory = fn() -> BoxedCollector;

/// Information about a registered collector
#[derive(Debug, Clone)]
pub struct CollectorInfo {
    /// Collector ID (e.g., "cpu")
    pub id: String,
    /// Display name (e.g., "CPU")
    pub display_name: String,
}

/// Registry of fact collectors
///
/// Collectors are kept in registration order, which is also the order the
/// fetch pipeline runs them in.
pub struct CollectorRegistry {
    collectors: Vec<(CollectorInfo, CollectorFactory)>,
}

impl CollectorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            collectors: Vec::new(),
        }
    }

    /// Register a collector. Re-registering an ID replaces the factory in place.
    pub fn register(&mut self, id: &str, display_name: &str, factory: CollectorFactory) {
        let info = CollectorInfo {
            id: id.to_string(),
            display_name: display_name.to_string(),
        };

        if let Some(slot) = self.collectors.iter_mut().find(|(existing, _)| existing.id == id) {
            log::debug!("Replacing collector '{}'", id);
            *slot = (info, factory);
        } else {
            self.collectors.push((info, factory));
        }
    }

    /// Instantiate every registered collector, in registration order
    pub fn create_all(&self) -> Vec<BoxedCollector> {
        self.collectors.iter().map(|(_, factory)| factory()).collect()
    }

    /// List all registered collectors
    pub fn list(&self) -> Vec<CollectorInfo> {
        self.collectors.iter().map(|(info, _)| info.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.collectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collectors.is_empty()
    }
}

impl Default for CollectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Macro to register a collector that implements `Default`
#[macro_export]
macro_rules! register_collector {
    ($registry:expr, $id:expr, $name:expr, $type:ty) => {
        $registry.register($id, $name, || Box::new(<$type>::default()));
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CollectorMetadata, FactCollector};
    use anyhow::Result;
    use pulsefetch_types::{FactRecord, Field, ToggleSet};

    struct Dummy {
        metadata: CollectorMetadata,
    }

    impl Default for Dummy {
        fn default() -> Self {
            Self {
                metadata: CollectorMetadata::new("dummy", "Dummy", "test collector", &[Field::Os]),
            }
        }
    }

    impl FactCollector for Dummy {
        fn metadata(&self) -> &CollectorMetadata {
            &self.metadata
        }

        fn collect(&mut self, _toggles: &ToggleSet, facts: &mut FactRecord) -> Result<()> {
            facts.set(Field::Os, "Dummy OS");
            Ok(())
        }
    }

    #[test]
    fn test_registration_order_is_kept() {
        let mut registry = CollectorRegistry::new();
        register_collector!(registry, "b", "B", Dummy);
        register_collector!(registry, "a", "A", Dummy);
        register_collector!(registry, "b", "B again", Dummy);

        let ids: Vec<String> = registry.list().into_iter().map(|info| info.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(registry.list()[0].display_name, "B again");
        assert_eq!(registry.create_all().len(), 2);
    }
}
