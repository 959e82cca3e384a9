//! Login name and hostname for the panel title

use crate::util::env_nonempty;
use anyhow::Result;
use pulsefetch_core::{CollectorMetadata, FactCollector};
use pulsefetch_types::{FactRecord, ToggleSet, HOSTNAME_KEY, USER_KEY};
use sysinfo::System;

/// Identity collector
///
/// Always runs: the `user@hostname` title is not behind a toggle.
pub struct IdentityCollector {
    metadata: CollectorMetadata,
}

impl IdentityCollector {
    pub fn new() -> Self {
        Self {
            metadata: CollectorMetadata::new(
                "identity",
                "Identity",
                "Current user and hostname",
                &[],
            )
            .always_run(),
        }
    }
}

impl Default for IdentityCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FactCollector for IdentityCollector {
    fn metadata(&self) -> &CollectorMetadata {
        &self.metadata
    }

    fn collect(&mut self, _toggles: &ToggleSet, facts: &mut FactRecord) -> Result<()> {
        if let Some(user) = env_nonempty("USER").or_else(|| env_nonempty("LOGNAME")) {
            facts.insert(USER_KEY, user);
        }
        if let Some(hostname) = System::host_name() {
            facts.insert(HOSTNAME_KEY, hostname.trim());
        }
        Ok(())
    }
}
