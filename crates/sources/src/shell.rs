//! Login shell

use crate::util::env_nonempty;
use anyhow::Result;
use pulsefetch_core::{CollectorMetadata, FactCollector};
use pulsefetch_types::{FactRecord, Field, ToggleSet};
use std::path::Path;

/// Shell collector, reads `$SHELL`
pub struct ShellCollector {
    metadata: CollectorMetadata,
}

impl ShellCollector {
    pub fn new() -> Self {
        Self {
            metadata: CollectorMetadata::new("shell", "Shell", "Login shell from $SHELL", &[Field::Shell]),
        }
    }
}

impl Default for ShellCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FactCollector for ShellCollector {
    fn metadata(&self) -> &CollectorMetadata {
        &self.metadata
    }

    fn collect(&mut self, toggles: &ToggleSet, facts: &mut FactRecord) -> Result<()> {
        if toggles.is_enabled(Field::Shell) {
            if let Some(shell) = env_nonempty("SHELL").and_then(|path| shell_name(&path)) {
                facts.set(Field::Shell, shell);
            }
        }
        Ok(())
    }
}

/// Last path component of a shell path, e.g. "/usr/bin/zsh" -> "zsh"
pub fn shell_name(path: &str) -> Option<String> {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
}
