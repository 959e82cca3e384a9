//! GTK theme and icon theme

use crate::util::home_dir;
use anyhow::{anyhow, Context, Result};
use pulsefetch_core::{CollectorMetadata, FactCollector};
use pulsefetch_types::{FactRecord, Field, ToggleSet};
use std::path::PathBuf;

const THEME_KEY: &str = "gtk-theme-name";
const ICONS_KEY: &str = "gtk-icon-theme-name";

/// GTK theme collector, reads `~/.config/gtk-3.0/settings.ini`
pub struct GtkThemeCollector {
    metadata: CollectorMetadata,
    settings_path: Option<PathBuf>,
}

impl GtkThemeCollector {
    pub fn new() -> Self {
        let settings_path = home_dir().map(|home| home.join(".config/gtk-3.0/settings.ini"));
        Self::with_settings_path(settings_path)
    }

    pub fn with_settings_path(settings_path: Option<PathBuf>) -> Self {
        Self {
            metadata: CollectorMetadata::new(
                "gtk_theme",
                "GTK Theme",
                "GTK widget and icon themes",
                &[Field::Theme, Field::Icons],
            ),
            settings_path,
        }
    }
}

impl Default for GtkThemeCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FactCollector for GtkThemeCollector {
    fn metadata(&self) -> &CollectorMetadata {
        &self.metadata
    }

    fn collect(&mut self, toggles: &ToggleSet, facts: &mut FactRecord) -> Result<()> {
        let path = self
            .settings_path
            .as_ref()
            .ok_or_else(|| anyhow!("no home directory"))?;
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        if toggles.is_enabled(Field::Theme) {
            if let Some(theme) = parse_gtk_setting(&content, THEME_KEY) {
                facts.set(Field::Theme, theme);
            }
        }
        if toggles.is_enabled(Field::Icons) {
            if let Some(icons) = parse_gtk_setting(&content, ICONS_KEY) {
                facts.set(Field::Icons, icons);
            }
        }

        Ok(())
    }

    fn is_available(&self) -> bool {
        self.settings_path.as_ref().is_some_and(|path| path.is_file())
    }
}

/// Value of `key = value` in a GTK settings.ini
pub fn parse_gtk_setting(content: &str, key: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let (name, value) = line.trim().split_once('=')?;
        if name.trim() == key {
            Some(value.trim().to_string())
        } else {
            None
        }
    })
}
