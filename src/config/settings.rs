//! Application configuration

use directories::ProjectDirs;
use pulsefetch_types::{Color, Field, ToggleSet};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ui::assets::AsciiLogo;

/// Name of the config file, both per-user and system-wide
const CONFIG_FILE_NAME: &str = "pulsefetch.toml";

/// System-wide config directory, consulted after the user's
const SYSTEM_CONFIG_DIR: &str = "/etc/pulsefetch";

/// Errors raised while loading or writing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unable to encode config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Logo behaviour. Unknown values in config files behave like `ascii`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(from = "String", into = "String")]
pub enum ImageMode {
    /// Show an image when `image_path` is set, ASCII art otherwise
    #[default]
    Ascii,
    /// No logo at all
    None,
}

impl ImageMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMode::Ascii => "ascii",
            ImageMode::None => "none",
        }
    }
}

impl From<String> for ImageMode {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("none") {
            ImageMode::None
        } else {
            ImageMode::Ascii
        }
    }
}

impl From<ImageMode> for String {
    fn from(mode: ImageMode) -> Self {
        mode.as_str().to_string()
    }
}

/// The two panel colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Keys, title and ASCII logo
    pub accent: Color,
    /// Values and the title separator
    pub text: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            accent: Color::ACCENT,
            text: Color::TEXT,
        }
    }
}

/// Application-wide configuration
///
/// Keys mirror the TOML file: one `show_*` switch per panel row, the logo
/// options and an optional `[colors]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub show_os: bool,
    pub show_host: bool,
    pub show_kernel: bool,
    pub show_uptime: bool,
    pub show_packages: bool,
    pub show_shell: bool,
    pub show_resolution: bool,
    pub show_de: bool,
    pub show_wm: bool,
    pub show_wm_theme: bool,
    pub show_theme: bool,
    pub show_icons: bool,
    pub show_terminal: bool,
    pub show_cpu: bool,
    pub show_gpu: bool,
    pub show_memory: bool,
    pub show_disk: bool,
    pub show_network: bool,
    pub show_battery: bool,
    pub show_sensors: bool,

    // Usage
    pub show_cpu_usage: bool,
    pub show_memory_usage: bool,
    pub show_disk_usage: bool,
    /// Accepted for compatibility; there is no such row
    pub show_network_usage: bool,
    /// Accepted for compatibility; there is no such row
    pub show_battery_usage: bool,
    /// Accepted for compatibility; there is no such row
    pub show_sensors_usage: bool,

    /// Image shown instead of ASCII art when the terminal can draw it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<PathBuf>,
    pub image_mode: ImageMode,
    /// Built-in art used when no image is shown
    pub ascii_logo: AsciiLogo,

    pub colors: ColorConfig,
}

impl AppConfig {
    /// Load configuration from the first config file found.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load() -> Result<Self, ConfigError> {
        for path in Self::search_paths() {
            if path.is_file() {
                log::info!("Loading config from {}", path.display());
                return Self::load_from_path(&path);
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Config file locations, in priority order
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(2);
        if let Some(dirs) = ProjectDirs::from("", "", "pulsefetch") {
            paths.push(dirs.config_dir().join(CONFIG_FILE_NAME));
        }
        paths.push(Path::new(SYSTEM_CONFIG_DIR).join(CONFIG_FILE_NAME));
        paths
    }

    /// Whether a panel row is switched on
    pub fn shows(&self, field: Field) -> bool {
        match field {
            Field::Os => self.show_os,
            Field::Host => self.show_host,
            Field::Kernel => self.show_kernel,
            Field::Uptime => self.show_uptime,
            Field::Packages => self.show_packages,
            Field::Shell => self.show_shell,
            Field::Resolution => self.show_resolution,
            Field::De => self.show_de,
            Field::Wm => self.show_wm,
            Field::WmTheme => self.show_wm_theme,
            Field::Theme => self.show_theme,
            Field::Icons => self.show_icons,
            Field::Terminal => self.show_terminal,
            Field::Cpu => self.show_cpu,
            Field::CpuUsage => self.show_cpu_usage,
            Field::Gpu => self.show_gpu,
            Field::Memory => self.show_memory,
            Field::MemoryUsage => self.show_memory_usage,
            Field::Disk => self.show_disk,
            Field::DiskUsage => self.show_disk_usage,
            Field::Network => self.show_network,
            Field::Battery => self.show_battery,
            Field::Sensors => self.show_sensors,
        }
    }

    /// Read-only toggle set for this run
    pub fn toggles(&self) -> ToggleSet {
        Field::ALL.iter().copied().filter(|field| self.shows(*field)).collect()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            show_os: true,
            show_host: true,
            show_kernel: true,
            show_uptime: true,
            show_packages: true,
            show_shell: true,
            show_resolution: true,
            show_de: true,
            show_wm: true,
            show_wm_theme: false,
            show_theme: false,
            show_icons: false,
            show_terminal: true,
            show_cpu: true,
            show_gpu: true,
            show_memory: true,
            show_disk: true,
            show_network: false,
            show_battery: true,
            show_sensors: false,
            show_cpu_usage: false,
            show_memory_usage: false,
            show_disk_usage: false,
            show_network_usage: false,
            show_battery_usage: false,
            show_sensors_usage: false,
            image_path: None,
            image_mode: ImageMode::Ascii,
            ascii_logo: AsciiLogo::default(),
            colors: ColorConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_toggles() {
        let toggles = AppConfig::default().toggles();
        assert!(toggles.is_enabled(Field::Os));
        assert!(toggles.is_enabled(Field::Battery));
        assert!(!toggles.is_enabled(Field::Theme));
        assert!(!toggles.is_enabled(Field::CpuUsage));
        assert_eq!(toggles.len(), 15);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
show_os = false
show_cpu_usage = true
image_path = "/home/alice/logo.png"

[colors]
accent = 208
"#,
        )
        .unwrap();

        assert!(!config.show_os);
        assert!(config.show_cpu_usage);
        assert!(config.show_kernel);
        assert_eq!(config.image_path, Some(PathBuf::from("/home/alice/logo.png")));
        assert_eq!(config.image_mode, ImageMode::Ascii);
        assert_eq!(config.colors.accent, Color::Ansi(208));
        assert_eq!(config.colors.text, Color::TEXT);
    }

    #[test]
    fn test_image_mode_parsing() {
        let config: AppConfig = toml::from_str(r#"image_mode = "none""#).unwrap();
        assert_eq!(config.image_mode, ImageMode::None);

        let config: AppConfig = toml::from_str(r#"image_mode = "image""#).unwrap();
        assert_eq!(config.image_mode, ImageMode::Ascii);
    }

    #[test]
    fn test_load_from_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            AppConfig::load_from_path(&missing),
            Err(ConfigError::Read { .. })
        ));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "show_os = maybe\n").unwrap();
        assert!(matches!(
            AppConfig::load_from_path(&broken),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.image_mode = ImageMode::None;
        config.ascii_logo = AsciiLogo::Bolt;
        config.colors.text = Color::from_rgb8(250, 250, 250);

        let text = config.to_toml_string().unwrap();
        assert!(text.contains("image_mode = \"none\""));
        assert!(!text.contains("image_path"));

        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_search_paths_end_with_system_file() {
        let paths = AppConfig::search_paths();
        assert_eq!(paths.last(), Some(&PathBuf::from("/etc/pulsefetch/pulsefetch.toml")));
    }
}
