//! Configuration management

mod settings;

pub use settings::{AppConfig, ColorConfig, ConfigError, ImageMode};
