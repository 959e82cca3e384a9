//! pulsefetch: a system information fetch tool for the terminal
//!
//! This library provides:
//! - Configuration loading (TOML toggles, logo and color options)
//! - The fact collection pipeline over the built-in collectors
//! - The info panel builder, logo resolver and terminal compositor

pub mod config;
pub mod fetch;
pub mod ui;

// Re-export commonly used types
pub use config::{AppConfig, ImageMode};
pub use fetch::collect_facts;
pub use ui::{InfoPanel, LogoResolver, PanelStyle};
