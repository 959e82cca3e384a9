//! Foundational color type used by the info panel and logo styling.

use serde::{Deserialize, Serialize};

/// Terminal color, either an ANSI 256-palette index or a 24-bit RGB value.
///
/// In TOML this is written as a bare integer (`accent = 39`) or as an inline
/// table (`accent = { r = 0, g = 175, b = 255 }`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Color {
    Ansi(u8),
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Bright azure, used for keys, the title and ASCII logos
    pub const ACCENT: Color = Color::Ansi(39);
    /// Near-white, used for values and the title separator
    pub const TEXT: Color = Color::Ansi(255);

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Convert to a crossterm color
    #[cfg(feature = "crossterm")]
    pub fn to_crossterm(&self) -> crossterm::style::Color {
        match *self {
            Color::Ansi(index) => crossterm::style::Color::AnsiValue(index),
            Color::Rgb { r, g, b } => crossterm::style::Color::Rgb { r, g, b },
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TEXT
    }
}
