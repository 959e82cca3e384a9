//! Panel styling

use crossterm::style::{style, Stylize};
use pulsefetch_types::Color;

use crate::config::ColorConfig;

/// Colors used while rendering, passed explicitly into each render call.
///
/// A plain style emits no escape sequences at all, which keeps output
/// byte-exact for pipes and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelStyle {
    accent: Color,
    text: Color,
    enabled: bool,
}

impl PanelStyle {
    pub fn new(accent: Color, text: Color) -> Self {
        Self {
            accent,
            text,
            enabled: true,
        }
    }

    /// No colors or attributes
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn from_config(colors: &ColorConfig) -> Self {
        Self::new(colors.accent, colors.text)
    }

    /// Row labels
    pub fn key(&self, text: &str) -> String {
        self.paint(text, self.accent, true)
    }

    /// Row values
    pub fn value(&self, text: &str) -> String {
        self.paint(text, self.text, false)
    }

    /// The user@host line
    pub fn title(&self, text: &str) -> String {
        self.paint(text, self.accent, true)
    }

    /// The dash rule under the title
    pub fn separator(&self, text: &str) -> String {
        self.paint(text, self.text, false)
    }

    /// One line of ASCII art
    pub fn logo(&self, text: &str) -> String {
        self.paint(text, self.accent, true)
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.enabled || text.is_empty() {
            return text.to_string();
        }

        let styled = style(text).with(color.to_crossterm());
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self::new(Color::ACCENT, Color::TEXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_style_is_identity() {
        let style = PanelStyle::plain();
        assert_eq!(style.key("OS  "), "OS  ");
        assert_eq!(style.value("Arch Linux"), "Arch Linux");
        assert_eq!(style.logo("  /__/"), "  /__/");
    }

    #[test]
    fn test_colored_style_wraps_text() {
        let style = PanelStyle::default();
        let key = style.key("OS");
        assert!(key.contains("OS"));
        assert!(key.contains("\x1b["));
        assert!(key.contains("38;5;39"));
        assert!(style.value("x").contains("38;5;255"));
    }

    #[test]
    fn test_empty_text_is_never_styled() {
        assert_eq!(PanelStyle::default().logo(""), "");
    }
}
