//! Logo blocks handed to the terminal compositor

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// Size of a terminal cell grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Grid requested from the rasterizer for image logos
    pub const RASTER_DEFAULT: GridSize = GridSize::new(40, 20);

    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::RASTER_DEFAULT
    }
}

/// How the logo content must be placed on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogoKind {
    /// Terminal-graphics payload (kitty, sixel or block symbols)
    Raster,
    /// Plain ASCII art
    Text,
}

/// Logo content plus the cell dimensions the compositor lays out against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoBlock {
    pub kind: LogoKind,
    pub content: String,
    pub width_cells: u16,
    pub height_cells: u16,
}

impl LogoBlock {
    /// ASCII art logo. Height is the number of line breaks, width the
    /// widest line in terminal columns.
    pub fn text(content: impl Into<String>) -> Self {
        let content = content.into();
        let width = content.lines().map(UnicodeWidthStr::width).max().unwrap_or(0);

        Self {
            kind: LogoKind::Text,
            width_cells: saturate(width),
            height_cells: saturate(count_line_breaks(&content)),
            content,
        }
    }

    /// Suppressed logo
    pub fn empty() -> Self {
        Self::text(String::new())
    }

    /// Rasterized image. `requested` is the grid the rasterizer was asked
    /// for; the height is measured from the payload since it can differ.
    pub fn raster(content: impl Into<String>, requested: GridSize) -> Self {
        let content = content.into();
        Self {
            kind: LogoKind::Raster,
            width_cells: requested.width,
            height_cells: saturate(count_line_breaks(&content)),
            content,
        }
    }

    pub fn is_raster(&self) -> bool {
        self.kind == LogoKind::Raster
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Number of `\n` in `content`
pub fn count_line_breaks(content: &str) -> usize {
    content.bytes().filter(|byte| *byte == b'\n').count()
}

fn saturate(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_dimensions() {
        let logo = LogoBlock::text("\n  /\\\n /  \\\n/____\\\n");
        assert_eq!(logo.kind, LogoKind::Text);
        assert_eq!(logo.height_cells, 4);
        assert_eq!(logo.width_cells, 6);
    }

    #[test]
    fn test_text_width_counts_terminal_columns() {
        let logo = LogoBlock::text("\n日本\nab\n");
        assert_eq!(logo.width_cells, 4);
        assert_eq!(logo.height_cells, 3);
    }

    #[test]
    fn test_raster_uses_requested_width_and_measured_height() {
        let payload = "row\n".repeat(17);
        let logo = LogoBlock::raster(payload, GridSize::RASTER_DEFAULT);
        assert!(logo.is_raster());
        assert_eq!(logo.width_cells, 40);
        assert_eq!(logo.height_cells, 17);
    }

    #[test]
    fn test_empty_logo() {
        let logo = LogoBlock::empty();
        assert!(logo.is_empty());
        assert_eq!(logo.height_cells, 0);
        assert_eq!(logo.width_cells, 0);
    }
}
