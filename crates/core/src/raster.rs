//! Image rasterizer capability

use pulsefetch_types::GridSize;
use std::path::Path;
use thiserror::Error;

/// Terminal graphics encoding requested from the rasterizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicsEncoding {
    /// Kitty graphics protocol
    Kitty,
    /// DEC sixel
    Sixel,
    /// Unicode block/symbol approximation, works everywhere
    Symbols,
}

/// Terminal name fragments per encoding. Checked top to bottom; the first
/// category with a matching fragment wins.
const ENCODING_TABLE: &[(&[&str], GraphicsEncoding)] = &[
    (&["kitty", "ghostty"], GraphicsEncoding::Kitty),
    (&["wezterm", "foot", "mlterm"], GraphicsEncoding::Sixel),
];

impl GraphicsEncoding {
    /// Pick an encoding from a terminal name (case-insensitive substring match)
    pub fn for_terminal(terminal_name: &str) -> Self {
        let name = terminal_name.to_lowercase();
        ENCODING_TABLE
            .iter()
            .find(|(fragments, _)| fragments.iter().any(|fragment| name.contains(fragment)))
            .map(|(_, encoding)| *encoding)
            .unwrap_or(GraphicsEncoding::Symbols)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GraphicsEncoding::Kitty => "kitty",
            GraphicsEncoding::Sixel => "sixel",
            GraphicsEncoding::Symbols => "symbols",
        }
    }
}

/// Output of a successful rasterization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Escape-sequence payload, written verbatim to the terminal
    pub content: String,
    /// Grid the rasterizer was asked to fill
    pub requested: GridSize,
}

/// Errors from the rasterizer. These never reach the user; the logo
/// resolver falls back to ASCII art.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("{0} executable not found in PATH")]
    NotFound(String),

    #[error("image file not found: {0}")]
    MissingImage(String),

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {output}")]
    Failed {
        program: String,
        status: String,
        output: String,
    },
}

/// Converts an image file into terminal-graphics output sized to a cell grid
pub trait Rasterizer {
    fn rasterize(
        &self,
        image_path: &Path,
        terminal_name: &str,
        grid: GridSize,
    ) -> Result<RasterImage, RasterError>;
}
