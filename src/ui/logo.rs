//! Logo selection: raster image when possible, built-in ASCII art otherwise

use pulsefetch_core::Rasterizer;
use pulsefetch_types::{GridSize, LogoBlock};

use super::assets::AsciiLogo;
use crate::config::{AppConfig, ImageMode};

/// Picks the logo for one run
pub struct LogoResolver<'a> {
    rasterizer: &'a dyn Rasterizer,
    grid: GridSize,
}

impl<'a> LogoResolver<'a> {
    pub fn new(rasterizer: &'a dyn Rasterizer) -> Self {
        Self {
            rasterizer,
            grid: GridSize::RASTER_DEFAULT,
        }
    }

    /// Resolve the logo block.
    ///
    /// Raster failures are never shown to the user; they are logged at
    /// debug level and the ASCII art is used instead.
    pub fn resolve(&self, config: &AppConfig, terminal_name: &str) -> LogoBlock {
        if config.image_mode == ImageMode::None {
            return LogoBlock::empty();
        }

        if let Some(path) = &config.image_path {
            if path.is_file() {
                match self.rasterizer.rasterize(path, terminal_name, self.grid) {
                    Ok(image) => return LogoBlock::raster(image.content, image.requested),
                    Err(e) => log::debug!("Image logo unavailable, using ASCII art: {}", e),
                }
            } else {
                log::debug!("Image {} not found, using ASCII art", path.display());
            }
        }

        ascii_block(config.ascii_logo)
    }
}

/// Text block for a built-in logo
pub fn ascii_block(logo: AsciiLogo) -> LogoBlock {
    LogoBlock::text(logo.art())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsefetch_core::{RasterError, RasterImage};
    use pulsefetch_types::LogoKind;
    use std::cell::{Cell, RefCell};
    use std::path::{Path, PathBuf};

    struct FailingRasterizer;

    impl Rasterizer for FailingRasterizer {
        fn rasterize(&self, _: &Path, _: &str, _: GridSize) -> Result<RasterImage, RasterError> {
            Err(RasterError::NotFound("chafa".to_string()))
        }
    }

    /// Emits one line per requested row and remembers the terminal it saw
    #[derive(Default)]
    struct FakeRasterizer {
        calls: Cell<usize>,
        terminal: RefCell<String>,
    }

    impl Rasterizer for FakeRasterizer {
        fn rasterize(
            &self,
            _: &Path,
            terminal_name: &str,
            grid: GridSize,
        ) -> Result<RasterImage, RasterError> {
            self.calls.set(self.calls.get() + 1);
            *self.terminal.borrow_mut() = terminal_name.to_string();
            Ok(RasterImage {
                content: format!("{}\n", "#".repeat(grid.width as usize)).repeat(grid.height as usize),
                requested: grid,
            })
        }
    }

    fn image_config(dir: &tempfile::TempDir) -> AppConfig {
        let path: PathBuf = dir.path().join("logo.png");
        std::fs::write(&path, b"png").unwrap();
        AppConfig {
            image_path: Some(path),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_rasterizer_failure_falls_back_to_ascii() {
        let dir = tempfile::tempdir().unwrap();
        let config = image_config(&dir);

        let logo = LogoResolver::new(&FailingRasterizer).resolve(&config, "kitty");
        assert_eq!(logo.kind, LogoKind::Text);
        assert_eq!(logo.content, AsciiLogo::Electric.art());
    }

    #[test]
    fn test_missing_image_skips_rasterizer() {
        let rasterizer = FakeRasterizer::default();
        let config = AppConfig {
            image_path: Some(PathBuf::from("/nonexistent/pulsefetch/logo.png")),
            ..AppConfig::default()
        };

        let logo = LogoResolver::new(&rasterizer).resolve(&config, "kitty");
        assert_eq!(logo.kind, LogoKind::Text);
        assert_eq!(rasterizer.calls.get(), 0);
    }

    #[test]
    fn test_successful_raster() {
        let dir = tempfile::tempdir().unwrap();
        let config = image_config(&dir);
        let rasterizer = FakeRasterizer::default();

        let logo = LogoResolver::new(&rasterizer).resolve(&config, "WezTerm");
        assert!(logo.is_raster());
        assert_eq!(logo.width_cells, 40);
        assert_eq!(logo.height_cells, 20);
        assert_eq!(*rasterizer.terminal.borrow(), "WezTerm");
    }

    #[test]
    fn test_image_mode_none_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            image_mode: ImageMode::None,
            ..image_config(&dir)
        };
        let rasterizer = FakeRasterizer::default();

        let logo = LogoResolver::new(&rasterizer).resolve(&config, "kitty");
        assert!(logo.is_empty());
        assert_eq!(logo.kind, LogoKind::Text);
        assert_eq!(rasterizer.calls.get(), 0);
    }

    #[test]
    fn test_no_image_uses_configured_art() {
        let config = AppConfig {
            ascii_logo: AsciiLogo::Bolt,
            ..AppConfig::default()
        };
        let logo = LogoResolver::new(&FailingRasterizer).resolve(&config, "");
        assert_eq!(logo, ascii_block(AsciiLogo::Bolt));
    }
}
