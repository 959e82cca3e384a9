//! `chafa` rasterizer backend

use pulsefetch_core::{GraphicsEncoding, RasterError, RasterImage, Rasterizer};
use pulsefetch_types::GridSize;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

const CHAFA: &str = "chafa";

/// Runs `chafa` to turn an image into terminal graphics
#[derive(Debug, Clone)]
pub struct ChafaRasterizer {
    program: String,
}

impl ChafaRasterizer {
    pub fn new() -> Self {
        Self::with_program(CHAFA)
    }

    /// Use a different executable (name or path)
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments passed to chafa for one image
    pub fn chafa_args(image_path: &Path, encoding: GraphicsEncoding, grid: GridSize) -> Vec<String> {
        vec![
            "-s".to_string(),
            format!("{}x{}", grid.width, grid.height),
            "--animate=off".to_string(),
            "--polite=on".to_string(),
            "-f".to_string(),
            encoding.as_str().to_string(),
            image_path.to_string_lossy().into_owned(),
        ]
    }
}

impl Default for ChafaRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for ChafaRasterizer {
    fn rasterize(
        &self,
        image_path: &Path,
        terminal_name: &str,
        grid: GridSize,
    ) -> Result<RasterImage, RasterError> {
        if !image_path.is_file() {
            return Err(RasterError::MissingImage(image_path.display().to_string()));
        }

        let encoding = GraphicsEncoding::for_terminal(terminal_name);
        log::debug!(
            "Rasterizing {} as {} for terminal '{}'",
            image_path.display(),
            encoding.as_str(),
            terminal_name
        );

        let output = Command::new(&self.program)
            .args(Self::chafa_args(image_path, encoding, grid))
            .output()
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => RasterError::NotFound(self.program.clone()),
                _ => RasterError::Spawn {
                    program: self.program.clone(),
                    source,
                },
            })?;

        if !output.status.success() {
            let mut detail = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if detail.is_empty() {
                detail = String::from_utf8_lossy(&output.stdout).trim().to_string();
            }
            return Err(RasterError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                output: detail,
            });
        }

        Ok(RasterImage {
            content: String::from_utf8_lossy(&output.stdout).into_owned(),
            requested: grid,
        })
    }
}
