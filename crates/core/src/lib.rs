//! pulsefetch-core: Core traits and registry for pulsefetch.
//!
//! This crate contains the fundamental traits (FactCollector, Rasterizer,
//! TerminalResolver), the CollectorRegistry, and shared constants.

pub mod constants;
mod collector;
mod raster;
mod registry;
mod terminal;

pub use constants::{BYTES_PER_GIB, BYTES_PER_MIB};
pub use collector::{BoxedCollector, CollectorMetadata, FactCollector};
pub use raster::{GraphicsEncoding, RasterError, RasterImage, Rasterizer};
pub use registry::{CollectorFactory, CollectorInfo, CollectorRegistry};
pub use terminal::TerminalResolver;

// Re-export types used in trait signatures for convenience
pub use pulsefetch_types::{FactRecord, FactValue, Field, GridSize, ToggleSet};
