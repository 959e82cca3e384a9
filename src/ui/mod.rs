//! Terminal output: info panel, logo selection and the compositor

pub mod assets;
pub mod compositor;
pub mod logo;
pub mod panel;
pub mod raster;
pub mod style;

pub use assets::AsciiLogo;
pub use compositor::render;
pub use logo::LogoResolver;
pub use panel::InfoPanel;
pub use raster::ChafaRasterizer;
pub use style::PanelStyle;
