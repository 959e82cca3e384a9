//! pulsefetch-types: Shared data types for the pulsefetch fetch tool.
//!
//! This crate contains pure data types (fields, toggles, collected facts,
//! display rows and logo blocks) that are shared across all pulsefetch
//! crates. These types do no I/O, making them suitable as a foundation layer.

pub mod color;
pub mod facts;
pub mod field;
pub mod logo;
pub mod row;

// Re-export commonly used types at the crate root for convenience
pub use color::Color;
pub use facts::{FactRecord, FactValue, HOSTNAME_KEY, USER_KEY};
pub use field::{Field, ToggleSet};
pub use logo::{GridSize, LogoBlock, LogoKind};
pub use row::DisplayRow;
