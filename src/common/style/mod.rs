//! Common style and formatting types.
//!
//! These value types describe how primitives are painted: solid colors,
//! the outer shadow applied to cards, and text block formatting.

// Submodule declarations
pub mod color;
pub mod shadow;
pub mod text;

// Re-exports
pub use color::Color;
pub use shadow::ShadowStyle;
pub use text::{Align, FontFace, RunFlags, TextRun, TextStyle, VAlign};
