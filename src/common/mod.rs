//! Common types and utilities shared across the composition pipeline.
//!
//! This module provides the vocabulary both the layout engine and the
//! serializer boundary speak: errors, colors, text styles, and units.

// Submodule declarations
pub mod error;
pub mod style;
pub mod unit;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::{Align, Color, FontFace, RunFlags, ShadowStyle, TextRun, TextStyle, VAlign};
pub use unit::{CANVAS_HEIGHT, CANVAS_WIDTH};
