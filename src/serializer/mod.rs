//! Serializer boundary: the narrow contract the assembler draws through.
//!
//! The composition core only ever issues five operations, in a fixed order:
//! for each slide — [`add_slide`](Serializer::add_slide),
//! [`set_background`](Serializer::set_background), then an interleaved
//! sequence of [`add_shape`](Serializer::add_shape) /
//! [`add_text`](Serializer::add_text) calls in the exact order the layout
//! functions produced them (z-order = call order). After all slides,
//! exactly one [`commit`](Serializer::commit).
//!
//! The bundled [`pptx`] backend persists a PowerPoint document; tests use
//! in-memory fakes implementing the same contract.

// Submodule declarations
pub mod pptx;

// Re-exports
pub use pptx::PptxSerializer;

use crate::common::{Color, Result, ShadowStyle, TextRun, TextStyle};
use crate::layout::Frame;
use std::path::{Path, PathBuf};

/// Kind of filled shape a draw call produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
}

/// Paint style for a shape draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    /// Solid fill color
    pub fill: Color,
    /// Optional outer shadow
    pub shadow: Option<ShadowStyle>,
}

/// The external collaborator that turns draw calls into a persisted
/// document.
///
/// Implementations may reject malformed draw calls with a serialization
/// error; they must not reorder or drop accepted calls. `commit` is
/// terminal and atomic: the document is either fully written or not
/// written at all.
pub trait Serializer {
    /// Start a new slide. Subsequent calls draw onto it.
    fn add_slide(&mut self) -> Result<()>;

    /// Set the current slide's solid background fill.
    fn set_background(&mut self, fill: Color) -> Result<()>;

    /// Draw a filled shape on the current slide.
    fn add_shape(&mut self, kind: ShapeKind, frame: Frame, style: &ShapeStyle) -> Result<()>;

    /// Draw a text block on the current slide.
    fn add_text(&mut self, frame: Frame, runs: &[TextRun], style: &TextStyle) -> Result<()>;

    /// Persist the document to `dest` and return the resolved path.
    ///
    /// This is the only asynchronous operation in the pipeline; the
    /// assembler awaits it before signaling completion.
    #[allow(async_fn_in_trait)]
    async fn commit(&mut self, dest: &Path) -> Result<PathBuf>;
}
