//! Layout engine: absolute geometry and the recurring layout algorithms.
//!
//! Slides are laid out on a fixed 10" × 5.625" canvas (see
//! [`common::unit`](crate::common::unit)). Every drawable is a
//! [`Primitive`] with an absolute [`Frame`]; there is no flow layout.
//! The three algorithms that derive per-item geometry from content tables
//! live in the submodules:
//!
//! - [`grid`] — stacked rows with alternating stripe fills
//! - [`columns`] — equally spaced column origins
//! - [`panels`] — a small row of co-equal panels with a fixed gutter
//!
//! All layout functions are pure and deterministic: the same inputs always
//! produce structurally identical output, and an empty content table
//! produces an empty sequence rather than an error or placeholder shapes.

// Submodule declarations
pub mod columns;
pub mod grid;
pub mod panels;

// Re-exports
pub use columns::{Column, column_origins};
pub use grid::{GridRow, Stripe, grid_rows};
pub use panels::panel_row;

use crate::common::{Color, Result, ShadowStyle, TextRun, TextStyle};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Absolute position and extent in canvas inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Frame {
    /// Create a frame from origin and extent.
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Check that the frame is well-formed: finite values, non-negative
    /// extents. Frames may extend past the canvas edge (bleed bars do).
    pub fn validate(&self) -> Result<()> {
        let finite = [self.x, self.y, self.w, self.h]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.w < 0.0 || self.h < 0.0 {
            return Err(crate::common::Error::InvalidGeometry(format!(
                "frame ({}, {}) {}x{}",
                self.x, self.y, self.w, self.h
            )));
        }
        Ok(())
    }
}

/// Ordered text runs for one text block.
pub type Runs = SmallVec<[TextRun; 4]>;

/// An atomic drawable unit with absolute geometry and style.
///
/// Emission order is z-order: later primitives draw on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Filled rectangle, optionally shadowed
    Rect {
        frame: Frame,
        fill: Color,
        shadow: Option<ShadowStyle>,
    },
    /// Filled ellipse
    Oval { frame: Frame, fill: Color },
    /// Text block
    Text {
        frame: Frame,
        runs: Runs,
        style: TextStyle,
    },
}

impl Primitive {
    /// A plain filled rectangle.
    pub fn rect(frame: Frame, fill: Color) -> Self {
        Primitive::Rect {
            frame,
            fill,
            shadow: None,
        }
    }

    /// A filled rectangle with an outer shadow.
    pub fn card(frame: Frame, fill: Color, shadow: ShadowStyle) -> Self {
        Primitive::Rect {
            frame,
            fill,
            shadow: Some(shadow),
        }
    }

    /// A filled ellipse.
    pub fn oval(frame: Frame, fill: Color) -> Self {
        Primitive::Oval { frame, fill }
    }

    /// A text block with a single plain run.
    pub fn text(frame: Frame, text: impl Into<String>, style: TextStyle) -> Self {
        let mut runs = Runs::new();
        runs.push(TextRun::plain(text));
        Primitive::Text { frame, runs, style }
    }

    /// A text block with explicit runs.
    pub fn text_runs(frame: Frame, runs: Runs, style: TextStyle) -> Self {
        Primitive::Text { frame, runs, style }
    }

    /// The primitive's frame.
    pub fn frame(&self) -> Frame {
        match self {
            Primitive::Rect { frame, .. }
            | Primitive::Oval { frame, .. }
            | Primitive::Text { frame, .. } => *frame,
        }
    }
}
