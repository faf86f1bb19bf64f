//! Outer shadow styling for card-like shapes.

use super::Color;
use serde::{Deserialize, Serialize};

/// Outer shadow applied to a shape.
///
/// All lengths are in points. The theme exposes one constant shadow value
/// for the whole deck; see [`Theme::shadow`](crate::theme::Theme::shadow).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowStyle {
    /// Blur radius in points
    pub blur: f32,
    /// Offset distance in points
    pub offset: f32,
    /// Direction in degrees, clockwise from east
    pub angle: f32,
    /// Shadow color
    pub color: Color,
    /// Opacity in the range 0.0-1.0
    pub opacity: f32,
}

impl ShadowStyle {
    /// Create a new outer shadow.
    #[inline]
    pub const fn new(blur: f32, offset: f32, angle: f32, color: Color, opacity: f32) -> Self {
        Self {
            blur,
            offset,
            angle,
            color,
            opacity,
        }
    }
}
