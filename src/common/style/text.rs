//! Text block formatting: runs, fonts, alignment.
//!
//! A text primitive carries an ordered sequence of [`TextRun`]s plus one
//! block-level [`TextStyle`]. Run flags mark bullets and paragraph breaks;
//! everything else (font, size, color, alignment) is block-level, with an
//! optional per-run size override for mixed-size lists.

use super::Color;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Per-run text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct RunFlags: u8 {
        /// Render the run's paragraph with a bullet marker
        const BULLET = 0b0000_0001;
        /// End the paragraph after this run
        const BREAK_LINE = 0b0000_0010;
    }
}

/// A single styled run of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The run's text content
    pub text: String,
    /// Bullet / paragraph-break flags
    pub flags: RunFlags,
    /// Font size override in points; `None` uses the block style's size
    pub size: Option<f32>,
}

impl TextRun {
    /// Create a plain run with no flags and the block-level size.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            flags: RunFlags::empty(),
            size: None,
        }
    }

    /// Create a bulleted run.
    pub fn bullet(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            flags: RunFlags::BULLET,
            size: None,
        }
    }

    /// End the paragraph after this run.
    pub fn break_line(mut self) -> Self {
        self.flags |= RunFlags::BREAK_LINE;
        self
    }

    /// Override the font size for this run.
    pub fn size(mut self, points: f32) -> Self {
        self.size = Some(points);
        self
    }
}

/// Font faces used by the built-in slide layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontFace {
    /// Serif display face for headings
    Georgia,
    /// Sans body face
    #[default]
    Calibri,
    /// Monospace face for commands and addresses
    Consolas,
}

impl FontFace {
    /// The typeface name as written into the document.
    pub const fn name(&self) -> &'static str {
        match self {
            FontFace::Georgia => "Georgia",
            FontFace::Calibri => "Calibri",
            FontFace::Consolas => "Consolas",
        }
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical anchoring of a text body within its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Block-level text formatting.
///
/// # Examples
///
/// ```rust
/// use longan::common::{Align, Color, FontFace, TextStyle, VAlign};
///
/// let style = TextStyle::new(FontFace::Georgia, 32.0, Color::new(0x0B, 0x1D, 0x3A))
///     .bold()
///     .align(Align::Center)
///     .anchor(VAlign::Middle);
/// assert!(style.bold);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Typeface
    pub font: FontFace,
    /// Font size in points
    pub size: f32,
    /// Bold weight
    pub bold: bool,
    /// Italic slant
    pub italic: bool,
    /// Text color
    pub color: Color,
    /// Horizontal alignment
    pub align: Align,
    /// Vertical anchoring
    pub anchor: VAlign,
    /// Body inset on all four sides, in points
    pub margin: f32,
    /// Space after each paragraph in points, if any
    pub para_space_after: Option<f32>,
}

impl TextStyle {
    /// Create a block style with left/top alignment and zero margin.
    pub fn new(font: FontFace, size: f32, color: Color) -> Self {
        Self {
            font,
            size,
            bold: false,
            italic: false,
            color,
            align: Align::Left,
            anchor: VAlign::Top,
            margin: 0.0,
            para_space_after: None,
        }
    }

    /// Set bold weight.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set italic slant.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Set horizontal alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set vertical anchoring.
    pub fn anchor(mut self, anchor: VAlign) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the space after each paragraph, in points.
    pub fn spacing(mut self, points: f32) -> Self {
        self.para_space_after = Some(points);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_builders_compose_flags() {
        let run = TextRun::bullet("item").break_line().size(13.0);
        assert!(run.flags.contains(RunFlags::BULLET | RunFlags::BREAK_LINE));
        assert_eq!(run.size, Some(13.0));
    }

    #[test]
    fn test_style_builder_defaults() {
        let style = TextStyle::new(FontFace::Calibri, 12.0, Color::BLACK);
        assert_eq!(style.align, Align::Left);
        assert_eq!(style.anchor, VAlign::Top);
        assert_eq!(style.margin, 0.0);
        assert!(style.para_space_after.is_none());
    }
}
