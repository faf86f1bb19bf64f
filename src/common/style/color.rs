//! Solid RGB colors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the
/// range 0-255. Fill and text colors are always solid; opacity only appears
/// as part of [`ShadowStyle`](super::ShadowStyle).
///
/// # Examples
///
/// ```rust
/// use longan::common::Color;
///
/// let navy = Color::new(0x0B, 0x1D, 0x3A);
/// let mint = Color::from_hex("48B8A0").unwrap();
/// assert_eq!(navy.to_hex(), "0B1D3A");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl Color {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pure black, the shadow base color.
    pub const BLACK: Color = Color::new(0, 0, 0);

    /// Create an RGB color from a hex string such as `"FF0000"` or `"#FF0000"`.
    ///
    /// Returns `None` if the string is not exactly six hex digits.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to an uppercase hex string without the `#` prefix.
    ///
    /// This is the form DrawingML's `srgbClr` attribute expects.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let color = Color::new(0x48, 0xB8, 0xA0);
        assert_eq!(Color::from_hex(&color.to_hex()), Some(color));
        assert_eq!(Color::from_hex("#48B8A0"), Some(color));
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert_eq!(Color::from_hex(""), None);
        assert_eq!(Color::from_hex("48B8A"), None);
        assert_eq!(Color::from_hex("GGGGGG"), None);
    }

    #[test]
    fn test_display_includes_prefix() {
        assert_eq!(Color::new(11, 29, 58).to_string(), "#0B1D3A");
    }
}
