//! Theme provider: the named color palette and the shadow-style factory.
//!
//! A [`Theme`] is constructed once at startup and injected by reference into
//! the layout engine; nothing mutates it afterwards. Color lookup goes
//! through [`Theme::color`], which fails for names outside the registered
//! set — misspelled palette references surface as configuration errors
//! while a slide is being composed, never as a bad document.

use crate::common::{Color, Error, Result, ShadowStyle};

/// The built-in Ocean Gradient palette (deep blue + teal).
static OCEAN: phf::Map<&'static str, Color> = phf::phf_map! {
    "navy" => Color::new(0x0B, 0x1D, 0x3A),
    "deep_blue" => Color::new(0x06, 0x5A, 0x82),
    "teal" => Color::new(0x1C, 0x72, 0x93),
    "mint" => Color::new(0x48, 0xB8, 0xA0),
    "light" => Color::new(0xE8, 0xF4, 0xF8),
    "white" => Color::new(0xFF, 0xFF, 0xFF),
    "off_white" => Color::new(0xF5, 0xF9, 0xFB),
    "dark_text" => Color::new(0x1A, 0x1A, 0x2E),
    "muted_text" => Color::new(0x5A, 0x6B, 0x7B),
    "coral" => Color::new(0xE8, 0x60, 0x5C),
    "gold" => Color::new(0xF0, 0xA8, 0x30),
};

/// Immutable palette of semantic color names plus the deck-wide shadow.
///
/// # Examples
///
/// ```rust
/// use longan::theme::Theme;
///
/// let theme = Theme::ocean();
/// let navy = theme.color("navy")?;
/// assert_eq!(navy.to_hex(), "0B1D3A");
/// assert!(theme.color("chartreuse").is_err());
/// # Ok::<(), longan::common::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    palette: &'static phf::Map<&'static str, Color>,
}

impl Theme {
    /// The built-in Ocean palette.
    pub const fn ocean() -> Self {
        Self { palette: &OCEAN }
    }

    /// Look up a registered color by semantic name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownColor`] if `name` is not in the palette.
    pub fn color(&self, name: &str) -> Result<Color> {
        self.palette
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownColor(name.to_string()))
    }

    /// The constant outer shadow used by every card in the deck:
    /// 6pt blur, 2pt offset at 135°, 12% black.
    pub const fn shadow(&self) -> ShadowStyle {
        ShadowStyle::new(6.0, 2.0, 135.0, Color::BLACK, 0.12)
    }

    /// Iterate over the registered color names.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.palette.keys().copied()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::ocean()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_colors_resolve() {
        let theme = Theme::ocean();
        for name in ["navy", "deep_blue", "teal", "mint", "coral", "gold"] {
            assert!(theme.color(name).is_ok(), "missing palette entry: {name}");
        }
    }

    #[test]
    fn test_unknown_color_is_configuration_error() {
        let err = Theme::ocean().color("magenta").unwrap_err();
        assert!(matches!(&err, Error::UnknownColor(name) if name == "magenta"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_shadow_is_constant() {
        let theme = Theme::ocean();
        assert_eq!(theme.shadow(), theme.shadow());
        let shadow = theme.shadow();
        assert_eq!(shadow.blur, 6.0);
        assert_eq!(shadow.offset, 2.0);
        assert_eq!(shadow.angle, 135.0);
        assert_eq!(shadow.opacity, 0.12);
        assert_eq!(shadow.color, Color::BLACK);
    }
}
