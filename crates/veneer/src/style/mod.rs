//! Typed style descriptors.
//!
//! A [`StyleSpec`] is a validated description of foreground/background color
//! and text attributes. Descriptors can be built programmatically or parsed
//! from the compact string form used by style-string conventions elsewhere:
//!
//! ```rust
//! use veneer::style::{ColorDef, StyleSpec};
//! use console::Color;
//!
//! let spec = StyleSpec::parse("bold black on red").unwrap();
//! assert!(spec.bold);
//! assert_eq!(spec.fg, Some(ColorDef::Named(Color::Black)));
//! assert_eq!(spec.bg, Some(ColorDef::Named(Color::Red)));
//! ```
//!
//! Parsing validates eagerly: an invalid descriptor fails here, at
//! construction, never later inside a draw call.

mod color;

pub use color::{rgb_to_ansi256, ColorDef};

use console::{Alignment, Style};
use thiserror::Error;

/// Error type for style descriptor parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// A token was not an attribute and not a recognizable color.
    #[error("unknown color name: {0}")]
    UnknownColor(String),

    /// A hex color was malformed (must be 3 or 6 hex digits).
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// A numeric color was outside the 0-255 palette range.
    #[error("color palette index out of range (0-255): {0}")]
    InvalidPaletteIndex(String),

    /// `on` appeared without a following background color.
    #[error("expected a background color after 'on'")]
    MissingBackground,

    /// More than one color was given for the same layer.
    #[error("duplicate color in descriptor: {0}")]
    DuplicateColor(String),
}

/// Horizontal justification for rendered content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    /// Align to the left edge.
    Left,
    /// Center within the available width.
    #[default]
    Center,
    /// Align to the right edge.
    Right,
}

impl Justify {
    /// The equivalent `console` padding alignment.
    pub fn alignment(self) -> Alignment {
        match self {
            Justify::Left => Alignment::Left,
            Justify::Center => Alignment::Center,
            Justify::Right => Alignment::Right,
        }
    }
}

/// A validated style descriptor: optional foreground and background colors
/// plus text attributes.
///
/// Conversion to a renderable [`console::Style`] happens at draw time via
/// [`StyleSpec::to_style`]; by then the descriptor is known-good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleSpec {
    /// Foreground color.
    pub fg: Option<ColorDef>,
    /// Background color.
    pub bg: Option<ColorDef>,
    /// Bold weight.
    pub bold: bool,
    /// Dim weight.
    pub dim: bool,
    /// Italic slant.
    pub italic: bool,
    /// Underline.
    pub underline: bool,
}

impl StyleSpec {
    /// Creates an empty descriptor (no colors, no attributes).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a descriptor string such as `"bold yellow"`, `"black on red"`
    /// or `"#ffdd00 on #ffdd00"`.
    ///
    /// Grammar: whitespace-separated tokens. Attribute tokens (`bold`,
    /// `dim`, `italic`, `underline`) may appear anywhere. A bare color token
    /// sets the foreground; `on <color>` sets the background. The empty
    /// string parses to the empty descriptor.
    pub fn parse(s: &str) -> Result<Self, StyleError> {
        let mut spec = StyleSpec::new();
        let mut tokens = s.split_whitespace();

        while let Some(token) = tokens.next() {
            match token.to_lowercase().as_str() {
                "bold" => spec.bold = true,
                "dim" => spec.dim = true,
                "italic" => spec.italic = true,
                "underline" => spec.underline = true,
                "on" => {
                    let bg = tokens.next().ok_or(StyleError::MissingBackground)?;
                    if spec.bg.is_some() {
                        return Err(StyleError::DuplicateColor(bg.to_string()));
                    }
                    spec.bg = Some(ColorDef::parse(bg)?);
                }
                _ => {
                    if spec.fg.is_some() {
                        return Err(StyleError::DuplicateColor(token.to_string()));
                    }
                    spec.fg = Some(ColorDef::parse(token)?);
                }
            }
        }

        Ok(spec)
    }

    /// Sets the foreground color.
    pub fn fg(mut self, color: ColorDef) -> Self {
        self.fg = Some(color);
        self
    }

    /// Sets the background color.
    pub fn bg(mut self, color: ColorDef) -> Self {
        self.bg = Some(color);
        self
    }

    /// Enables bold weight.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Enables dim weight.
    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Enables italics.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Enables underline.
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Builds the renderable `console::Style` for this descriptor.
    pub fn to_style(&self) -> Style {
        let mut style = Style::new();
        if let Some(fg) = self.fg {
            style = style.fg(fg.to_color());
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg.to_color());
        }
        if self.bold {
            style = style.bold();
        }
        if self.dim {
            style = style.dim();
        }
        if self.italic {
            style = style.italic();
        }
        if self.underline {
            style = style.underlined();
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::Color;

    #[test]
    fn parse_empty_is_default() {
        assert_eq!(StyleSpec::parse("").unwrap(), StyleSpec::new());
        assert_eq!(StyleSpec::parse("   ").unwrap(), StyleSpec::new());
    }

    #[test]
    fn parse_attribute_and_foreground() {
        let spec = StyleSpec::parse("bold yellow").unwrap();
        assert!(spec.bold);
        assert_eq!(spec.fg, Some(ColorDef::Named(Color::Yellow)));
        assert_eq!(spec.bg, None);
    }

    #[test]
    fn parse_foreground_on_background() {
        let spec = StyleSpec::parse("black on red").unwrap();
        assert_eq!(spec.fg, Some(ColorDef::Named(Color::Black)));
        assert_eq!(spec.bg, Some(ColorDef::Named(Color::Red)));
        assert!(!spec.bold);
    }

    #[test]
    fn parse_solid_hex() {
        let spec = StyleSpec::parse("#ffdd00 on #ffdd00").unwrap();
        assert_eq!(spec.fg, Some(ColorDef::Rgb(255, 221, 0)));
        assert_eq!(spec.bg, Some(ColorDef::Rgb(255, 221, 0)));
    }

    #[test]
    fn parse_attributes_after_colors() {
        let spec = StyleSpec::parse("white on blue bold underline").unwrap();
        assert!(spec.bold);
        assert!(spec.underline);
        assert_eq!(spec.bg, Some(ColorDef::Named(Color::Blue)));
    }

    #[test]
    fn parse_rejects_unknown_token() {
        assert!(matches!(
            StyleSpec::parse("bold wavy"),
            Err(StyleError::UnknownColor(_))
        ));
    }

    #[test]
    fn parse_rejects_trailing_on() {
        assert_eq!(
            StyleSpec::parse("red on"),
            Err(StyleError::MissingBackground)
        );
    }

    #[test]
    fn parse_rejects_two_foregrounds() {
        assert!(matches!(
            StyleSpec::parse("red green"),
            Err(StyleError::DuplicateColor(_))
        ));
        assert!(matches!(
            StyleSpec::parse("red on green on blue"),
            Err(StyleError::DuplicateColor(_))
        ));
    }

    #[test]
    fn builder_matches_parse() {
        let built = StyleSpec::new().bold().fg(ColorDef::Named(Color::Yellow));
        assert_eq!(built, StyleSpec::parse("bold yellow").unwrap());
    }

    #[test]
    fn justify_default_is_center() {
        assert_eq!(Justify::default(), Justify::Center);
    }

    #[test]
    fn empty_spec_applies_no_styling() {
        let styled = StyleSpec::new().to_style().apply_to("plain").to_string();
        assert_eq!(styled, "plain");
    }
}
