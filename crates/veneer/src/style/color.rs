//! Color parsing for style descriptors.
//!
//! Supported formats:
//!
//! - Named ANSI colors: `red`, `green`, `blue`, etc.
//! - Bright variants: `bright_red`, `bright_green`, etc.
//! - 256-color palette indices: `0` through `255`
//! - RGB hex: `#ff6b35` or `#fd0` (6 or 3 digit)
//!
//! RGB values are downmapped to the nearest 256-color palette entry when
//! converted for the terminal, since `console::Color` has no true-color
//! variant.

use console::Color;

use super::StyleError;

/// A parsed color definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDef {
    /// Named ANSI color.
    Named(Color),
    /// 256-color palette index.
    Color256(u8),
    /// RGB triple, downmapped to the 256-color cube at render time.
    Rgb(u8, u8, u8),
}

impl ColorDef {
    /// Parses a color from a descriptor token.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veneer::style::ColorDef;
    /// use console::Color;
    ///
    /// assert_eq!(ColorDef::parse("red").unwrap(), ColorDef::Named(Color::Red));
    /// assert_eq!(ColorDef::parse("#ffdd00").unwrap(), ColorDef::Rgb(255, 221, 0));
    /// assert_eq!(ColorDef::parse("226").unwrap(), ColorDef::Color256(226));
    /// ```
    pub fn parse(s: &str) -> Result<Self, StyleError> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if s.chars().all(|c| c.is_ascii_digit()) {
            let index: u16 = s
                .parse()
                .map_err(|_| StyleError::InvalidPaletteIndex(s.to_string()))?;
            if index > 255 {
                return Err(StyleError::InvalidPaletteIndex(s.to_string()));
            }
            return Ok(ColorDef::Color256(index as u8));
        }

        Self::parse_named(s)
    }

    /// Parses a hex color code (without the `#` prefix).
    fn parse_hex(hex: &str) -> Result<Self, StyleError> {
        let invalid = || StyleError::InvalidHex(format!("#{}", hex));
        match hex.len() {
            // 3-digit shorthand: #rgb -> #rrggbb
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).map_err(|_| invalid())? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).map_err(|_| invalid())? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).map_err(|_| invalid())? * 17;
                Ok(ColorDef::Rgb(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
                let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
                let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
                Ok(ColorDef::Rgb(r, g, b))
            }
            _ => Err(invalid()),
        }
    }

    /// Parses a named color, including `bright_` variants.
    fn parse_named(name: &str) -> Result<Self, StyleError> {
        let name_lower = name.to_lowercase();

        if let Some(base) = name_lower.strip_prefix("bright_") {
            // The console crate addresses bright colors through the
            // 256-color palette (indices 8-15).
            let index = match base {
                "black" => 8,
                "red" => 9,
                "green" => 10,
                "yellow" => 11,
                "blue" => 12,
                "magenta" => 13,
                "cyan" => 14,
                "white" => 15,
                _ => return Err(StyleError::UnknownColor(name.to_string())),
            };
            return Ok(ColorDef::Color256(index));
        }

        let color = match name_lower.as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            _ => return Err(StyleError::UnknownColor(name.to_string())),
        };

        Ok(ColorDef::Named(color))
    }

    /// Converts to a `console::Color`, downmapping RGB to the 256-color
    /// palette.
    pub fn to_color(self) -> Color {
        match self {
            ColorDef::Named(color) => color,
            ColorDef::Color256(index) => Color::Color256(index),
            ColorDef::Rgb(r, g, b) => Color::Color256(rgb_to_ansi256((r, g, b))),
        }
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// Grays map into the dedicated grayscale ramp (232-255); everything else
/// into the 6x6x6 color cube (16-231).
///
/// # Example
///
/// ```rust
/// use veneer::style::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((153, 153, 153)), 246);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
