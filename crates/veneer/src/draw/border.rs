//! Box-drawing character sets.

/// Box-drawing character set used for table separators and panel borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    /// ASCII fallback: `+`, `-`, `|`.
    Ascii,
    /// Light box-drawing lines: `─`, `│`.
    Light,
    /// Heavy box-drawing lines: `━`, `┃`.
    #[default]
    Heavy,
    /// Double lines: `═`, `║`.
    Double,
    /// Light lines with rounded corners: `╭`, `╮`, `╰`, `╯`.
    Rounded,
}

/// The characters a [`BoxStyle`] draws with.
#[derive(Debug, Clone, Copy)]
pub struct BoxChars {
    /// Horizontal edge.
    pub horizontal: char,
    /// Vertical edge / column separator.
    pub vertical: char,
    /// Top-left corner.
    pub top_left: char,
    /// Top-right corner.
    pub top_right: char,
    /// Bottom-left corner.
    pub bottom_left: char,
    /// Bottom-right corner.
    pub bottom_right: char,
}

impl BoxStyle {
    /// Returns the character set for this style.
    pub fn chars(self) -> BoxChars {
        match self {
            BoxStyle::Ascii => BoxChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
            },
            BoxStyle::Light => BoxChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
            },
            BoxStyle::Heavy => BoxChars {
                horizontal: '━',
                vertical: '┃',
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
            },
            BoxStyle::Double => BoxChars {
                horizontal: '═',
                vertical: '║',
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
            },
            BoxStyle::Rounded => BoxChars {
                horizontal: '─',
                vertical: '│',
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_heavy() {
        assert_eq!(BoxStyle::default(), BoxStyle::Heavy);
    }

    #[test]
    fn heavy_chars() {
        let chars = BoxStyle::Heavy.chars();
        assert_eq!(chars.vertical, '┃');
        assert_eq!(chars.horizontal, '━');
    }

    #[test]
    fn rounded_corners() {
        let chars = BoxStyle::Rounded.chars();
        assert_eq!(chars.top_left, '╭');
        assert_eq!(chars.top_right, '╮');
        assert_eq!(chars.bottom_left, '╰');
        assert_eq!(chars.bottom_right, '╯');
        assert_eq!(chars.horizontal, '─');
    }

    #[test]
    fn ascii_is_plain() {
        let chars = BoxStyle::Ascii.chars();
        assert!(chars.vertical.is_ascii());
        assert!(chars.horizontal.is_ascii());
    }
}
