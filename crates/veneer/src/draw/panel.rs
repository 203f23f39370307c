//! Bordered message panels.
//!
//! A [`Panel`] is a full-width, single-cell bordered box around a message.
//! Severity presets ([`Severity`]) provide the fixed color pairs used for
//! error/warning/info/note panels: a solid border in the severity color and
//! black-on-that-color content.

use console::{Color, Style};

use super::border::BoxStyle;
use super::text::{pad, wrap};
use crate::style::{ColorDef, Justify, StyleSpec};

/// Horizontal padding inside the borders, one column each side.
const PADDING: usize = 1;

/// Fixed severity presets for message panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Solid red.
    Error,
    /// Solid amber (`#ffdd00`).
    Warning,
    /// Solid green.
    Info,
    /// Solid gray (`#999999`).
    Note,
}

impl Severity {
    fn color(self) -> ColorDef {
        match self {
            Severity::Error => ColorDef::Named(Color::Red),
            Severity::Warning => ColorDef::Rgb(255, 221, 0),
            Severity::Info => ColorDef::Named(Color::Green),
            Severity::Note => ColorDef::Rgb(153, 153, 153),
        }
    }

    /// Border descriptor: the severity color on itself, drawing a solid bar.
    pub fn border(self) -> StyleSpec {
        StyleSpec::new().fg(self.color()).bg(self.color())
    }

    /// Content descriptor: black text on the severity color.
    pub fn content(self) -> StyleSpec {
        StyleSpec::new()
            .fg(ColorDef::Named(Color::Black))
            .bg(self.color())
    }
}

/// A full-width bordered panel containing a single message.
///
/// Borders are always rounded; the border and content styles are free.
/// Messages wider than the inner width are word-wrapped.
///
/// # Example
///
/// ```rust
/// use veneer::draw::Panel;
/// use veneer::style::Justify;
///
/// let out = Panel::new("hello", 20)
///     .justify(Justify::Left)
///     .render();
/// assert!(out.starts_with('╭'));
/// assert!(out.ends_with('╯'));
/// ```
#[derive(Debug, Clone)]
pub struct Panel {
    message: String,
    width: usize,
    border: Style,
    content: Style,
    justify: Justify,
}

impl Panel {
    /// Creates a panel for `message`, rendered `width` columns wide.
    pub fn new(message: impl Into<String>, width: usize) -> Self {
        Panel {
            message: message.into(),
            width,
            border: Style::new(),
            content: Style::new(),
            justify: Justify::default(),
        }
    }

    /// Sets the border style.
    pub fn border_style(mut self, style: Style) -> Self {
        self.border = style;
        self
    }

    /// Sets the content style. Applied across the whole inner row, so a
    /// background color fills the panel edge to edge.
    pub fn content_style(mut self, style: Style) -> Self {
        self.content = style;
        self
    }

    /// Sets the content justification.
    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    /// Renders the panel to a string (no trailing newline).
    pub fn render(&self) -> String {
        let chars = BoxStyle::Rounded.chars();
        let inner = self.width.saturating_sub(2 + 2 * PADDING).max(1);
        let edge = chars.horizontal.to_string().repeat(inner + 2 * PADDING);

        let mut lines = Vec::new();
        lines.push(
            self.border
                .apply_to(format!("{}{}{}", chars.top_left, edge, chars.top_right))
                .to_string(),
        );

        for row in wrap(&self.message, inner) {
            let cell = format!(" {} ", pad(&row, inner, self.justify));
            lines.push(format!(
                "{}{}{}",
                self.border.apply_to(chars.vertical),
                self.content.apply_to(cell),
                self.border.apply_to(chars.vertical),
            ));
        }

        lines.push(
            self.border
                .apply_to(format!(
                    "{}{}{}",
                    chars.bottom_left, edge, chars.bottom_right
                ))
                .to_string(),
        );

        lines.join("\n")
    }
}
