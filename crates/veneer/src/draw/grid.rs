//! Table rendering with alternating row styles.
//!
//! A [`Grid`] renders a header row plus data rows, with column separators
//! drawn from a [`BoxStyle`] and no outer border. Cells carry zero padding
//! and are center-justified; data rows alternate between two styles,
//! starting with the odd style on the first row.

use console::Style;

use super::border::BoxStyle;
use super::text::{display_width, pad};
use crate::error::RenderError;
use crate::style::Justify;

/// A borderless table with styled header and alternating row styles.
///
/// # Example
///
/// ```rust
/// use veneer::draw::Grid;
///
/// let out = Grid::new(["name", "count"])
///     .row(["Acme", "12"])
///     .row(["Globex", "3"])
///     .render()
///     .unwrap();
/// assert_eq!(out.lines().count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    box_style: BoxStyle,
    line: Style,
    header: Style,
    row_odd: Style,
    row_even: Style,
}

impl Grid {
    /// Creates a grid with the given column headers.
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Grid {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            box_style: BoxStyle::default(),
            line: Style::new(),
            header: Style::new(),
            row_odd: Style::new(),
            row_even: Style::new(),
        }
    }

    /// Appends a data row.
    pub fn row<S: Into<String>>(mut self, cells: impl IntoIterator<Item = S>) -> Self {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the box-drawing style for column separators.
    pub fn box_style(mut self, style: BoxStyle) -> Self {
        self.box_style = style;
        self
    }

    /// Sets the style applied to separator characters.
    pub fn line_style(mut self, style: Style) -> Self {
        self.line = style;
        self
    }

    /// Sets the style applied to header cells.
    pub fn header_style(mut self, style: Style) -> Self {
        self.header = style;
        self
    }

    /// Sets the alternating data-row styles. The first row uses `odd`.
    pub fn row_styles(mut self, odd: Style, even: Style) -> Self {
        self.row_odd = odd;
        self.row_even = even;
        self
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Renders the grid to a string (no trailing newline).
    ///
    /// Fails fast with [`RenderError::TableShape`] if any row does not
    /// supply exactly one cell per column.
    pub fn render(&self) -> Result<String, RenderError> {
        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != self.columns.len() {
                return Err(RenderError::TableShape {
                    row: i,
                    expected: self.columns.len(),
                    found: row.len(),
                });
            }
        }

        let widths = self.column_widths();
        let sep = self
            .line
            .apply_to(self.box_style.chars().vertical)
            .to_string();

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(self.format_row(&self.columns, &widths, &self.header, &sep));

        for (i, row) in self.rows.iter().enumerate() {
            let style = if i % 2 == 0 {
                &self.row_odd
            } else {
                &self.row_even
            };
            lines.push(self.format_row(row, &widths, style, &sep));
        }

        Ok(lines.join("\n"))
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| display_width(c)).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(display_width(cell));
            }
        }
        widths
    }

    fn format_row(&self, cells: &[String], widths: &[usize], style: &Style, sep: &str) -> String {
        let formatted: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, &w)| style.apply_to(pad(cell, w, Justify::Center)).to_string())
            .collect();
        formatted.join(sep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_and_rows_in_order() {
        let out = Grid::new(["a", "b"])
            .row(["1", "2"])
            .row(["3", "4"])
            .render()
            .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains('a') && lines[0].contains('b'));
        assert!(lines[1].contains('1') && lines[1].contains('2'));
        assert!(lines[2].contains('3') && lines[2].contains('4'));
    }

    #[test]
    fn separator_uses_box_style_with_zero_padding() {
        let out = Grid::new(["a", "b"]).row(["1", "2"]).render().unwrap();
        // Heavy is the default; cells are one column wide, no padding.
        assert_eq!(out.lines().next().unwrap(), "a┃b");
        assert_eq!(out.lines().nth(1).unwrap(), "1┃2");
    }

    #[test]
    fn light_box_style_changes_separator() {
        let out = Grid::new(["a", "b"])
            .row(["1", "2"])
            .box_style(BoxStyle::Light)
            .render()
            .unwrap();
        assert!(out.contains('│'));
        assert!(!out.contains('┃'));
    }

    #[test]
    fn columns_widen_to_fit_cells_and_headers() {
        let out = Grid::new(["id", "client_name"])
            .row(["1", "Acme"])
            .row(["2", "Globex"])
            .render()
            .unwrap();
        for line in out.lines() {
            assert_eq!(display_width(line), 2 + 1 + 11);
        }
    }

    #[test]
    fn first_row_is_odd_second_is_even() {
        let odd = Style::new().red().force_styling(true);
        let even = Style::new().blue().force_styling(true);
        let out = Grid::new(["a"])
            .row(["x"])
            .row(["y"])
            .row(["z"])
            .row_styles(odd, even)
            .render()
            .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].contains("\u{1b}[31m"));
        assert!(lines[2].contains("\u{1b}[34m"));
        assert!(lines[3].contains("\u{1b}[31m"));
    }

    #[test]
    fn header_style_applies_to_header_cells_only() {
        let header = Style::new().cyan().force_styling(true);
        let out = Grid::new(["a"])
            .row(["x"])
            .header_style(header)
            .render()
            .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("\u{1b}[36m"));
        assert!(!lines[1].contains("\u{1b}[36m"));
    }

    #[test]
    fn short_row_fails_fast() {
        let err = Grid::new(["a", "b"]).row(["only one"]).render().unwrap_err();
        match err {
            RenderError::TableShape {
                row,
                expected,
                found,
            } => {
                assert_eq!(row, 0);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn long_row_fails_fast() {
        let err = Grid::new(["a"])
            .row(["1"])
            .row(["2", "3"])
            .render()
            .unwrap_err();
        assert!(matches!(err, RenderError::TableShape { row: 1, .. }));
    }

    #[test]
    fn empty_grid_renders_header_only() {
        let out = Grid::new(["solo"]).render().unwrap();
        assert_eq!(out.lines().count(), 1);
    }
}
