//! The styled console: one terminal handle, one style profile, one timer.

use std::fmt;
use std::process::{Command, ExitStatus};
use std::time::Instant;

use console::{Style, Term};

use crate::draw::{render_rule, BoxStyle, Grid, Panel, Severity};
use crate::error::RenderError;
use crate::style::{Justify, StyleSpec};

/// The set of styles applied to subsequent draw operations.
///
/// Owned by [`StyledConsole`] and mutated only through its setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleProfile {
    /// Content justification for panels.
    pub justify: Justify,
    /// Style for message text (panel content, rule labels).
    pub text: StyleSpec,
    /// Style for rule lines, panel borders, and table separators.
    pub line: StyleSpec,
    /// Style for table header cells.
    pub header: StyleSpec,
    /// Style for odd table rows (first, third, ...).
    pub row_odd: StyleSpec,
    /// Style for even table rows (second, fourth, ...).
    pub row_even: StyleSpec,
    /// Box-drawing character set for tables.
    pub box_style: BoxStyle,
}

impl Default for StyleProfile {
    fn default() -> Self {
        use crate::style::ColorDef;
        use console::Color;

        StyleProfile {
            justify: Justify::Center,
            text: StyleSpec::new().bold().fg(ColorDef::Named(Color::Yellow)),
            line: StyleSpec::new().fg(ColorDef::Rgb(153, 153, 153)),
            header: StyleSpec::new().bold().fg(ColorDef::Color256(226)),
            row_odd: StyleSpec::new().bold().fg(ColorDef::Named(Color::White)),
            row_even: StyleSpec::new().bold().fg(ColorDef::Rgb(187, 187, 187)),
            box_style: BoxStyle::Heavy,
        }
    }
}

/// Fallback width when the terminal size cannot be detected (e.g. piped
/// output).
const FALLBACK_WIDTH: usize = 80;

/// A styled terminal console.
///
/// Owns a [`console::Term`] handle (color support is detected
/// automatically), a mutable [`StyleProfile`], and a timer used by
/// [`run_command`](Self::run_command) to report elapsed time between
/// invocations. All output operations are methods on this one type.
///
/// Single-threaded by design: draw operations take `&self`, but the type
/// defines no locking discipline and `run_command` blocks the calling
/// thread for the child's whole lifetime. Create one console per process.
///
/// # Example
///
/// ```rust
/// use veneer::StyledConsole;
///
/// let console = StyledConsole::with_width(60);
/// console.panel("Running a query").unwrap();
/// console
///     .table(&["client_name"], &[vec!["Acme"], vec!["Globex"]])
///     .unwrap();
/// console.panel("Query done").unwrap();
/// ```
pub struct StyledConsole {
    term: Term,
    width: Option<usize>,
    profile: StyleProfile,
    last_reset: Instant,
}

impl StyledConsole {
    /// Creates a console writing to stdout, with auto-detected width.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Creates a console with a fixed render width instead of terminal
    /// detection. Useful under test harnesses and when output is piped.
    pub fn with_width(width: usize) -> Self {
        Self::build(Some(width))
    }

    fn build(width: Option<usize>) -> Self {
        StyledConsole {
            term: Term::stdout(),
            width,
            profile: StyleProfile::default(),
            last_reset: Instant::now(),
        }
    }

    /// The render width: the fixed width if one was given, otherwise the
    /// detected terminal width, otherwise 80.
    pub fn width(&self) -> usize {
        self.width.unwrap_or_else(|| {
            terminal_size::terminal_size()
                .map(|(w, _)| w.0 as usize)
                .unwrap_or(FALLBACK_WIDTH)
        })
    }

    /// Shared read-only access to the underlying terminal handle, for
    /// primitives beyond this crate's vocabulary.
    pub fn term(&self) -> &Term {
        &self.term
    }

    /// Read access to the current style profile.
    pub fn profile(&self) -> &StyleProfile {
        &self.profile
    }

    /// Sets the content justification.
    pub fn set_justify(&mut self, justify: Justify) {
        self.profile.justify = justify;
    }

    /// Sets the message text style.
    pub fn set_text_style(&mut self, style: StyleSpec) {
        self.profile.text = style;
    }

    /// Sets the rule/border/separator line style.
    pub fn set_line_style(&mut self, style: StyleSpec) {
        self.profile.line = style;
    }

    /// Sets the box-drawing character set used by tables.
    pub fn set_box_style(&mut self, style: BoxStyle) {
        self.profile.box_style = style;
    }

    /// Draws a full-width horizontal rule in the line style.
    pub fn rule(&self) -> Result<(), RenderError> {
        self.labeled_rule("")
    }

    /// Draws a full-width rule with `label` embedded near the left edge,
    /// rendered in the text style. An empty label draws a plain rule.
    pub fn labeled_rule(&self, label: &str) -> Result<(), RenderError> {
        let line = render_rule(
            self.width(),
            label,
            &self.profile.line.to_style(),
            &self.profile.text.to_style(),
        );
        self.term.write_line(&line)?;
        Ok(())
    }

    /// Draws a full-width rounded-border panel with explicit border and
    /// content styles, content justified per the profile.
    ///
    /// This is the shared primitive behind [`panel`](Self::panel) and the
    /// severity helpers; severities are just named style presets.
    pub fn solid_panel(
        &self,
        message: &str,
        border: &StyleSpec,
        content: &StyleSpec,
    ) -> Result<(), RenderError> {
        let panel = Panel::new(message, self.width())
            .border_style(border.to_style())
            .content_style(content.to_style())
            .justify(self.profile.justify);
        self.term.write_line(&panel.render())?;
        Ok(())
    }

    /// Draws a panel in the profile's line/text styles.
    pub fn panel(&self, message: &str) -> Result<(), RenderError> {
        self.solid_panel(message, &self.profile.line, &self.profile.text)
    }

    /// Draws a solid red error panel.
    pub fn error(&self, message: &str) -> Result<(), RenderError> {
        self.severity_panel(Severity::Error, message)
    }

    /// Draws a solid amber warning panel.
    pub fn warning(&self, message: &str) -> Result<(), RenderError> {
        self.severity_panel(Severity::Warning, message)
    }

    /// Draws a solid green info panel.
    pub fn info(&self, message: &str) -> Result<(), RenderError> {
        self.severity_panel(Severity::Info, message)
    }

    /// Draws a solid gray note panel.
    pub fn note(&self, message: &str) -> Result<(), RenderError> {
        self.severity_panel(Severity::Note, message)
    }

    fn severity_panel(&self, severity: Severity, message: &str) -> Result<(), RenderError> {
        self.solid_panel(message, &severity.border(), &severity.content())
    }

    /// Writes each value in call order with no separator and no trailing
    /// newline. The raw escape hatch beneath the semantic helpers.
    pub fn write_inline<T: fmt::Display>(&self, values: &[T]) -> Result<(), RenderError> {
        self.term.write_str(&joined(values))?;
        Ok(())
    }

    /// Like [`write_inline`](Self::write_inline), followed by exactly one
    /// trailing newline.
    pub fn write_line<T: fmt::Display>(&self, values: &[T]) -> Result<(), RenderError> {
        self.term.write_line(&joined(values))?;
        Ok(())
    }

    /// Draws a table: one centered header cell per column, data rows
    /// alternating between the odd and even row styles, separators drawn
    /// with the profile box style in the line style. Cells are stringified
    /// in column order.
    ///
    /// Fails fast with [`RenderError::TableShape`] when a row does not
    /// supply exactly one cell per column.
    pub fn table<C, T>(&self, columns: &[C], rows: &[Vec<T>]) -> Result<(), RenderError>
    where
        C: fmt::Display,
        T: fmt::Display,
    {
        let mut grid = Grid::new(columns.iter().map(ToString::to_string))
            .box_style(self.profile.box_style)
            .line_style(self.profile.line.to_style())
            .header_style(self.profile.header.to_style())
            .row_styles(
                self.profile.row_odd.to_style(),
                self.profile.row_even.to_style(),
            );
        for row in rows {
            grid = grid.row(row.iter().map(ToString::to_string));
        }
        self.term.write_line(&grid.render()?)?;
        Ok(())
    }

    /// Runs `command` through `sh -c` with inherited standard streams,
    /// logging a status line, the literal command, and the elapsed whole
    /// seconds since the timer was last reset (construction or the end of
    /// the previous run). The timer resets at the end of every call.
    ///
    /// The child's exit status is deliberately ignored; use
    /// [`try_run_command`](Self::try_run_command) to observe it.
    pub fn run_command(
        &mut self,
        start_msg: &str,
        end_msg: &str,
        command: &str,
    ) -> Result<(), RenderError> {
        self.try_run_command(start_msg, end_msg, command).map(|_| ())
    }

    /// [`run_command`](Self::run_command), but returns the child's exit
    /// status for callers that need failure detection.
    pub fn try_run_command(
        &mut self,
        start_msg: &str,
        end_msg: &str,
        command: &str,
    ) -> Result<ExitStatus, RenderError> {
        let status = Style::new().green().bold();
        let accent = Style::new().yellow().bold();

        // The child inherits the terminal, so the status line is written
        // once and left in place rather than repainted during the run.
        self.term
            .write_line(&status.apply_to(start_msg).to_string())?;
        self.term
            .write_line(&format!("Running: {}", accent.apply_to(command)))?;

        let result = Command::new("sh").arg("-c").arg(command).status();

        let secs = self.whole_secs_since_reset();
        self.last_reset = Instant::now();
        self.term.write_line(&format!(
            "{} {}",
            accent.apply_to(format!("Time taken for {} =", end_msg)),
            status.apply_to(format!("{}s", secs)),
        ))?;

        Ok(result?)
    }

    fn whole_secs_since_reset(&self) -> u64 {
        self.last_reset.elapsed().as_secs_f64().round() as u64
    }
}

impl Default for StyledConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StyledConsole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyledConsole")
            .field("width", &self.width)
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}

fn joined<T: fmt::Display>(values: &[T]) -> String {
    values.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ColorDef;
    use console::Color;
    use std::time::Duration;

    #[test]
    fn default_profile_matches_documented_defaults() {
        let profile = StyleProfile::default();
        assert_eq!(profile.justify, Justify::Center);
        assert_eq!(profile.text, StyleSpec::parse("bold yellow").unwrap());
        assert_eq!(profile.line, StyleSpec::parse("#999999").unwrap());
        assert_eq!(profile.header, StyleSpec::parse("bold 226").unwrap());
        assert_eq!(profile.row_odd, StyleSpec::parse("bold white").unwrap());
        assert_eq!(profile.row_even, StyleSpec::parse("bold #BBBBBB").unwrap());
        assert_eq!(profile.box_style, BoxStyle::Heavy);
    }

    #[test]
    fn setters_keep_the_last_value() {
        let mut console = StyledConsole::with_width(40);
        console.set_justify(Justify::Left);
        console.set_justify(Justify::Right);
        assert_eq!(console.profile().justify, Justify::Right);

        let red = StyleSpec::new().fg(ColorDef::Named(Color::Red));
        let blue = StyleSpec::new().fg(ColorDef::Named(Color::Blue));
        console.set_text_style(red);
        console.set_text_style(blue);
        assert_eq!(console.profile().text, blue);

        console.set_line_style(red);
        assert_eq!(console.profile().line, red);

        console.set_box_style(BoxStyle::Double);
        assert_eq!(console.profile().box_style, BoxStyle::Double);
    }

    #[test]
    fn fixed_width_wins_over_detection() {
        let console = StyledConsole::with_width(33);
        assert_eq!(console.width(), 33);
    }

    #[test]
    fn joined_concatenates_without_separator() {
        assert_eq!(joined(&["x", "y"]), "xy");
        assert_eq!(joined(&[1, 2, 3]), "123");
        assert_eq!(joined::<&str>(&[]), "");
    }

    #[test]
    fn elapsed_counts_whole_seconds_from_last_reset() {
        let mut console = StyledConsole::with_width(40);
        console.last_reset = Instant::now() - Duration::from_secs(7);
        assert_eq!(console.whole_secs_since_reset(), 7);
    }

    #[test]
    fn timer_resets_at_end_of_each_run() {
        let mut console = StyledConsole::with_width(40);
        console.last_reset = Instant::now() - Duration::from_secs(30);
        let before = Instant::now();
        console.run_command("starting", "the run", "true").unwrap();
        // A second run must measure from the first run's completion, not
        // from process start.
        assert!(console.last_reset >= before);
        assert_eq!(console.whole_secs_since_reset(), 0);
    }

    #[test]
    fn run_command_ignores_child_exit_status() {
        let mut console = StyledConsole::with_width(40);
        assert!(console.run_command("s", "e", "exit 3").is_ok());
    }

    #[test]
    fn try_run_command_surfaces_exit_status() {
        let mut console = StyledConsole::with_width(40);
        let status = console.try_run_command("s", "e", "exit 3").unwrap();
        assert_eq!(status.code(), Some(3));

        let ok = console.try_run_command("s", "e", "true").unwrap();
        assert!(ok.success());
    }
}
