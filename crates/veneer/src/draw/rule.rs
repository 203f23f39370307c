//! Horizontal rule rendering.

use console::Style;

use super::text::display_width;

/// Length of the rule stub drawn to the left of an inline label.
const LABEL_LEAD: usize = 2;

/// Renders a full-width horizontal rule, optionally carrying an inline
/// label embedded near the left edge.
///
/// The rule line is drawn with `line`, the label (if any) with `text`.
/// An empty label produces an unbroken line, so `render_rule(w, "", ..)`
/// and a plain rule are the same output. Labels are not truncated; a label
/// wider than the rule simply overflows.
///
/// # Example
///
/// ```rust
/// use veneer::draw::render_rule;
/// use console::Style;
///
/// let plain = Style::new();
/// assert_eq!(render_rule(10, "", &plain, &plain), "──────────");
/// assert_eq!(render_rule(10, "hi", &plain, &plain), "── hi ────");
/// ```
pub fn render_rule(width: usize, label: &str, line: &Style, text: &Style) -> String {
    if label.is_empty() {
        return line.apply_to("─".repeat(width)).to_string();
    }

    let label_width = display_width(label);
    let fill = width.saturating_sub(LABEL_LEAD + label_width + 2);

    format!(
        "{} {} {}",
        line.apply_to("─".repeat(LABEL_LEAD)),
        text.apply_to(label),
        line.apply_to("─".repeat(fill)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Style {
        Style::new()
    }

    #[test]
    fn empty_label_matches_plain_rule() {
        let a = render_rule(40, "", &plain(), &plain());
        let b = "─".repeat(40);
        assert_eq!(a, b);
    }

    #[test]
    fn labeled_rule_embeds_label_left() {
        let rule = render_rule(20, "section", &plain(), &plain());
        assert!(rule.starts_with("── section ─"));
        assert_eq!(display_width(&rule), 20);
    }

    #[test]
    fn label_wider_than_rule_overflows() {
        let rule = render_rule(4, "a long label", &plain(), &plain());
        assert!(rule.contains("a long label"));
    }

    #[test]
    fn styles_apply_to_line_and_label_separately() {
        let line = Style::new().red().force_styling(true);
        let text = Style::new().green().force_styling(true);
        let rule = render_rule(20, "x", &line, &text);
        assert!(rule.contains("\u{1b}[31m"));
        assert!(rule.contains("\u{1b}[32m"));
    }
}
