//! ANSI-aware text measurement, padding, and wrapping.
//!
//! All functions preserve ANSI escape codes without counting them toward
//! display width, and use Unicode width rules (CJK characters occupy two
//! columns).

use console::{measure_text_width, pad_str};

use crate::style::Justify;

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// # Example
///
/// ```rust
/// use veneer::draw::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Pads a string to `width` display columns with the given justification.
///
/// Strings already at or beyond the target width are returned unchanged;
/// no truncation is performed.
///
/// # Example
///
/// ```rust
/// use veneer::draw::pad;
/// use veneer::style::Justify;
///
/// assert_eq!(pad("hi", 6, Justify::Left), "hi    ");
/// assert_eq!(pad("hi", 6, Justify::Center), "  hi  ");
/// assert_eq!(pad("hi", 6, Justify::Right), "    hi");
/// ```
pub fn pad(s: &str, width: usize, justify: Justify) -> String {
    pad_str(s, width, justify.alignment(), None).into_owned()
}

/// Word-wraps text to the given display width.
///
/// Input is split on embedded newlines first; each line is then wrapped
/// greedily at word boundaries. Words wider than the target width are
/// broken at character boundaries. Always returns at least one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for line in text.split('\n') {
        wrap_line(line, width, &mut out);
    }

    if out.is_empty() {
        out.push(String::new());
    }
    out
}

fn wrap_line(line: &str, width: usize, out: &mut Vec<String>) {
    if line.is_empty() {
        out.push(String::new());
        return;
    }

    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split_whitespace() {
        let word_width = display_width(word);

        if word_width > width {
            // Overlong word: flush what we have, then hard-break it.
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
                current_width = 0;
            }
            break_word(word, width, out, &mut current, &mut current_width);
            continue;
        }

        let sep = usize::from(!current.is_empty());
        if current_width + sep + word_width > width {
            out.push(std::mem::take(&mut current));
            current_width = 0;
            current.push_str(word);
            current_width += word_width;
        } else {
            if sep == 1 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }
    }

    out.push(current);
}

/// Breaks a single overlong word at character boundaries. The final partial
/// chunk is left in `current` so following words can share its line.
fn break_word(
    word: &str,
    width: usize,
    out: &mut Vec<String>,
    current: &mut String,
    current_width: &mut usize,
) {
    for c in word.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if *current_width + w > width {
            out.push(std::mem::take(current));
            *current_width = 0;
        }
        current.push(c);
        *current_width += w;
    }
}
