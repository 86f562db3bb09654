//! Formatting utilities used for CLI output.

use unicode_width::UnicodeWidthStr;

/// Pad to a display width; Persian text and emoji are measured by columns,
/// not bytes.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Centre `s` in `width` columns (extra space goes right).
pub fn center(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    let total = width.saturating_sub(w);
    let left = total / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(total - left))
}

/// Offset with an explicit sign: "+3", "-2", "0".
pub fn signed_days(offset: i64) -> String {
    if offset > 0 {
        format!("+{offset}")
    } else {
        offset.to_string()
    }
}

/// "N رویداد دیگر..." footer for cells with more events than shown.
pub fn more_events(hidden: usize) -> String {
    format!("{hidden} رویداد دیگر...")
}
