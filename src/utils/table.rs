//! Table rendering utilities for CLI outputs.
//! Padding is display-width aware so records with non-ASCII names keep the
//! columns aligned.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: &'static str,
    pub width: usize,
}

impl Column {
    pub const fn new(header: &'static str, width: usize) -> Self {
        Self { header, width }
    }
}

/// Left-align `s` into a cell of `width` display columns. Values wider
/// than the column are not truncated; they push the row out instead.
pub fn pad(s: &str, width: usize) -> String {
    let used = s.width();
    let fill = width.saturating_sub(used);
    format!("{}{}", s, " ".repeat(fill))
}

/// One header line from the column set, trailing space trimmed.
pub fn header_line(columns: &[Column]) -> String {
    let mut out = String::new();
    for col in columns {
        out.push_str(&pad(col.header, col.width));
        out.push(' ');
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_fills_to_width() {
        assert_eq!(pad("abc", 6), "abc   ");
    }

    #[test]
    fn test_pad_never_truncates() {
        assert_eq!(pad("abcdef", 3), "abcdef");
    }

    #[test]
    fn test_pad_counts_display_width() {
        // "Crêpe" is 5 display columns even though ê is multi-byte.
        assert_eq!(pad("Crêpe", 7), "Crêpe  ");
    }

    #[test]
    fn test_header_line() {
        let cols = [Column::new("NAME", 6), Column::new("ADDRESS", 9)];
        assert_eq!(header_line(&cols), "NAME   ADDRESS");
    }
}
