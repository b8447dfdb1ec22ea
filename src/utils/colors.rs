/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

/// Placeholder shown for an absent time field.
pub const MISSING_TIME: &str = "--:--";

/// Dim a cell that only holds the missing-value placeholder; real values
/// pass through untouched. Apply after padding so the escape codes do not
/// skew column widths.
pub fn dim_placeholder(cell: &str) -> String {
    if cell.trim_end() == MISSING_TIME {
        format!("{GREY}{cell}{RESET}")
    } else {
        cell.to_string()
    }
}
