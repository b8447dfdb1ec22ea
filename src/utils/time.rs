//! Time utilities: the current-instant context the dataset query is built
//! from, plus the 24h formatting and day-order mapping it needs.

use chrono::{DateTime, Datelike, Local};

/// Snapshot of "now" taken once at startup. The literal and the day order
/// are derived eagerly so every page of one session filters on the same
/// instant.
#[derive(Debug, Clone)]
pub struct TimeContext {
    pub now: DateTime<Local>,
    /// `'HH:MM'` — quoted for embedding in a SoQL text comparison.
    pub time_literal: String,
    /// Weekday with Sunday = 0 .. Saturday = 6, the dataset's `dayorder`
    /// convention.
    pub day_order: u32,
}

impl TimeContext {
    pub fn local_now() -> Self {
        Self::from_datetime(Local::now())
    }

    pub fn from_datetime(now: DateTime<Local>) -> Self {
        Self {
            time_literal: quote_literal(&format_24h(&now)),
            day_order: day_order(&now),
            now,
        }
    }
}

/// Zero-padded `HH:MM`, the format of the dataset's `start24`/`end24`
/// columns.
pub fn format_24h(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M").to_string()
}

/// Wrap a string in single quotes, SoQL's text-literal syntax.
pub fn quote_literal(s: &str) -> String {
    format!("'{s}'")
}

/// Weekday ordinal with Sunday = 0, matching the dataset's `dayorder`
/// column (chrono's days-from-Sunday count).
pub fn day_order(dt: &DateTime<Local>) -> u32 {
    dt.weekday().num_days_from_sunday()
}
