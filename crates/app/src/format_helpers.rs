//! Shared formatting utilities for the dashboard cards.

use chrono::{DateTime, TimeZone};
use shared_types::LevelProgress;

/// Format a date as "Mon, 19 October, 2026" (short weekday, two-digit day,
/// full month name, year).
pub fn format_long_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%a, %d %B, %Y").to_string()
}

/// Machine-readable value for a `<time datetime=...>` attribute.
pub fn format_iso_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.to_rfc3339()
}

/// Profile headline, e.g. "Good Morning🖖, TXN".
pub fn greeting_line(greeting: &str, name: &str) -> String {
    format!("{greeting}\u{1F596}, {name}")
}

/// "1 todo" / "3 todos".
pub fn todo_count_label(count: usize) -> String {
    if count == 1 {
        "1 todo".to_string()
    } else {
        format!("{count} todos")
    }
}

/// "Progress: 100 / 150 XP".
pub fn progress_label(progress: &LevelProgress) -> String {
    format!(
        "Progress: {} / {} XP",
        progress.displayed_xp(),
        progress.xp_for_next_level
    )
}
