use chrono::{DateTime, Utc};

/// Elapsed time between creation and completion as `"{h}h {m}m {s}s"`.
///
/// Each unit is truncated at its boundary and hours are unbounded. A
/// completion earlier than creation clamps to zero.
pub fn time_taken(created_at: DateTime<Utc>, completed_at: DateTime<Utc>) -> String {
    let total = (completed_at - created_at).num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;
    format!("{hours}h {minutes}m {seconds}s")
}
