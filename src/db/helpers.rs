//! Value helpers for callers composing queries.

use chrono::Utc;

/// Current Unix timestamp, the canonical date representation for DB insertion.
pub fn now() -> i64 {
    Utc::now().timestamp()
}

/// Format a minute count as `[h]h:mm`.
pub fn minutes_to_hhmm(minutes: i64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
