//! Small formatting helpers shared by the screens.

use chrono::{DateTime, Utc};

/// Format a timestamp the way the Dutch locale writes dates: `d-m-jjjj`.
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%-d-%-m-%Y").to_string()
}

/// Truncate a string to fit `max_len`, appending "..." when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    } else {
        s.chars().take(max_len).collect()
    }
}
