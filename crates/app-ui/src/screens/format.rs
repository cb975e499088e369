//! Text and date formatting for event content

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Shown when a date string cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Split server-supplied free text into display paragraphs
///
/// Handles both escaped sequences (a backslash followed by `r` or `n`, as
/// some payloads double-escape) and real CRLF line breaks. Lines are trimmed;
/// blank lines are kept as empty paragraphs.
pub fn format_content(text: &str) -> Vec<String> {
    text.replace("\\r", "")
        .replace("\\n", "\n")
        .replace("\r\n", "\n")
        .split('\n')
        .map(|line| line.trim().to_string())
        .collect()
}

/// Render an event date in long US form, e.g. `March 5, 2025`
///
/// Accepts RFC 3339 timestamps (the calendar date in the timestamp's own
/// offset is used), naive date-times, and plain dates.
pub fn format_event_date(raw: &str) -> String {
    parse_date(raw.trim())
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}
