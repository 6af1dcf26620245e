use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Parse a feed timestamp ("2026-02-27T13:30:00Z") and shift it into the
/// tournament's wall clock. The feed reports whole-hour offsets, so this is
/// plain hour arithmetic rather than real timezone handling.
pub(crate) fn local_datetime(utc: &str, tz_offset: i64) -> Option<NaiveDateTime> {
    let trimmed = utc.trim_end_matches('Z');
    let parsed = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()?;
    Some(parsed + Duration::hours(tz_offset))
}

/// Local tip-off time ("HH:MM") for a UTC feed timestamp.
/// Returns an empty string if the timestamp can't be parsed, which the
/// schedule sorts treat as "time TBD".
pub fn format_local_time(utc: &str, tz_offset: i64) -> String {
    match local_datetime(utc, tz_offset) {
        Some(local) => local.format("%H:%M").to_string(),
        None => String::new(),
    }
}

/// Local calendar date ("YYYY-MM-DD") for a UTC feed timestamp.
pub fn format_local_date(utc: &str, tz_offset: i64) -> String {
    match local_datetime(utc, tz_offset) {
        Some(local) => local.format("%Y-%m-%d").to_string(),
        None => utc.chars().take(10).collect(), // Best effort if can't parse
    }
}

/// Format a stored date ("YYYY-MM-DD") for display, e.g. "Fri, Feb 27"
pub fn format_display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%a, %b %-d").to_string(),
        Err(_) => date.to_string(), // Return original if can't format
    }
}

/// Format an ISO datetime for display, e.g. "Fri, Feb 27 · 18:00"
pub fn format_display_datetime(datetime: &str) -> String {
    let trimmed = datetime.trim_end_matches('Z');
    match NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        Ok(dt) => dt.format("%a, %b %-d · %H:%M").to_string(),
        Err(_) => datetime.to_string(),
    }
}

/// Sort key for "HH:MM" strings where an empty time sorts last
pub fn time_sort_key(time: &str) -> &str {
    if time.is_empty() {
        "99:99"
    } else {
        time
    }
}

/// Case-insensitive string ordering
pub fn cmp_ignore_case(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Case-insensitive substring check
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}
