use chrono::{DateTime, Utc};

/// Percentage change between two readings.
///
/// Defined as `0` when the old value is zero so the UI never shows a NaN or
/// infinity for a metric that starts from nothing.
pub fn percent_change(old_value: f64, new_value: f64) -> f64 {
    if old_value == 0.0 {
        return 0.0;
    }
    (new_value - old_value) / old_value.abs() * 100.0
}

/// Formats a timestamp the way chart axes expect it: `YYYY-MM-DD`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}
