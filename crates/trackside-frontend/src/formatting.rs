/// Formats a percentage change with an explicit sign for gains: `+12.3%`,
/// `-4.0%`, `0.0%`.
pub fn signed_percent(change: f64) -> String {
    format!("{}{:.1}%", if change > 0.0 { "+" } else { "" }, change)
}

/// Text for the unread badge: `None` hides the badge entirely at zero.
pub fn badge_text(count: u64) -> Option<String> {
    (count > 0).then(|| count.to_string())
}
