use chrono::{DateTime, Local};

/// Age of a history entry relative to `now`: "just now", "4m ago", "2h ago", "3d ago"
pub fn format_age(created_at: &DateTime<Local>, now: &DateTime<Local>) -> String {
    let seconds = now.signed_duration_since(*created_at).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d ago", days)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        "just now".to_string()
    }
}

/// Picker label for a history entry: its timestamp plus relative age
pub fn entry_label(timestamp: &str, created_at: &DateTime<Local>, now: &DateTime<Local>) -> String {
    format!("{} ({})", timestamp, format_age(created_at, now))
}
