//! Small formatting helpers shared by the screens

use chrono::{DateTime, Utc};

/// Local-style date, e.g. `15/01/2024`
pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%d/%m/%Y").to_string()
}

/// Two-digit hour and minute
pub fn format_time(at: DateTime<Utc>) -> String {
    at.format("%H:%M").to_string()
}

pub fn format_date_time(at: DateTime<Utc>) -> String {
    format!("{} at {}", format_date(at), format_time(at))
}

/// Coarse "time ago" label relative to `now`
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - then;
    if elapsed.num_minutes() < 1 {
        return "Just now".to_string();
    }
    if elapsed.num_hours() < 1 {
        return plural(elapsed.num_minutes(), "minute");
    }
    if elapsed.num_days() < 1 {
        return plural(elapsed.num_hours(), "hour");
    }
    plural(elapsed.num_days(), "day")
}

/// Days since the last checkup, or "Never"
pub fn checkup_label(days: Option<i64>) -> String {
    match days {
        Some(days) => format!("{} days ago", days),
        None => "Never".to_string(),
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

/// Cut `text` to at most `max` characters, marking the cut with an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// `lab_result` -> `Lab Result`
pub fn title_case_token(token: &str) -> String {
    token
        .split(|c| c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now, now), "Just now");
        assert_eq!(relative_time(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(relative_time(now - Duration::minutes(45), now), "45 minutes ago");
        assert_eq!(relative_time(now - Duration::hours(2), now), "2 hours ago");
        assert_eq!(relative_time(now - Duration::hours(24), now), "1 day ago");
        assert_eq!(relative_time(now - Duration::days(90), now), "90 days ago");
    }

    #[test]
    fn test_format_date_time() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 9, 7, 0).unwrap();
        assert_eq!(format_date_time(at), "05/01/2024 at 09:07");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Anonymous User", 5), "Anon…");
        assert_eq!(truncate("हिंदी भाषा", 3).chars().count(), 3);
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_title_case_token() {
        assert_eq!(title_case_token("lab_result"), "Lab Result");
        assert_eq!(title_case_token("ai-guidance"), "Ai Guidance");
        assert_eq!(title_case_token("records"), "Records");
    }

    #[test]
    fn test_checkup_label() {
        assert_eq!(checkup_label(Some(45)), "45 days ago");
        assert_eq!(checkup_label(None), "Never");
    }
}
