/// Format large counts with thousands separators for stat tiles.
pub fn format_count(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, c);
    }
    if n < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

pub fn percent_label(percent: f32) -> String {
    format!("{:.0}%", percent.clamp(0.0, 100.0))
}

/// The calendar-date part of an ISO-8601 timestamp, for compact display.
pub fn date_label(timestamp: &str) -> String {
    timestamp
        .split('T')
        .next()
        .unwrap_or(timestamp)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn percent_is_clamped() {
        assert_eq!(percent_label(42.4), "42%");
        assert_eq!(percent_label(120.0), "100%");
        assert_eq!(percent_label(-3.0), "0%");
    }

    #[test]
    fn date_label_strips_the_time_part() {
        assert_eq!(date_label("2025-06-01T10:00:00Z"), "2025-06-01");
        assert_eq!(date_label("not a timestamp"), "not a timestamp");
    }
}
