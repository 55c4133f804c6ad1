use chrono::NaiveDateTime;

pub const UNKNOWN_DATE: &str = "Unknown date";

/// US-dollar amount with thousands separators, e.g. `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

pub fn format_date(timestamp: Option<&NaiveDateTime>) -> String {
    timestamp
        .map(|ts| ts.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

pub fn format_datetime(timestamp: Option<&NaiveDateTime>) -> String {
    timestamp
        .map(|ts| ts.format("%b %-d, %Y, %I:%M %p").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

/// Shortens long names to `max` characters, ending in an ellipsis.
pub fn truncate_name(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        return name.to_string();
    }
    let keep = max.saturating_sub(3);
    format!("{}...", name.chars().take(keep).collect::<String>())
}

pub fn format_file_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    let bytes_f = bytes as f64;
    if bytes_f < KIB {
        format!("{} B", bytes)
    } else if bytes_f < KIB * KIB {
        format!("{:.1} KB", bytes_f / KIB)
    } else {
        format!("{:.1} MB", bytes_f / (KIB * KIB))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::parse_timestamp;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(0.01), "$0.01");
        assert_eq!(format_currency(12.5), "$12.50");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(-999.999), "-$1,000.00");
        assert_eq!(format_currency(-0.001), "$0.00");
        assert_eq!(format_currency(f64::NAN), "$0.00");
    }

    #[test]
    fn dates_use_short_month_names() {
        let ts = parse_timestamp("2025-01-05T15:04:05.123").unwrap();
        assert_eq!(format_date(Some(&ts)), "Jan 5, 2025");
        assert_eq!(format_datetime(Some(&ts)), "Jan 5, 2025, 03:04 PM");

        let morning = parse_timestamp("2024-11-20T00:30:00").unwrap();
        assert_eq!(format_datetime(Some(&morning)), "Nov 20, 2024, 12:30 AM");

        assert_eq!(format_date(None), UNKNOWN_DATE);
    }

    #[test]
    fn truncates_long_names() {
        assert_eq!(truncate_name("short.png", 20), "short.png");
        assert_eq!(truncate_name("a_very_long_screenshot_name.png", 20), "a_very_long_scree...");
        assert_eq!(truncate_name("ééééé", 4), "é...");
    }

    #[test]
    fn file_sizes() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(10 * 1024 * 1024), "10.0 MB");
    }
}
