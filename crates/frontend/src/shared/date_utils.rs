/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application

/// Format ISO datetime string to DD.MM.YYYY HH:MM format
/// Example: "2025-03-15T14:02:26.123Z" -> "15.03.2025 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let hm: String = time_part
                    .trim_end_matches('Z')
                    .split(':')
                    .take(2)
                    .collect::<Vec<_>>()
                    .join(":");
                return format!("{}.{}.{} {}", day, month, year, hm);
            }
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2025-03-15" or "2025-03-15T14:02:26Z" -> "15.03.2025"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Human label for a "YYYY-MM" salary/evaluation month.
/// Example: "2025-03" -> "March 2025"
pub fn month_label(month_str: &str) -> String {
    const MONTHS: [&str; 12] = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];
    if let Some((year, month)) = month_str.split_once('-') {
        if let Ok(m) = month.parse::<usize>() {
            if (1..=12).contains(&m) {
                return format!("{} {}", MONTHS[m - 1], year);
            }
        }
    }
    month_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2025-03-15T14:02:26.123Z"), "15.03.2025 14:02");
        assert_eq!(format_datetime("2025-12-31T23:59"), "31.12.2025 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-15"), "15.03.2025");
        assert_eq!(format_date("2025-03-15T14:02:26.123Z"), "15.03.2025");
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label("2025-03"), "March 2025");
        assert_eq!(month_label("2025-13"), "2025-13");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
