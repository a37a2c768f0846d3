use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Named quick-pick periods, all computed relative to an injected `today`
/// so the arithmetic stays testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePreset {
    Today,
    Tomorrow,
    Yesterday,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
}

impl DatePreset {
    pub const ALL: [DatePreset; 7] = [
        DatePreset::Today,
        DatePreset::Tomorrow,
        DatePreset::Yesterday,
        DatePreset::ThisWeek,
        DatePreset::LastWeek,
        DatePreset::ThisMonth,
        DatePreset::LastMonth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DatePreset::Today => "Today",
            DatePreset::Tomorrow => "Tomorrow",
            DatePreset::Yesterday => "Yesterday",
            DatePreset::ThisWeek => "This week",
            DatePreset::LastWeek => "Last week",
            DatePreset::ThisMonth => "This month",
            DatePreset::LastMonth => "Last month",
        }
    }
}

/// Inclusive date range used by the list filters.
///
/// `start` is pinned to 00:00:00.000 and `end` to 23:59:59.999 of their
/// days, so membership checks on timestamps stay inclusive at both edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

fn day_start(d: NaiveDate) -> NaiveDateTime {
    d.and_time(NaiveTime::from_hms_milli_opt(0, 0, 0, 0).unwrap())
}

fn day_end(d: NaiveDate) -> NaiveDateTime {
    d.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap())
}

fn month_start(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

fn month_end(year: i32, month: u32) -> NaiveDate {
    let next = if month == 12 {
        month_start(year + 1, 1)
    } else {
        month_start(year, month + 1)
    };
    next - Duration::days(1)
}

impl DateRange {
    /// Build a range from two calendar days, normalizing to day bounds.
    pub fn days(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: day_start(start),
            end: day_end(end),
        }
    }

    pub fn single_day(d: NaiveDate) -> Self {
        Self::days(d, d)
    }

    /// Resolve a named preset against `today`. Weeks run Monday..Sunday.
    pub fn from_preset(preset: DatePreset, today: NaiveDate) -> Self {
        match preset {
            DatePreset::Today => Self::single_day(today),
            DatePreset::Tomorrow => Self::single_day(today + Duration::days(1)),
            DatePreset::Yesterday => Self::single_day(today - Duration::days(1)),
            DatePreset::ThisWeek => {
                let monday = today.week(Weekday::Mon).first_day();
                Self::days(monday, monday + Duration::days(6))
            }
            DatePreset::LastWeek => {
                let monday = today.week(Weekday::Mon).first_day() - Duration::days(7);
                Self::days(monday, monday + Duration::days(6))
            }
            DatePreset::ThisMonth => {
                Self::days(
                    month_start(today.year(), today.month()),
                    month_end(today.year(), today.month()),
                )
            }
            DatePreset::LastMonth => {
                let (y, m) = if today.month() == 1 {
                    (today.year() - 1, 12)
                } else {
                    (today.year(), today.month() - 1)
                };
                Self::days(month_start(y, m), month_end(y, m))
            }
        }
    }

    /// Parse a custom range from two "YYYY-MM-DD" form inputs.
    pub fn parse(from: &str, to: &str) -> Option<Self> {
        let start = NaiveDate::parse_from_str(from.trim(), "%Y-%m-%d").ok()?;
        let end = NaiveDate::parse_from_str(to.trim(), "%Y-%m-%d").ok()?;
        Some(Self::days(start, end))
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at <= self.end
    }

    /// Membership for date-only record fields.
    pub fn contains_day(&self, d: NaiveDate) -> bool {
        self.contains(day_start(d)) || self.contains(day_end(d))
    }
}

/// Parse a record timestamp that may arrive as a bare date or an ISO
/// datetime ("2025-06-16T10:00" / "...T10:00:00Z").
pub fn parse_record_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim().trim_end_matches('Z');
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(day_start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn tomorrow_preset_is_inclusive_of_that_day_only() {
        let range = DateRange::from_preset(DatePreset::Tomorrow, d("2025-06-15"));

        let included = parse_record_datetime("2025-06-16T10:00").unwrap();
        let before = parse_record_datetime("2025-06-15T23:59").unwrap();
        let after = parse_record_datetime("2025-06-17T00:00").unwrap();

        assert!(range.contains(included));
        assert!(!range.contains(before));
        assert!(!range.contains(after));
    }

    #[test]
    fn custom_range_normalizes_day_bounds() {
        let range = DateRange::parse("2025-03-10", "2025-03-12").unwrap();
        assert_eq!(range.start, d("2025-03-10").and_hms_milli_opt(0, 0, 0, 0).unwrap());
        assert_eq!(range.end, d("2025-03-12").and_hms_milli_opt(23, 59, 59, 999).unwrap());
        // both edges inclusive
        assert!(range.contains(range.start));
        assert!(range.contains(range.end));
    }

    #[test]
    fn week_presets_run_monday_to_sunday() {
        // 2025-06-15 is a Sunday
        let this_week = DateRange::from_preset(DatePreset::ThisWeek, d("2025-06-15"));
        assert_eq!(this_week.start.date(), d("2025-06-09"));
        assert_eq!(this_week.end.date(), d("2025-06-15"));

        let last_week = DateRange::from_preset(DatePreset::LastWeek, d("2025-06-15"));
        assert_eq!(last_week.start.date(), d("2025-06-02"));
        assert_eq!(last_week.end.date(), d("2025-06-08"));
    }

    #[test]
    fn month_presets_cover_whole_months() {
        let this_month = DateRange::from_preset(DatePreset::ThisMonth, d("2025-06-15"));
        assert_eq!(this_month.start.date(), d("2025-06-01"));
        assert_eq!(this_month.end.date(), d("2025-06-30"));

        let last_month = DateRange::from_preset(DatePreset::LastMonth, d("2025-01-10"));
        assert_eq!(last_month.start.date(), d("2024-12-01"));
        assert_eq!(last_month.end.date(), d("2024-12-31"));
    }

    #[test]
    fn record_datetime_formats() {
        assert!(parse_record_datetime("2025-06-16T10:00").is_some());
        assert!(parse_record_datetime("2025-06-16T10:00:00Z").is_some());
        assert!(parse_record_datetime("2025-06-16").is_some());
        assert!(parse_record_datetime("junk").is_none());
    }
}
