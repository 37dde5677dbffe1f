//! Calendar math for on-demand reports
//!
//! Windows are half-open `[start, end)` in UTC.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Number of categories on the landing page
pub const TOP_CATEGORY_LIMIT: i64 = 8;

/// Months covered by the growth charts
pub const GROWTH_MONTHS: u32 = 6;

/// Record types with creation-time growth charts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tracked {
    Users,
    Jobs,
    Companies,
}

/// One calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthWindow {
    pub label: &'static str,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

fn month_start(year: i32, month: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 + delta;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

/// The `count` calendar months ending with the month of `now`, oldest first
pub fn trailing_months(now: DateTime<Utc>, count: u32) -> Vec<MonthWindow> {
    (0..count as i32)
        .rev()
        .filter_map(|back| {
            let (year, month) = shift_month(now.year(), now.month(), -back);
            let (next_year, next_month) = shift_month(year, month, 1);
            Some(MonthWindow {
                label: MONTH_LABELS[(month - 1) as usize],
                start: month_start(year, month)?,
                end: month_start(next_year, next_month)?,
            })
        })
        .collect()
}

/// Start and end of the UTC day containing `now`
pub fn day_bounds(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map_or(now, |naive| naive.and_utc());
    (start, start + Duration::days(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_trailing_months_cross_year() {
        let now = Utc.with_ymd_and_hms(2024, 2, 15, 12, 0, 0).unwrap();
        let windows = trailing_months(now, 6);
        let labels: Vec<_> = windows.iter().map(|w| w.label).collect();
        assert_eq!(labels, ["Sep", "Oct", "Nov", "Dec", "Jan", "Feb"]);
        assert_eq!(windows[0].start, Utc.with_ymd_and_hms(2023, 9, 1, 0, 0, 0).unwrap());
        assert_eq!(windows[3].end, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(windows[5].end, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_windows_are_contiguous() {
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        let windows = trailing_months(now, 12);
        assert_eq!(windows.len(), 12);
        for pair in windows.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert!(windows[11].start <= now && now < windows[11].end);
    }

    #[test]
    fn test_day_bounds() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap();
        let (start, end) = day_bounds(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap());
    }
}
