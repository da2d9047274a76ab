//! Calendar primitives and the week axis.
//!
//! All scheduling math operates on civil dates (`chrono::NaiveDate`):
//! the business plans in whole days, weeks start on Monday, and episodes
//! publish on Saturdays. The week axis below uses the same Monday
//! convention as the phase calculator so the rendered grid lines up
//! with the scheduled blocks.
//!
//! # Time Model
//! Dates are inclusive calendar days with no time-of-day component.
//! A "week" added to a date is exactly 7 days; no DST or timezone
//! adjustment applies.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Adds a signed number of days to a date.
#[inline]
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Adds a signed number of 7-day weeks to a date.
#[inline]
pub fn add_weeks(date: NaiveDate, weeks: i64) -> NaiveDate {
    add_days(date, weeks * 7)
}

/// Returns the Monday on or before the given date.
#[inline]
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day()
}

/// Returns the first Saturday on or after the given date.
///
/// A Saturday input is returned unchanged.
pub fn next_saturday(date: NaiveDate) -> NaiveDate {
    let day = date.weekday().num_days_from_sunday();
    let ahead = (Weekday::Sat.num_days_from_sunday() + 7 - day) % 7;
    add_days(date, i64::from(ahead))
}

/// One Monday-aligned bucket of the calendar axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    /// Sequential position in the axis (0-based).
    pub index: usize,
    /// Monday this week starts on.
    pub start: NaiveDate,
    /// Sunday this week ends on (`start + 6` days).
    pub end: NaiveDate,
    /// Short display label (`"W1"`, `"W2"`, ...).
    pub label: String,
    /// Calendar month the week's start falls in (0-based, January = 0).
    pub month: u32,
    /// Abbreviated month name of the week's start (`"Jan"`, `"Feb"`, ...).
    pub month_label: String,
}

/// Builds the week axis for one calendar year.
///
/// Covers Monday-aligned 7-day buckets from the Monday on/before
/// January 1 to the Monday on/before December 31. Scheduled blocks
/// outside the year keep their real dates; they simply render past
/// the axis.
pub fn week_axis(year: i32) -> Vec<Week> {
    let (Some(jan1), Some(dec31)) = (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) else {
        return Vec::new();
    };

    let last_start = start_of_week(dec31);
    let mut cursor = start_of_week(jan1);
    let mut weeks = Vec::new();
    let mut index = 0;

    while cursor <= last_start {
        weeks.push(Week {
            index,
            start: cursor,
            end: add_days(cursor, 6),
            label: format!("W{}", index + 1),
            month: cursor.month0(),
            month_label: cursor.format("%b").to_string(),
        });
        cursor = add_days(cursor, 7);
        index += 1;
    }

    weeks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_add_days_and_weeks() {
        assert_eq!(add_days(d(2025, 6, 16), 13), d(2025, 6, 29));
        assert_eq!(add_days(d(2025, 6, 16), -1), d(2025, 6, 15));
        assert_eq!(add_weeks(d(2025, 6, 16), 2), d(2025, 6, 30));
        assert_eq!(add_weeks(d(2025, 6, 16), -5), d(2025, 5, 12));
    }

    #[test]
    fn test_start_of_week() {
        // 2025-06-18 is a Wednesday
        assert_eq!(start_of_week(d(2025, 6, 18)), d(2025, 6, 16));
        // Monday maps to itself
        assert_eq!(start_of_week(d(2025, 6, 16)), d(2025, 6, 16));
        // Sunday belongs to the preceding Monday's week
        assert_eq!(start_of_week(d(2025, 6, 22)), d(2025, 6, 16));
    }

    #[test]
    fn test_next_saturday() {
        // 2025-07-13 is a Sunday
        assert_eq!(next_saturday(d(2025, 7, 13)), d(2025, 7, 19));
        // A Saturday is used as-is
        assert_eq!(next_saturday(d(2025, 7, 19)), d(2025, 7, 19));
        // Friday rolls forward one day
        assert_eq!(next_saturday(d(2025, 7, 18)), d(2025, 7, 19));
    }

    #[test]
    fn test_week_axis_alignment() {
        let weeks = week_axis(2025);
        assert!(!weeks.is_empty());

        for (i, w) in weeks.iter().enumerate() {
            assert_eq!(w.index, i);
            assert_eq!(w.start.weekday(), Weekday::Mon);
            assert_eq!(w.end, add_days(w.start, 6));
            assert_eq!(w.label, format!("W{}", i + 1));
        }

        // Consecutive weeks are exactly 7 days apart
        for pair in weeks.windows(2) {
            assert_eq!(pair[1].start, add_days(pair[0].start, 7));
        }
    }

    #[test]
    fn test_week_axis_covers_year() {
        let weeks = week_axis(2025);

        // 2025-01-01 is a Wednesday: the axis opens in the prior December
        let first = weeks.first().unwrap();
        assert_eq!(first.start, d(2024, 12, 30));
        assert_eq!(first.month, 11);
        assert_eq!(first.month_label, "Dec");

        // 2025-12-31 is a Wednesday: the last bucket starts 2025-12-29
        let last = weeks.last().unwrap();
        assert_eq!(last.start, d(2025, 12, 29));
        assert_eq!(weeks.len(), 53);
    }

    #[test]
    fn test_week_month_tagging() {
        let weeks = week_axis(2025);
        // Week starting 2025-06-16 falls in June (month0 = 5)
        let june = weeks.iter().find(|w| w.start == d(2025, 6, 16)).unwrap();
        assert_eq!(june.month, 5);
        assert_eq!(june.month_label, "Jun");
    }
}
