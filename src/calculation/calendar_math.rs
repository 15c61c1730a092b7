//! Pure date utilities.
//!
//! This module is the foundation of the engine: day-of-week classification,
//! canonical date formatting/parsing, month-range computation, and weekday
//! counting. Every date entering the engine is normalized through
//! [`parse_date`]/[`format_date`] before any comparison or set membership
//! test, so no two representations of the same calendar day coexist.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::models::DateInterval;

/// The earliest year the engine computes calendars for.
pub const SUPPORTED_YEAR_MIN: i32 = 2020;

/// The latest year the engine computes calendars for.
pub const SUPPORTED_YEAR_MAX: i32 = 2030;

/// Clamps a year into the supported range.
///
/// Out-of-range caller input degrades to the nearest valid year instead of
/// failing.
pub fn clamp_year(year: i32) -> i32 {
    year.clamp(SUPPORTED_YEAR_MIN, SUPPORTED_YEAR_MAX)
}

/// Clamps a month index into `1..=12`.
pub fn clamp_month(month: u32) -> u32 {
    month.clamp(1, 12)
}

/// Returns the day of week as a number, with 0 = Sunday and 6 = Saturday.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::day_of_week;
/// use chrono::NaiveDate;
///
/// // 2024-05-04 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2024, 5, 4).unwrap();
/// assert_eq!(day_of_week(saturday), 6);
///
/// // 2024-05-05 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2024, 5, 5).unwrap();
/// assert_eq!(day_of_week(sunday), 0);
/// ```
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Returns true for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Canonicalizes a date to the `YYYY-MM-DD` form used for comparison,
/// storage, and map keys.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses a canonical `YYYY-MM-DD` string.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDate`] for empty or unparseable input.
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        value: value.to_string(),
    })
}

/// Computes the interval spanning the first to last calendar day of a month.
///
/// Year and month are defensively clamped to the supported range rather
/// than rejected.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::month_range;
/// use chrono::NaiveDate;
///
/// let february = month_range(2024, 2);
/// assert_eq!(february.start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// // 2024 is a leap year
/// assert_eq!(february.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn month_range(year: i32, month: u32) -> DateInterval {
    let year = clamp_year(year);
    let month = clamp_month(month);
    let start =
        NaiveDate::from_ymd_opt(year, month, 1).expect("clamped year and month form a valid date");
    let (next_year, next_month) = shift_month(year, month, 1);
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("shifted month index stays in 1..=12")
        .pred_opt()
        .expect("first of month always has a predecessor");
    DateInterval { start, end }
}

/// Counts the days in a month that are not weekend days.
///
/// This is the base unit for required-hours computation.
pub fn weekday_count_in_month(year: i32, month: u32) -> u32 {
    month_range(year, month)
        .days()
        .filter(|d| !is_weekend(*d))
        .count() as u32
}

/// Lists every calendar day of a month in ascending order.
pub fn days_in_month(year: i32, month: u32) -> Vec<NaiveDate> {
    month_range(year, month).days().collect()
}

/// Shifts a year/month pair by a signed number of months, wrapping across
/// year boundaries.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::shift_month;
///
/// assert_eq!(shift_month(2024, 12, 1), (2025, 1));
/// assert_eq!(shift_month(2024, 1, -1), (2023, 12));
/// assert_eq!(shift_month(2024, 6, -14), (2023, 4));
/// ```
pub fn shift_month(year: i32, month: u32, offset: i32) -> (i32, u32) {
    let zero_based = year * 12 + month as i32 - 1 + offset;
    (zero_based.div_euclid(12), (zero_based.rem_euclid(12) + 1) as u32)
}

/// Returns the English name of a month; the index is clamped to `1..=12`.
pub fn month_name(month: u32) -> &'static str {
    match clamp_month(month) {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

/// Returns the English name of a date's day of week.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_day_of_week_runs_sunday_to_saturday() {
        // 2024-05-05 is a Sunday
        assert_eq!(day_of_week(make_date("2024-05-05")), 0);
        assert_eq!(day_of_week(make_date("2024-05-06")), 1);
        assert_eq!(day_of_week(make_date("2024-05-07")), 2);
        assert_eq!(day_of_week(make_date("2024-05-08")), 3);
        assert_eq!(day_of_week(make_date("2024-05-09")), 4);
        assert_eq!(day_of_week(make_date("2024-05-10")), 5);
        assert_eq!(day_of_week(make_date("2024-05-11")), 6);
    }

    #[test]
    fn test_is_weekend_only_for_saturday_and_sunday() {
        assert!(is_weekend(make_date("2024-05-04")));
        assert!(is_weekend(make_date("2024-05-05")));
        assert!(!is_weekend(make_date("2024-05-03")));
        assert!(!is_weekend(make_date("2024-05-06")));
    }

    #[test]
    fn test_parse_date_accepts_canonical_form() {
        assert_eq!(parse_date("2024-05-01").unwrap(), make_date("2024-05-01"));
    }

    #[test]
    fn test_parse_date_rejects_empty_input() {
        assert!(matches!(
            parse_date(""),
            Err(EngineError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_parse_date_rejects_malformed_input() {
        for value in ["05/01/2024", "2024-13-01", "2024-02-30", "yesterday"] {
            assert!(
                matches!(parse_date(value), Err(EngineError::InvalidDate { .. })),
                "expected InvalidDate for {value}"
            );
        }
    }

    #[test]
    fn test_month_range_regular_month() {
        let range = month_range(2024, 5);
        assert_eq!(range.start, make_date("2024-05-01"));
        assert_eq!(range.end, make_date("2024-05-31"));
    }

    #[test]
    fn test_month_range_december_wraps_into_next_year() {
        let range = month_range(2024, 12);
        assert_eq!(range.start, make_date("2024-12-01"));
        assert_eq!(range.end, make_date("2024-12-31"));
    }

    #[test]
    fn test_month_range_clamps_out_of_range_input() {
        let range = month_range(1999, 0);
        assert_eq!(range.start, make_date("2020-01-01"));

        let range = month_range(2050, 13);
        assert_eq!(range.start, make_date("2030-12-01"));
        assert_eq!(range.end, make_date("2030-12-31"));
    }

    #[test]
    fn test_weekday_count_february_2024() {
        assert_eq!(weekday_count_in_month(2024, 2), 21);
    }

    #[test]
    fn test_weekday_count_january_2024() {
        assert_eq!(weekday_count_in_month(2024, 1), 23);
    }

    #[test]
    fn test_days_in_month_lengths() {
        assert_eq!(days_in_month(2024, 2).len(), 29);
        assert_eq!(days_in_month(2023, 2).len(), 28);
        assert_eq!(days_in_month(2024, 6).len(), 30);
        assert_eq!(days_in_month(2024, 7).len(), 31);
    }

    #[test]
    fn test_shift_month_wraparound() {
        assert_eq!(shift_month(2024, 12, 1), (2025, 1));
        assert_eq!(shift_month(2024, 12, 2), (2025, 2));
        assert_eq!(shift_month(2025, 1, -1), (2024, 12));
        assert_eq!(shift_month(2024, 6, 0), (2024, 6));
        assert_eq!(shift_month(2024, 6, 18), (2025, 12));
        assert_eq!(shift_month(2024, 6, -18), (2022, 12));
    }

    #[test]
    fn test_month_name_clamps() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "January");
        assert_eq!(month_name(99), "December");
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(make_date("2024-05-06")), "Monday");
        assert_eq!(weekday_name(make_date("2024-05-04")), "Saturday");
    }

    proptest! {
        // Formatting a date to canonical form and parsing it back yields the
        // same calendar day, for any date within the supported year range.
        #[test]
        fn prop_format_parse_round_trip(
            year in SUPPORTED_YEAR_MIN..=SUPPORTED_YEAR_MAX,
            month in 1u32..=12,
            day in 1u32..=28,
        ) {
            let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            let parsed = parse_date(&format_date(date)).unwrap();
            prop_assert_eq!(parsed, date);
        }

        // Chronological order of dates equals lexicographic order of their
        // canonical strings.
        #[test]
        fn prop_canonical_order_is_lexicographic(
            year_a in SUPPORTED_YEAR_MIN..=SUPPORTED_YEAR_MAX,
            month_a in 1u32..=12,
            day_a in 1u32..=28,
            year_b in SUPPORTED_YEAR_MIN..=SUPPORTED_YEAR_MAX,
            month_b in 1u32..=12,
            day_b in 1u32..=28,
        ) {
            let a = NaiveDate::from_ymd_opt(year_a, month_a, day_a).unwrap();
            let b = NaiveDate::from_ymd_opt(year_b, month_b, day_b).unwrap();
            prop_assert_eq!(a.cmp(&b), format_date(a).cmp(&format_date(b)));
        }
    }
}
