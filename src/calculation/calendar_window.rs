//! Multi-month calendar window construction.
//!
//! Builds a rolling window of month calendars for one user, with every day
//! cell annotated with weekend/holiday/public-holiday/location flags. The
//! builder is pure over prefetched record sets; the caller fetches records
//! once for the entire window span rather than per month.

use std::collections::{HashMap, HashSet};
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::DateInterval;

use super::calendar_math::{clamp_month, clamp_year, is_weekend, month_name, shift_month};

/// One annotated day in a month calendar. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// The calendar day.
    pub date: NaiveDate,
    /// Whether the day is a Saturday or Sunday.
    pub is_weekend: bool,
    /// Whether the user recorded a personal holiday on the day.
    pub is_holiday: bool,
    /// Whether the day is a public holiday.
    pub is_public_holiday: bool,
    /// The user's declared location: `Some(true)` onsite, `Some(false)`
    /// remote, `None` when nothing was declared.
    pub is_onsite: Option<bool>,
}

/// One month of annotated day cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCalendar {
    /// The calendar year.
    pub year: i32,
    /// The month index, 1-based.
    pub month: u32,
    /// English month name for display.
    pub month_name: String,
    /// Every day of the month in ascending order.
    pub days: Vec<DayCell>,
}

/// Why today's cell is non-actionable for location entry.
///
/// When several reasons apply at once, the strongest wins: public holiday
/// over personal holiday over weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationEntryRestriction {
    /// Today is a public holiday.
    PublicHoliday,
    /// Today is one of the user's personal holidays.
    PersonalHoliday,
    /// Today is a Saturday or Sunday.
    Weekend,
}

impl fmt::Display for LocationEntryRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationEntryRestriction::PublicHoliday => {
                write!(f, "today is a public holiday")
            }
            LocationEntryRestriction::PersonalHoliday => {
                write!(f, "today is one of your holidays")
            }
            LocationEntryRestriction::Weekend => write!(f, "today is a weekend day"),
        }
    }
}

/// Classifies today's cell for location entry.
///
/// Returns `None` when the day is a plain working day and the user may
/// declare a location for it.
pub fn location_entry_restriction(
    today: NaiveDate,
    personal_holidays: &HashSet<NaiveDate>,
    public_holidays: &HashSet<NaiveDate>,
) -> Option<LocationEntryRestriction> {
    if public_holidays.contains(&today) {
        Some(LocationEntryRestriction::PublicHoliday)
    } else if personal_holidays.contains(&today) {
        Some(LocationEntryRestriction::PersonalHoliday)
    } else if is_weekend(today) {
        Some(LocationEntryRestriction::Weekend)
    } else {
        None
    }
}

/// Computes the full date span covered by a calendar window, so the caller
/// can fetch holiday/location records once for the whole window.
pub fn window_span(
    center_year: i32,
    center_month: u32,
    span_before: u32,
    span_after: u32,
) -> DateInterval {
    let center_year = clamp_year(center_year);
    let center_month = clamp_month(center_month);
    let (first_year, first_month) = shift_month(center_year, center_month, -(span_before as i32));
    let (last_year, last_month) = shift_month(center_year, center_month, span_after as i32);

    let start = NaiveDate::from_ymd_opt(first_year, first_month, 1)
        .expect("shifted month index stays in 1..=12");
    let (next_year, next_month) = shift_month(last_year, last_month, 1);
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("shifted month index stays in 1..=12")
        .pred_opt()
        .expect("first of month always has a predecessor");
    DateInterval { start, end }
}

/// Builds one month calendar from prefetched per-user record sets.
pub fn build_month_calendar(
    year: i32,
    month: u32,
    personal_holidays: &HashSet<NaiveDate>,
    public_holidays: &HashSet<NaiveDate>,
    locations: &HashMap<NaiveDate, bool>,
) -> MonthCalendar {
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).expect("month index in 1..=12 is a valid date");
    let days = first
        .iter_days()
        .take_while(|d| d.month() == month && d.year() == year)
        .map(|date| DayCell {
            date,
            is_weekend: is_weekend(date),
            is_holiday: personal_holidays.contains(&date),
            is_public_holiday: public_holidays.contains(&date),
            is_onsite: locations.get(&date).copied(),
        })
        .collect();

    MonthCalendar {
        year,
        month,
        month_name: month_name(month).to_string(),
        days,
    }
}

/// Builds a contiguous window of month calendars around a center month.
///
/// The window runs from `span_before` months before the center through
/// `span_after` months after it, wrapping across year boundaries. The
/// center year/month are clamped to the supported range first.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::build_window;
/// use std::collections::{HashMap, HashSet};
///
/// let months = build_window(2024, 12, 1, 2, &HashSet::new(), &HashSet::new(), &HashMap::new());
/// let labels: Vec<(i32, u32)> = months.iter().map(|m| (m.year, m.month)).collect();
/// assert_eq!(labels, vec![(2024, 11), (2024, 12), (2025, 1), (2025, 2)]);
/// ```
pub fn build_window(
    center_year: i32,
    center_month: u32,
    span_before: u32,
    span_after: u32,
    personal_holidays: &HashSet<NaiveDate>,
    public_holidays: &HashSet<NaiveDate>,
    locations: &HashMap<NaiveDate, bool>,
) -> Vec<MonthCalendar> {
    let center_year = clamp_year(center_year);
    let center_month = clamp_month(center_month);

    (-(span_before as i32)..=span_after as i32)
        .map(|offset| {
            let (year, month) = shift_month(center_year, center_month, offset);
            build_month_calendar(year, month, personal_holidays, public_holidays, locations)
        })
        .collect()
}
