//! Holiday-request validation.
//!
//! Validates a proposed holiday interval against business-day rules and
//! reports the concrete exclusion reasons. The validator is pure
//! computation over its inputs; persistence of the generated days is the
//! caller's concern.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::DateInterval;

use super::business_days::generate_business_days;
use super::calendar_math::{is_weekend, parse_date};

/// The successful outcome of holiday-request validation.
///
/// Carries the generated business days plus flags describing what the
/// original interval lost to exclusion, so the caller can compose a precise
/// summary such as "5 days added, weekends excluded".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayValidation {
    /// The business days generated from the interval, ascending.
    pub business_days: Vec<NaiveDate>,
    /// Whether the interval contained weekend days that were excluded.
    pub weekend_days_excluded: bool,
    /// Whether the interval contained public-holiday days that were
    /// excluded.
    pub public_holiday_days_excluded: bool,
    /// Whether any calendar day of the interval was excluded.
    pub days_excluded: bool,
}

/// Validates a proposed holiday interval.
///
/// Rules are applied in precedence order; the first failing rule wins:
///
/// 1. `start` must be present and parseable, else [`EngineError::InvalidDate`].
/// 2. `start` must not fall on a weekend, else
///    [`EngineError::WeekendNotAllowed`]. Only the start date is checked;
///    weekend days in the middle of the interval are silently excluded by
///    the generator.
/// 3. `start` must not be a public holiday, else
///    [`EngineError::PublicHolidayNotAllowed`].
/// 4. The generated business-day list must be non-empty, else
///    [`EngineError::NoValidDays`].
///
/// An empty `end` falls back to the start date (single-day request); a
/// non-empty unparseable `end` is [`EngineError::InvalidDate`]. An end date
/// earlier than the start generates no business days and therefore reports
/// [`EngineError::NoValidDays`].
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::validate_holiday_request;
/// use std::collections::HashSet;
///
/// // Thursday through Wednesday, weekend in the middle
/// let outcome = validate_holiday_request("2024-05-02", "2024-05-08", &HashSet::new()).unwrap();
/// assert_eq!(outcome.business_days.len(), 5);
/// assert!(outcome.weekend_days_excluded);
/// assert!(!outcome.public_holiday_days_excluded);
/// ```
pub fn validate_holiday_request(
    start: &str,
    end: &str,
    public_holidays: &HashSet<NaiveDate>,
) -> EngineResult<HolidayValidation> {
    let start_date = parse_date(start.trim())?;
    let end_date = if end.trim().is_empty() {
        start_date
    } else {
        parse_date(end.trim())?
    };

    if is_weekend(start_date) {
        return Err(EngineError::WeekendNotAllowed { date: start_date });
    }
    if public_holidays.contains(&start_date) {
        return Err(EngineError::PublicHolidayNotAllowed { date: start_date });
    }

    // A reversed interval yields no candidate days at all.
    let business_days = if end_date < start_date {
        Vec::new()
    } else {
        let interval = DateInterval {
            start: start_date,
            end: end_date,
        };
        generate_business_days(&interval, public_holidays)
    };
    if business_days.is_empty() {
        return Err(EngineError::NoValidDays {
            start: start_date,
            end: end_date,
        });
    }

    let mut weekend_days_excluded = false;
    let mut public_holiday_days_excluded = false;
    let interval = DateInterval {
        start: start_date,
        end: end_date,
    };
    for day in interval.days() {
        if is_weekend(day) {
            weekend_days_excluded = true;
        } else if public_holidays.contains(&day) {
            public_holiday_days_excluded = true;
        }
    }

    Ok(HolidayValidation {
        business_days,
        weekend_days_excluded,
        public_holiday_days_excluded,
        days_excluded: weekend_days_excluded || public_holiday_days_excluded,
    })
}
