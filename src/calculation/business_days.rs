//! Business-day generation over date intervals.
//!
//! A business day is a calendar day that is neither a weekend day nor a
//! public holiday. This filter is the shared base of holiday-request
//! validation and every calendar/aggregation view.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::DateInterval;

use super::calendar_math::is_weekend;

/// Produces the ordered list of business days within an interval.
///
/// Iterates every calendar day from `interval.start` to `interval.end`
/// inclusive and keeps a day iff it is not a weekend and not present in
/// `public_holidays`. The holiday set is expected to be pre-filtered to the
/// relevant range by the caller; this function performs membership testing
/// only.
///
/// An empty result is valid, not an error: an interval lying entirely on a
/// weekend produces no business days, and callers decide whether that means
/// "nothing to do" or "invalid request".
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::generate_business_days;
/// use worktime_engine::models::DateInterval;
/// use chrono::NaiveDate;
/// use std::collections::HashSet;
///
/// // 2024-05-02 (Thursday) through 2024-05-08 (Wednesday),
/// // with no public holidays in range
/// let interval = DateInterval::new(
///     NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 5, 8).unwrap(),
/// ).unwrap();
/// let days = generate_business_days(&interval, &HashSet::new());
///
/// // Saturday the 4th and Sunday the 5th are excluded
/// assert_eq!(days.len(), 5);
/// assert!(!days.contains(&NaiveDate::from_ymd_opt(2024, 5, 4).unwrap()));
/// ```
pub fn generate_business_days(
    interval: &DateInterval,
    public_holidays: &HashSet<NaiveDate>,
) -> Vec<NaiveDate> {
    interval
        .days()
        .filter(|day| !is_weekend(*day) && !public_holidays.contains(day))
        .collect()
}
