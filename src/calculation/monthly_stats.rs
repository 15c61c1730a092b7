//! Monthly required-vs-actual hours aggregation.
//!
//! Combines worked hours, personal-holiday counts, and public-holiday
//! counts for one user/month into a required-vs-actual summary. All hour
//! totals accumulate unrounded and are rounded to 2 decimal places only at
//! the output boundary, when the [`MonthlyStats`] struct is built.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calendar_math::{is_weekend, weekday_count_in_month};

/// Expected work hours per business day unless configured otherwise.
pub const DEFAULT_HOURS_PER_DAY: u32 = 8;

/// The hours summary for one user and month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStats {
    /// Hours the user actually logged in the month.
    pub total_work_hours: Decimal,
    /// Number of personal-holiday days the user recorded in the month.
    pub holiday_count: u32,
    /// Personal-holiday days expressed as hours.
    pub total_holiday_hours: Decimal,
    /// Number of public holidays falling in the month.
    pub public_holidays_count: u32,
    /// Hours credit of the weekday-falling public holidays, reported for
    /// display only; not part of [`MonthlyStats::total_combined_hours`].
    pub public_holiday_hours: Decimal,
    /// Worked hours plus personal-holiday hours.
    pub total_combined_hours: Decimal,
    /// Expected hours for the month: weekday count minus public holidays,
    /// times hours per day.
    pub required_monthly_hours: Decimal,
    /// Hours still owed; floored at zero, never negative.
    pub remaining_hours: Decimal,
}

impl MonthlyStats {
    /// An all-zero summary, used when an upstream fetch is unavailable and
    /// the caller degrades rather than failing the whole view.
    pub fn zeroed() -> Self {
        Self {
            total_work_hours: Decimal::ZERO,
            holiday_count: 0,
            total_holiday_hours: Decimal::ZERO,
            public_holidays_count: 0,
            public_holiday_hours: Decimal::ZERO,
            total_combined_hours: Decimal::ZERO,
            required_monthly_hours: Decimal::ZERO,
            remaining_hours: Decimal::ZERO,
        }
    }
}

/// Computes the hours summary for one user and month.
///
/// Every public holiday in `public_holidays_in_month` reduces the required
/// hours as if it fell on a weekday, regardless of whether it actually
/// does; callers wanting weekend-falling public holidays ignored must
/// pre-filter the list. [`MonthlyStats::public_holiday_hours`], by
/// contrast, counts only the weekday-falling subset.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::{compute_monthly_stats, DEFAULT_HOURS_PER_DAY};
/// use rust_decimal::Decimal;
///
/// // February 2024 has 21 weekdays; with no public holidays the
/// // required hours are 21 * 8 = 168.
/// let stats = compute_monthly_stats(
///     2024,
///     2,
///     Decimal::from(100),
///     2,
///     &[],
///     DEFAULT_HOURS_PER_DAY,
/// );
/// assert_eq!(stats.required_monthly_hours, Decimal::from(168));
/// assert_eq!(stats.total_holiday_hours, Decimal::from(16));
/// assert_eq!(stats.total_combined_hours, Decimal::from(116));
/// assert_eq!(stats.remaining_hours, Decimal::from(52));
/// ```
pub fn compute_monthly_stats(
    year: i32,
    month: u32,
    worked_hours: Decimal,
    holiday_day_count: u32,
    public_holidays_in_month: &[NaiveDate],
    hours_per_day: u32,
) -> MonthlyStats {
    let weekday_count = weekday_count_in_month(year, month);
    let public_holiday_count = public_holidays_in_month.len() as u32;

    let required_monthly_hours =
        Decimal::from(weekday_count.saturating_sub(public_holiday_count) * hours_per_day);
    let total_holiday_hours = Decimal::from(holiday_day_count * hours_per_day);

    let weekday_public_holidays = public_holidays_in_month
        .iter()
        .filter(|d| !is_weekend(**d))
        .count() as u32;
    let public_holiday_hours = Decimal::from(weekday_public_holidays * hours_per_day);

    let total_combined_hours = worked_hours + total_holiday_hours;
    let remaining_hours = (required_monthly_hours - total_combined_hours).max(Decimal::ZERO);

    MonthlyStats {
        total_work_hours: worked_hours.round_dp(2),
        holiday_count: holiday_day_count,
        total_holiday_hours: total_holiday_hours.round_dp(2),
        public_holidays_count: public_holiday_count,
        public_holiday_hours: public_holiday_hours.round_dp(2),
        total_combined_hours: total_combined_hours.round_dp(2),
        required_monthly_hours: required_monthly_hours.round_dp(2),
        remaining_hours: remaining_hours.round_dp(2),
    }
}
