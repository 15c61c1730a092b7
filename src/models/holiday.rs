//! Public-holiday and personal-holiday models.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An organization-wide non-working day from the holiday directory.
///
/// Distinct from a personal holiday: a public holiday applies to every
/// employee, while a [`HolidayRecord`] belongs to one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The display name of the holiday (e.g., "Labour Day").
    pub name: String,
}

/// Collects the dates of a public-holiday list into a set for membership
/// testing.
///
/// # Example
///
/// ```
/// use worktime_engine::models::{public_holiday_dates, PublicHoliday};
/// use chrono::NaiveDate;
///
/// let holidays = vec![PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
///     name: "Labour Day".to_string(),
/// }];
/// let dates = public_holiday_dates(&holidays);
/// assert!(dates.contains(&NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));
/// ```
pub fn public_holiday_dates(holidays: &[PublicHoliday]) -> HashSet<NaiveDate> {
    holidays.iter().map(|h| h.date).collect()
}

/// One day of personal holiday recorded for one user.
///
/// Created by the validated "add holiday" operation, one record per
/// generated business day in the requested interval. Destroyed by an
/// explicit delete (by id) restricted to the owning user or an
/// administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// Unique identifier of the record.
    pub id: Uuid,
    /// The user the holiday belongs to.
    pub user_id: i64,
    /// The calendar day of the holiday.
    pub date: NaiveDate,
}

impl HolidayRecord {
    /// Creates a new record with a fresh id.
    pub fn new(user_id: i64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
        }
    }
}
