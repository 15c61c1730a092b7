//! Date interval model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive interval of calendar dates.
///
/// Invariant: `start <= end`. A single-day interval has `start == end`.
///
/// # Example
///
/// ```
/// use worktime_engine::models::DateInterval;
/// use chrono::NaiveDate;
///
/// let interval = DateInterval::new(
///     NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 5, 8).unwrap(),
/// ).unwrap();
/// assert!(interval.contains(NaiveDate::from_ymd_opt(2024, 5, 6).unwrap()));
/// assert_eq!(interval.days().count(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInterval {
    /// The first day of the interval (inclusive).
    pub start: NaiveDate,
    /// The last day of the interval (inclusive).
    pub end: NaiveDate,
}

impl DateInterval {
    /// Creates an interval, rejecting a reversed date pair.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::InvalidDate {
                value: format!("interval end {} precedes start {}", end, start),
            });
        }
        Ok(Self { start, end })
    }

    /// Creates a single-day interval.
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Checks whether a date falls within the interval (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Iterates every calendar day from start to end inclusive, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}
