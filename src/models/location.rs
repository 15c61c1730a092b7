//! Work-location declaration model.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user's declared work location for one date.
///
/// Absence of a record is distinct from an explicit remote declaration:
/// `is_onsite == false` means "declared remote", while no record at all
/// means the user has not declared anything for that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLocationRecord {
    /// The user the declaration belongs to.
    pub user_id: i64,
    /// The calendar day the declaration applies to.
    pub date: NaiveDate,
    /// `true` for onsite, `false` for remote.
    pub is_onsite: bool,
}

/// Indexes a single user's location records by date.
///
/// A lookup miss means "no declaration"; callers map hits to
/// `Some(is_onsite)` and misses to `None`.
pub fn location_by_date(records: &[WorkLocationRecord]) -> HashMap<NaiveDate, bool> {
    records.iter().map(|r| (r.date, r.is_onsite)).collect()
}
