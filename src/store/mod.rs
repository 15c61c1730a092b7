//! Storage port for the calendar and aggregation engine.
//!
//! The engine never talks to a database directly: it consumes already
//! fetched record collections through the [`TimeStore`] trait and leaves
//! retry/backoff, connection management, and transactional details to the
//! implementing collaborator. [`MemoryStore`] is the in-process reference
//! implementation used by tests and benchmarks.

mod memory;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    DateInterval, Employee, HolidayRecord, OrgGroup, PublicHoliday, WorkLocationRecord,
};

pub use memory::MemoryStore;

/// Read and write operations the engine requires from its storage
/// collaborator.
///
/// Read failures are reported as
/// [`EngineError::AggregationInputMissing`](crate::error::EngineError::AggregationInputMissing);
/// read-side aggregators absorb them and degrade to empty structures,
/// while write paths propagate them.
#[async_trait]
pub trait TimeStore: Send + Sync {
    /// Fetches the public holidays within a date range.
    async fn fetch_public_holidays(&self, range: &DateInterval)
    -> EngineResult<Vec<PublicHoliday>>;

    /// Fetches one user's personal-holiday records within a date range.
    async fn fetch_user_holidays(
        &self,
        user_id: i64,
        range: &DateInterval,
    ) -> EngineResult<Vec<HolidayRecord>>;

    /// Fetches every user's personal-holiday records within a date range.
    async fn fetch_all_holidays(&self, range: &DateInterval) -> EngineResult<Vec<HolidayRecord>>;

    /// Fetches one user's work-location declarations within a date range.
    async fn fetch_work_locations(
        &self,
        user_id: i64,
        range: &DateInterval,
    ) -> EngineResult<Vec<WorkLocationRecord>>;

    /// Fetches every user's work-location declarations within a date range.
    async fn fetch_all_work_locations(
        &self,
        range: &DateInterval,
    ) -> EngineResult<Vec<WorkLocationRecord>>;

    /// Fetches the full user directory.
    async fn fetch_user_directory(&self) -> EngineResult<Vec<Employee>>;

    /// Fetches the full organizational-group directory.
    async fn fetch_group_directory(&self) -> EngineResult<Vec<OrgGroup>>;

    /// Fetches the hours a user logged in a month.
    async fn fetch_monthly_worked_hours(
        &self,
        user_id: i64,
        year: i32,
        month: u32,
    ) -> EngineResult<Decimal>;

    /// Inserts one holiday record per date, atomically.
    ///
    /// Dates the user already has a record for are skipped, so
    /// re-submitting the same interval never creates duplicates. The whole
    /// multi-date write commits or rolls back as a unit; the returned
    /// records are the ones actually created.
    async fn insert_holidays(
        &self,
        user_id: i64,
        dates: &[NaiveDate],
    ) -> EngineResult<Vec<HolidayRecord>>;

    /// Looks up a holiday record by id.
    async fn find_holiday(&self, id: Uuid) -> EngineResult<Option<HolidayRecord>>;

    /// Deletes a holiday record by id.
    ///
    /// Returns
    /// [`EngineError::HolidayNotFound`](crate::error::EngineError::HolidayNotFound)
    /// when no record has the id.
    async fn delete_holiday(&self, id: Uuid) -> EngineResult<()>;
}
