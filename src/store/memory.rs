//! In-memory reference implementation of the storage port.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    DateInterval, Employee, HolidayRecord, OrgGroup, PublicHoliday, WorkLocationRecord,
};

use super::TimeStore;

#[derive(Debug, Default)]
struct MemoryState {
    public_holidays: Vec<PublicHoliday>,
    holidays: Vec<HolidayRecord>,
    locations: Vec<WorkLocationRecord>,
    employees: Vec<Employee>,
    groups: Vec<OrgGroup>,
    worked_hours: HashMap<(i64, i32, u32), Decimal>,
    fail_reads: bool,
}

impl MemoryState {
    fn check_reads(&self, origin: &str) -> EngineResult<()> {
        if self.fail_reads {
            return Err(EngineError::AggregationInputMissing {
                origin: origin.to_string(),
            });
        }
        Ok(())
    }
}

/// An in-memory [`TimeStore`] holding all records behind one read-write
/// lock.
///
/// Taking the write lock for the whole of [`TimeStore::insert_holidays`]
/// makes the per-date existence check and the inserts a single atomic
/// step, so concurrent overlapping requests cannot create duplicate
/// records. Intended for tests, benchmarks, and demos; a production
/// deployment implements [`TimeStore`] against its database and should
/// back the same guarantee with a uniqueness constraint on
/// `(user_id, date)`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryState>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee to the user directory.
    pub async fn add_employee(&self, employee: Employee) {
        self.inner.write().await.employees.push(employee);
    }

    /// Adds a group to the organizational-group directory.
    pub async fn add_group(&self, group: OrgGroup) {
        self.inner.write().await.groups.push(group);
    }

    /// Adds a public holiday to the holiday directory.
    pub async fn add_public_holiday(&self, holiday: PublicHoliday) {
        self.inner.write().await.public_holidays.push(holiday);
    }

    /// Declares a user's work location for a date, replacing any earlier
    /// declaration for the same day.
    pub async fn set_work_location(&self, user_id: i64, date: NaiveDate, is_onsite: bool) {
        let mut state = self.inner.write().await;
        state
            .locations
            .retain(|r| !(r.user_id == user_id && r.date == date));
        state.locations.push(WorkLocationRecord {
            user_id,
            date,
            is_onsite,
        });
    }

    /// Records the hours a user logged in a month.
    pub async fn set_monthly_worked_hours(
        &self,
        user_id: i64,
        year: i32,
        month: u32,
        hours: Decimal,
    ) {
        self.inner
            .write()
            .await
            .worked_hours
            .insert((user_id, year, month), hours);
    }

    /// Makes every fetch operation fail with `AggregationInputMissing`,
    /// for exercising caller degradation paths.
    pub async fn set_read_failures(&self, fail: bool) {
        self.inner.write().await.fail_reads = fail;
    }
}

#[async_trait]
impl TimeStore for MemoryStore {
    async fn fetch_public_holidays(
        &self,
        range: &DateInterval,
    ) -> EngineResult<Vec<PublicHoliday>> {
        let state = self.inner.read().await;
        state.check_reads("public_holidays")?;
        Ok(state
            .public_holidays
            .iter()
            .filter(|h| range.contains(h.date))
            .cloned()
            .collect())
    }

    async fn fetch_user_holidays(
        &self,
        user_id: i64,
        range: &DateInterval,
    ) -> EngineResult<Vec<HolidayRecord>> {
        let state = self.inner.read().await;
        state.check_reads("user_holidays")?;
        Ok(state
            .holidays
            .iter()
            .filter(|r| r.user_id == user_id && range.contains(r.date))
            .cloned()
            .collect())
    }

    async fn fetch_all_holidays(&self, range: &DateInterval) -> EngineResult<Vec<HolidayRecord>> {
        let state = self.inner.read().await;
        state.check_reads("all_holidays")?;
        Ok(state
            .holidays
            .iter()
            .filter(|r| range.contains(r.date))
            .cloned()
            .collect())
    }

    async fn fetch_work_locations(
        &self,
        user_id: i64,
        range: &DateInterval,
    ) -> EngineResult<Vec<WorkLocationRecord>> {
        let state = self.inner.read().await;
        state.check_reads("work_locations")?;
        Ok(state
            .locations
            .iter()
            .filter(|r| r.user_id == user_id && range.contains(r.date))
            .copied()
            .collect())
    }

    async fn fetch_all_work_locations(
        &self,
        range: &DateInterval,
    ) -> EngineResult<Vec<WorkLocationRecord>> {
        let state = self.inner.read().await;
        state.check_reads("all_work_locations")?;
        Ok(state
            .locations
            .iter()
            .filter(|r| range.contains(r.date))
            .copied()
            .collect())
    }

    async fn fetch_user_directory(&self) -> EngineResult<Vec<Employee>> {
        let state = self.inner.read().await;
        state.check_reads("user_directory")?;
        Ok(state.employees.clone())
    }

    async fn fetch_group_directory(&self) -> EngineResult<Vec<OrgGroup>> {
        let state = self.inner.read().await;
        state.check_reads("group_directory")?;
        Ok(state.groups.clone())
    }

    async fn fetch_monthly_worked_hours(
        &self,
        user_id: i64,
        year: i32,
        month: u32,
    ) -> EngineResult<Decimal> {
        let state = self.inner.read().await;
        state.check_reads("monthly_worked_hours")?;
        Ok(state
            .worked_hours
            .get(&(user_id, year, month))
            .copied()
            .unwrap_or(Decimal::ZERO))
    }

    async fn insert_holidays(
        &self,
        user_id: i64,
        dates: &[NaiveDate],
    ) -> EngineResult<Vec<HolidayRecord>> {
        // One write lock across the existence checks and the inserts:
        // the whole multi-date write is atomic.
        let mut state = self.inner.write().await;
        let mut created = Vec::new();
        for &date in dates {
            let exists = state
                .holidays
                .iter()
                .any(|r| r.user_id == user_id && r.date == date);
            if !exists {
                let record = HolidayRecord::new(user_id, date);
                created.push(record.clone());
                state.holidays.push(record);
            }
        }
        Ok(created)
    }

    async fn find_holiday(&self, id: Uuid) -> EngineResult<Option<HolidayRecord>> {
        let state = self.inner.read().await;
        Ok(state.holidays.iter().find(|r| r.id == id).cloned())
    }

    async fn delete_holiday(&self, id: Uuid) -> EngineResult<()> {
        let mut state = self.inner.write().await;
        let before = state.holidays.len();
        state.holidays.retain(|r| r.id != id);
        if state.holidays.len() == before {
            return Err(EngineError::HolidayNotFound { id });
        }
        Ok(())
    }
}
