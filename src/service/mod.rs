//! Orchestration layer over the storage port and the pure calculation
//! engine.
//!
//! [`CalendarService`] batch-fetches records through a [`TimeStore`] (a
//! small constant number of queries per request, never one per user or per
//! day), runs the pure calculation layer, and applies the degradation
//! policy: read-side views absorb missing upstream inputs into
//! empty/zeroed structures, while validation failures on the write path
//! propagate as distinct, named outcomes.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    DayRoster, HolidayValidation, LocationEntryRestriction, MonthCalendar, MonthlyStats,
    PersonGrouping, build_window, clamp_month, clamp_year, compute_monthly_stats, days_in_month,
    group_by_person, group_holidays_by_date, location_entry_restriction, month_range, parse_date,
    validate_holiday_request, window_span,
};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    DateInterval, Employee, HolidayRecord, location_by_date, public_holiday_dates,
};
use crate::store::TimeStore;

/// The result of a successful holiday-interval write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayAdded {
    /// The records actually created; re-submitted dates that already had
    /// records are skipped and do not appear here.
    pub records: Vec<HolidayRecord>,
    /// Whether the requested interval contained excluded weekend days.
    pub weekend_days_excluded: bool,
    /// Whether the requested interval contained excluded public-holiday
    /// days.
    pub public_holiday_days_excluded: bool,
    /// Whether any calendar day of the requested interval was excluded.
    pub days_excluded: bool,
}

impl HolidayAdded {
    fn from_validation(records: Vec<HolidayRecord>, validation: &HolidayValidation) -> Self {
        Self {
            records,
            weekend_days_excluded: validation.weekend_days_excluded,
            public_holiday_days_excluded: validation.public_holiday_days_excluded,
            days_excluded: validation.days_excluded,
        }
    }
}

/// A user's multi-month calendar plus today's location-entry
/// classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarView {
    /// The window of month calendars, ascending.
    pub months: Vec<MonthCalendar>,
    /// The day the view was computed for.
    pub today: NaiveDate,
    /// Why today is non-actionable for location entry, if it is.
    pub today_restriction: Option<LocationEntryRestriction>,
}

/// The calendar and aggregation service.
///
/// Cheap to clone; shares the storage collaborator behind an [`Arc`].
#[derive(Debug)]
pub struct CalendarService<S: TimeStore> {
    store: Arc<S>,
    config: EngineConfig,
}

impl<S: TimeStore> Clone for CalendarService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
        }
    }
}

impl<S: TimeStore> CalendarService<S> {
    /// Creates a service over a storage collaborator.
    pub fn new(store: Arc<S>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// Returns the engine settings the service runs with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes the required-vs-actual hours summary for one user and
    /// month.
    ///
    /// Out-of-range year/month input is clamped. When any upstream fetch
    /// is unavailable the summary degrades to all zeros instead of
    /// failing: this is a display path where partial data beats a hard
    /// failure.
    pub async fn monthly_stats(&self, user_id: i64, year: i32, month: u32) -> MonthlyStats {
        let year = clamp_year(year);
        let month = clamp_month(month);
        let range = month_range(year, month);

        let worked_hours = match self
            .store
            .fetch_monthly_worked_hours(user_id, year, month)
            .await
        {
            Ok(hours) => hours,
            Err(err) => {
                warn!(error = %err, user_id, year, month, "worked hours unavailable, degrading to zeroed stats");
                return MonthlyStats::zeroed();
            }
        };
        let holiday_count = match self.store.fetch_user_holidays(user_id, &range).await {
            Ok(records) => records.len() as u32,
            Err(err) => {
                warn!(error = %err, user_id, year, month, "holiday records unavailable, degrading to zeroed stats");
                return MonthlyStats::zeroed();
            }
        };
        let public_holidays = match self.store.fetch_public_holidays(&range).await {
            Ok(holidays) => holidays.iter().map(|h| h.date).collect::<Vec<_>>(),
            Err(err) => {
                warn!(error = %err, year, month, "public holidays unavailable, degrading to zeroed stats");
                return MonthlyStats::zeroed();
            }
        };

        compute_monthly_stats(
            year,
            month,
            worked_hours,
            holiday_count,
            &public_holidays,
            self.config.hours_per_day,
        )
    }

    /// Builds a user's multi-month calendar window centered on a month.
    ///
    /// Holiday, public-holiday, and location records are fetched once for
    /// the entire window span, not per month. A failed fetch degrades that
    /// record kind to empty so one bad upstream source cannot blank the
    /// whole calendar.
    pub async fn calendar_window(
        &self,
        user_id: i64,
        center_year: i32,
        center_month: u32,
        today: NaiveDate,
    ) -> CalendarView {
        let center_year = clamp_year(center_year);
        let center_month = clamp_month(center_month);
        let span = window_span(
            center_year,
            center_month,
            self.config.window_months_before,
            self.config.window_months_after,
        );

        let personal_holidays: HashSet<NaiveDate> =
            match self.store.fetch_user_holidays(user_id, &span).await {
                Ok(records) => records.iter().map(|r| r.date).collect(),
                Err(err) => {
                    warn!(error = %err, user_id, "holiday records unavailable, rendering calendar without them");
                    HashSet::new()
                }
            };
        let public_holidays: HashSet<NaiveDate> =
            match self.store.fetch_public_holidays(&span).await {
                Ok(holidays) => public_holiday_dates(&holidays),
                Err(err) => {
                    warn!(error = %err, "public holidays unavailable, rendering calendar without them");
                    HashSet::new()
                }
            };
        let locations: HashMap<NaiveDate, bool> =
            match self.store.fetch_work_locations(user_id, &span).await {
                Ok(records) => location_by_date(&records),
                Err(err) => {
                    warn!(error = %err, user_id, "work locations unavailable, rendering calendar without them");
                    HashMap::new()
                }
            };

        let months = build_window(
            center_year,
            center_month,
            self.config.window_months_before,
            self.config.window_months_after,
            &personal_holidays,
            &public_holidays,
            &locations,
        );
        let today_restriction =
            location_entry_restriction(today, &personal_holidays, &public_holidays);

        CalendarView {
            months,
            today,
            today_restriction,
        }
    }

    /// Builds the by-date roster of everyone off within a date range.
    ///
    /// Degrades to an empty map when an upstream fetch is unavailable.
    pub async fn holidays_by_date(&self, range: &DateInterval) -> IndexMap<String, DayRoster> {
        let records = match self.store.fetch_all_holidays(range).await {
            Ok(records) => records,
            Err(err) => {
                warn!(error = %err, "holiday records unavailable, returning empty roster");
                return IndexMap::new();
            }
        };
        let directory = match self.store.fetch_user_directory().await {
            Ok(directory) => directory,
            Err(err) => {
                warn!(error = %err, "user directory unavailable, returning empty roster");
                return IndexMap::new();
            }
        };
        group_holidays_by_date(&records, &directory)
    }

    /// Builds the by-person group aggregates for one month.
    ///
    /// Degrades to an empty grouping when an upstream fetch is
    /// unavailable.
    pub async fn holidays_by_person(&self, year: i32, month: u32) -> PersonGrouping {
        let year = clamp_year(year);
        let month = clamp_month(month);
        let range = month_range(year, month);

        let holidays = match self.store.fetch_all_holidays(&range).await {
            Ok(records) => records,
            Err(err) => {
                warn!(error = %err, "holiday records unavailable, returning empty grouping");
                return PersonGrouping::default();
            }
        };
        let locations = match self.store.fetch_all_work_locations(&range).await {
            Ok(records) => records,
            Err(err) => {
                warn!(error = %err, "work locations unavailable, returning empty grouping");
                return PersonGrouping::default();
            }
        };
        let public_holidays = match self.store.fetch_public_holidays(&range).await {
            Ok(holidays) => public_holiday_dates(&holidays),
            Err(err) => {
                warn!(error = %err, "public holidays unavailable, returning empty grouping");
                return PersonGrouping::default();
            }
        };
        let directory = match self.store.fetch_user_directory().await {
            Ok(directory) => directory,
            Err(err) => {
                warn!(error = %err, "user directory unavailable, returning empty grouping");
                return PersonGrouping::default();
            }
        };
        let groups = match self.store.fetch_group_directory().await {
            Ok(groups) => groups,
            Err(err) => {
                warn!(error = %err, "group directory unavailable, returning empty grouping");
                return PersonGrouping::default();
            }
        };

        let days = days_in_month(year, month);
        group_by_person(
            &holidays,
            &locations,
            &public_holidays,
            &directory,
            &groups,
            &days,
        )
    }

    /// Validates a holiday interval and records one holiday per generated
    /// business day.
    ///
    /// Validation failures propagate as distinct named errors so the
    /// caller can render a precise message; nothing is written when
    /// validation fails. Dates the user already has records for are
    /// skipped by the storage collaborator, so re-submitting the same
    /// interval is idempotent.
    pub async fn add_holiday_interval(
        &self,
        user_id: i64,
        start: &str,
        end: &str,
    ) -> EngineResult<HolidayAdded> {
        let start_date = parse_date(start.trim())?;
        let end_date = if end.trim().is_empty() {
            start_date
        } else {
            parse_date(end.trim())?
        };
        let fetch_range = DateInterval {
            start: start_date.min(end_date),
            end: start_date.max(end_date),
        };

        let public_holidays = self.store.fetch_public_holidays(&fetch_range).await?;
        let holiday_dates = public_holiday_dates(&public_holidays);
        let validation = validate_holiday_request(start, end, &holiday_dates)?;

        let records = self
            .store
            .insert_holidays(user_id, &validation.business_days)
            .await?;
        info!(
            user_id,
            requested = validation.business_days.len(),
            created = records.len(),
            "holiday interval recorded"
        );
        Ok(HolidayAdded::from_validation(records, &validation))
    }

    /// Deletes a holiday record on behalf of a user.
    ///
    /// Only the owning user or an administrator may delete a record.
    pub async fn remove_holiday(&self, actor: &Employee, id: Uuid) -> EngineResult<()> {
        let record = self
            .store
            .find_holiday(id)
            .await?
            .ok_or(EngineError::HolidayNotFound { id })?;
        if record.user_id != actor.id && !actor.is_admin {
            return Err(EngineError::NotRecordOwner { user_id: actor.id });
        }
        self.store.delete_holiday(id).await?;
        info!(actor_id = actor.id, owner_id = record.user_id, %id, "holiday record deleted");
        Ok(())
    }
}
