//! Calculation logic for the calendar and aggregation engine.
//!
//! This module contains the pure computation layer: calendar math,
//! business-day generation over date intervals, holiday-request validation,
//! monthly required-vs-actual hours aggregation, multi-month calendar
//! window construction, and the cross-user grouping views. Everything here
//! is deterministic over its inputs and performs no I/O, so it is safe to
//! call concurrently from multiple simultaneous requests.

mod business_days;
mod calendar_math;
mod calendar_window;
mod grouping;
mod holiday_validation;
mod monthly_stats;

pub use business_days::generate_business_days;
pub use calendar_math::{
    SUPPORTED_YEAR_MAX, SUPPORTED_YEAR_MIN, clamp_month, clamp_year, day_of_week, days_in_month,
    format_date, is_weekend, month_name, month_range, parse_date, shift_month,
    weekday_count_in_month, weekday_name,
};
pub use calendar_window::{
    DayCell, LocationEntryRestriction, MonthCalendar, build_month_calendar, build_window,
    location_entry_restriction, window_span,
};
pub use grouping::{
    DayRoster, GroupAggregate, PersonAggregate, PersonGrouping, UNGROUPED_GROUP_ID,
    UNGROUPED_GROUP_NAME, group_by_person, group_holidays_by_date,
};
pub use holiday_validation::{HolidayValidation, validate_holiday_request};
pub use monthly_stats::{DEFAULT_HOURS_PER_DAY, MonthlyStats, compute_monthly_stats};
