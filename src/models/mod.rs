//! Core data models for the calendar and aggregation engine.
//!
//! This module contains the record and directory types consumed by the
//! calculation layer. Derived view structures live next to the functions
//! that produce them in [`crate::calculation`].

mod directory;
mod holiday;
mod interval;
mod location;

pub use directory::{Employee, EmployeeRef, OrgGroup};
pub use holiday::{HolidayRecord, PublicHoliday, public_holiday_dates};
pub use interval::DateInterval;
pub use location::{WorkLocationRecord, location_by_date};
