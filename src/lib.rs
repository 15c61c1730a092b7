//! Calendar and aggregation engine for employee work-time tracking.
//!
//! This crate turns requested date intervals into effective business days
//! (excluding weekends and public holidays), validates holiday requests
//! against those rules, and builds multi-month calendars and cross-user
//! statistical aggregates: monthly required/worked/holiday hours,
//! per-employee remote-day counts, and grouped-by-date / grouped-by-person
//! views.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
