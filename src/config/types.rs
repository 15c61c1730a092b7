//! Engine settings types.

use serde::{Deserialize, Serialize};

/// Tunable settings for the calendar and aggregation engine.
///
/// Loaded from a YAML file via [`EngineConfig::load`](crate::config::EngineConfig::load)
/// or constructed with [`Default::default`]. Every field has a default, so a
/// partial settings file is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Expected work hours per business day. Used for required-hours and
    /// holiday-hours computation.
    pub hours_per_day: u32,
    /// How many months before the center month a calendar window shows.
    pub window_months_before: u32,
    /// How many months after the center month a calendar window shows.
    pub window_months_after: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hours_per_day: 8,
            window_months_before: 1,
            window_months_after: 2,
        }
    }
}
