//! Error types for the calendar and aggregation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Holiday-request validation failures are distinct variants so callers can
//! render a specific message for each outcome instead of a generic failure.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the calendar and aggregation engine.
///
/// # Example
///
/// ```
/// use worktime_engine::error::EngineError;
///
/// let error = EngineError::InvalidDate {
///     value: "not-a-date".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid or missing date input: 'not-a-date'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date input was missing or could not be parsed as `YYYY-MM-DD`.
    #[error("Invalid or missing date input: '{value}'")]
    InvalidDate {
        /// The raw input that failed to parse.
        value: String,
    },

    /// A holiday request started on a weekend day.
    #[error("Holiday request cannot start on a weekend: {date}")]
    WeekendNotAllowed {
        /// The offending start date.
        date: NaiveDate,
    },

    /// A holiday request started on a public holiday.
    #[error("Holiday request cannot start on a public holiday: {date}")]
    PublicHolidayNotAllowed {
        /// The offending start date.
        date: NaiveDate,
    },

    /// A holiday request produced no business days at all.
    #[error("No working days between {start} and {end}")]
    NoValidDays {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// A required upstream fetch (directory, holiday set, location set)
    /// was unavailable. Read-side aggregators absorb this and degrade to
    /// empty structures; write paths propagate it.
    #[error("Aggregation input unavailable from {origin}")]
    AggregationInputMissing {
        /// The upstream fetch that failed.
        origin: String,
    },

    /// A holiday record id did not resolve to an existing record.
    #[error("Holiday record not found: {id}")]
    HolidayNotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// A holiday record delete was attempted by a user who neither owns
    /// the record nor has administrator rights.
    #[error("User {user_id} is not allowed to modify this holiday record")]
    NotRecordOwner {
        /// The user who attempted the delete.
        user_id: i64,
    },

    /// Settings file was not found at the specified path.
    #[error("Settings file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_displays_value() {
        let error = EngineError::InvalidDate {
            value: "2024-13-99".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid or missing date input: '2024-13-99'"
        );
    }

    #[test]
    fn test_weekend_not_allowed_displays_date() {
        let error = EngineError::WeekendNotAllowed {
            date: NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Holiday request cannot start on a weekend: 2024-05-04"
        );
    }

    #[test]
    fn test_public_holiday_not_allowed_displays_date() {
        let error = EngineError::PublicHolidayNotAllowed {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Holiday request cannot start on a public holiday: 2024-05-01"
        );
    }

    #[test]
    fn test_no_valid_days_displays_range() {
        let error = EngineError::NoValidDays {
            start: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "No working days between 2024-05-06 and 2024-05-03"
        );
    }

    #[test]
    fn test_aggregation_input_missing_displays_source() {
        let error = EngineError::AggregationInputMissing {
            origin: "user_directory".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Aggregation input unavailable from user_directory"
        );
    }

    #[test]
    fn test_not_record_owner_displays_user() {
        let error = EngineError::NotRecordOwner { user_id: 42 };
        assert_eq!(
            error.to_string(),
            "User 42 is not allowed to modify this holiday record"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/settings/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse settings file '/settings/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_date() -> EngineResult<()> {
            Err(EngineError::InvalidDate {
                value: String::new(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_date()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
