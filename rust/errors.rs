//! Error types for calendar construction and offset arithmetic.

use thiserror::Error;

/// Errors raised by calendars and offsets.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OffsetError {
    /// The calendar configuration can never produce a business day, e.g. an empty week mask.
    #[error("invalid calendar configuration: {0}")]
    Configuration(String),

    /// A holiday entry could not be interpreted as a calendar date.
    #[error("invalid holiday '{0}': expected a date such as '2012-02-01'")]
    InvalidHoliday(String),

    /// A week mask specification could not be parsed.
    #[error("invalid week mask '{0}'")]
    InvalidWeekMask(String),

    /// Date arithmetic left the range of representable dates.
    #[error("date out of range: {0}")]
    OutOfRange(String),
}

/// Shorthand `Result` type used throughout the crate.
pub type Result<T, E = OffsetError> = std::result::Result<T, E>;
