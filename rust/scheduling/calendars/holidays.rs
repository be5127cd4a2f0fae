use chrono::prelude::*;

use crate::errors::{OffsetError, Result};
use crate::scheduling::Cal;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// A single holiday entry supplied to a calendar.
///
/// Datetime entries are truncated to their calendar date. Text entries are parsed when the
/// calendar is constructed so malformed values are reported immediately.
#[derive(Debug, Clone, PartialEq)]
pub enum HolidayInput {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Text(String),
}

impl HolidayInput {
    /// Resolve the entry to a calendar date.
    pub fn to_date(&self) -> Result<NaiveDate> {
        match self {
            HolidayInput::Date(d) => Ok(*d),
            HolidayInput::DateTime(dt) => Ok(dt.date()),
            HolidayInput::Text(s) => parse_holiday(s),
        }
    }
}

impl From<NaiveDate> for HolidayInput {
    fn from(item: NaiveDate) -> Self {
        HolidayInput::Date(item)
    }
}

impl From<NaiveDateTime> for HolidayInput {
    fn from(item: NaiveDateTime) -> Self {
        HolidayInput::DateTime(item)
    }
}

impl From<&str> for HolidayInput {
    fn from(item: &str) -> Self {
        HolidayInput::Text(item.to_string())
    }
}

impl From<String> for HolidayInput {
    fn from(item: String) -> Self {
        HolidayInput::Text(item)
    }
}

fn parse_holiday(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
        .ok_or_else(|| OffsetError::InvalidHoliday(s.to_string()))
}

/// Resolve a list of holiday entries, failing on the first malformed one.
pub(crate) fn resolve_holidays(holidays: Vec<HolidayInput>) -> Result<Vec<NaiveDate>> {
    holidays.iter().map(|h| h.to_date()).collect()
}

/// A source of holiday dates, such as a jurisdiction specific holiday calendar.
///
/// The only contract is to supply the dates which cannot be business days; the order and
/// duplicates do not matter.
pub trait HolidayProvider {
    /// Return the holiday dates.
    fn holidays(&self) -> Vec<NaiveDate>;
}

impl HolidayProvider for Vec<NaiveDate> {
    fn holidays(&self) -> Vec<NaiveDate> {
        self.clone()
    }
}

impl HolidayProvider for [NaiveDate] {
    fn holidays(&self) -> Vec<NaiveDate> {
        self.to_vec()
    }
}

impl HolidayProvider for Cal {
    fn holidays(&self) -> Vec<NaiveDate> {
        self.holidays.iter().copied().collect()
    }
}
