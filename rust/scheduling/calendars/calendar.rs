use chrono::prelude::*;
use chrono::{Days, Months};

use crate::errors::{OffsetError, Result};

/// Create a `NaiveDateTime` with default null time.
///
/// Panics if date values are invalid.
pub fn ndt(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("`year`, `month` `day` are invalid.")
        .and_time(NaiveTime::MIN)
}

/// A value which can be rolled by a calendar and converted back into its own type.
///
/// Calendar arithmetic is performed on `NaiveDateTime`. A `NaiveDate` input is treated as
/// midnight and is returned as a `NaiveDate`, so date-only callers get date-only results.
pub trait DateLike: Copy {
    /// Express the value as a datetime.
    fn to_ndt(&self) -> NaiveDateTime;

    /// Recover the value from a datetime produced by calendar arithmetic.
    fn from_ndt(value: NaiveDateTime) -> Self;
}

impl DateLike for NaiveDateTime {
    fn to_ndt(&self) -> NaiveDateTime {
        *self
    }

    fn from_ndt(value: NaiveDateTime) -> Self {
        value
    }
}

impl DateLike for NaiveDate {
    fn to_ndt(&self) -> NaiveDateTime {
        self.and_time(NaiveTime::MIN)
    }

    fn from_ndt(value: NaiveDateTime) -> Self {
        value.date()
    }
}

/// Replace the calendar date of `datetime` keeping its time of day.
pub(crate) fn with_date(datetime: &NaiveDateTime, date: NaiveDate) -> NaiveDateTime {
    date.and_time(datetime.time())
}

/// Strip the time of day.
pub(crate) fn normalize(datetime: &NaiveDateTime) -> NaiveDateTime {
    datetime.date().and_time(NaiveTime::MIN)
}

/// Move a datetime by a signed number of calendar days.
pub(crate) fn shift_days(datetime: &NaiveDateTime, days: i64) -> Result<NaiveDateTime> {
    let shifted = if days < 0 {
        datetime.checked_sub_days(Days::new(days.unsigned_abs()))
    } else {
        datetime.checked_add_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or_else(|| OffsetError::OutOfRange(format!("{} shifted by {} days", datetime, days)))
}

/// The first day of a calendar month.
pub(crate) fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| OffsetError::OutOfRange(format!("month {}-{:02}", year, month)))
}

/// The last day of a calendar month.
pub(crate) fn last_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    first_of_month(year, month)?
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| OffsetError::OutOfRange(format!("month {}-{:02}", year, month)))
}
