use chrono::prelude::*;
use indexmap::set::IndexSet;
use log::debug;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::errors::{OffsetError, Result};
use crate::scheduling::calendars::holidays::resolve_holidays;
use crate::scheduling::{DateLike, DateRoll, HolidayInput, HolidayProvider, WeekMask};

/// A business day calendar with a singular list of holidays.
///
/// A business day calendar is formed of 2 components:
///
/// - `week_mask`: which defines the days of the week that are eligible to be business days.
///   In Western culture these are typically Monday to Friday.
/// - `holidays`: which defines specific dates that may be exceptions to the general working week, and cannot be
///   business days.
///
/// Holidays are held as a sorted, de-duplicated snapshot taken at construction.
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CalDataModel")]
pub struct Cal {
    pub(crate) holidays: IndexSet<NaiveDate>,
    pub(crate) week_mask: WeekMask,
}

#[derive(Deserialize)]
struct CalDataModel {
    holidays: Vec<String>,
    week_mask: WeekMask,
}

impl TryFrom<CalDataModel> for Cal {
    type Error = OffsetError;

    fn try_from(model: CalDataModel) -> Result<Self> {
        Cal::try_new(
            model.holidays.into_iter().map(HolidayInput::from).collect(),
            model.week_mask,
        )
    }
}

impl Cal {
    /// Create a calendar.
    ///
    /// `holidays` provide a vector of dates that cannot be business days. Any time of day is
    /// ignored.
    ///
    /// # Examples
    /// ```rust
    /// # use offsetlib::scheduling::{Cal, ndt, DateRoll, WeekMask};
    /// let cal = Cal::new(vec![ndt(2017, 5, 1)], WeekMask::default());
    /// assert!(!cal.is_bus_day(&ndt(2017, 5, 1)));
    /// ```
    pub fn new<T: DateLike>(holidays: Vec<T>, week_mask: WeekMask) -> Self {
        let mut set: IndexSet<NaiveDate> =
            IndexSet::from_iter(holidays.iter().map(|h| h.to_ndt().date()));
        set.sort();
        debug!(
            "created calendar with {} holidays and week mask {}",
            set.len(),
            week_mask
        );
        Cal {
            holidays: set,
            week_mask,
        }
    }

    /// Create a calendar from holiday entries which may require parsing.
    ///
    /// Returns [`OffsetError::InvalidHoliday`] for the first entry which is not a valid date.
    ///
    /// # Examples
    /// ```rust
    /// # use offsetlib::scheduling::{Cal, ndt, HolidayInput, WeekMask};
    /// let cal = Cal::try_new(
    ///     vec!["2012-02-01".into(), ndt(2012, 2, 2).into()],
    ///     WeekMask::default(),
    /// );
    /// assert!(cal.is_ok());
    /// ```
    pub fn try_new(holidays: Vec<HolidayInput>, week_mask: WeekMask) -> Result<Self> {
        Ok(Cal::new(resolve_holidays(holidays)?, week_mask))
    }

    /// Create a calendar taking its holidays from an external provider.
    pub fn from_provider<P: HolidayProvider + ?Sized>(provider: &P, week_mask: WeekMask) -> Self {
        Cal::new(provider.holidays(), week_mask)
    }

    /// The week mask of the calendar.
    pub fn week_mask(&self) -> WeekMask {
        self.week_mask
    }

    /// The holidays of the calendar in ascending order.
    pub fn holiday_dates(&self) -> Vec<NaiveDate> {
        self.holidays.iter().copied().collect()
    }
}

impl Hash for Cal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.week_mask.hash(state);
        for h in self.holidays.iter() {
            h.hash(state);
        }
    }
}

impl DateRoll for Cal {
    fn is_weekday(&self, date: &NaiveDateTime) -> bool {
        self.week_mask.contains(date.weekday())
    }

    fn is_holiday(&self, date: &NaiveDateTime) -> bool {
        self.holidays.contains(&date.date())
    }

    fn weekdays_per_week(&self) -> u32 {
        self.week_mask.count()
    }

    fn count_weekday_holidays(&self, start: &NaiveDate, end: &NaiveDate) -> u32 {
        let lo = self.holidays.partition_point(|h| h <= start);
        let hi = self.holidays.partition_point(|h| h <= end);
        (lo..hi)
            .filter_map(|i| self.holidays.get_index(i))
            .filter(|h| self.week_mask.contains(h.weekday()))
            .count() as u32
    }
}
