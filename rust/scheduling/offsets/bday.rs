use std::fmt;

use crate::errors::Result;
use crate::scheduling::calendars::normalize;
use crate::scheduling::{Cal, DateLike, DateRoll, HolidayInput, WeekMask};

/// An offset of a number of custom business days.
///
/// Business days are defined by a [`Cal`], i.e. a [`WeekMask`] and a set of holidays.
///
/// # Examples
/// ```rust
/// # use offsetlib::scheduling::{Cal, CustomBusinessDay, ndt};
/// let cday = CustomBusinessDay::new(2, Cal::default());
/// // Friday 4th September 2015 plus 2 business days
/// assert_eq!(cday.apply(&ndt(2015, 9, 4)).unwrap(), ndt(2015, 9, 8));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomBusinessDay {
    pub(crate) n: i32,
    pub(crate) normalize: bool,
    pub(crate) calendar: Cal,
}

impl CustomBusinessDay {
    /// Create an offset of `n` business days over the given calendar.
    pub fn new(n: i32, calendar: Cal) -> Self {
        CustomBusinessDay {
            n,
            normalize: false,
            calendar,
        }
    }

    /// Create an offset from a week mask specification and unparsed holidays.
    ///
    /// The week mask accepts the formats of [`WeekMask`], e.g. `"Mon Tue Wed Thu Fri"`.
    pub fn try_new(
        n: i32,
        normalize: bool,
        week_mask: &str,
        holidays: Vec<HolidayInput>,
    ) -> Result<Self> {
        let week_mask: WeekMask = week_mask.parse()?;
        Ok(CustomBusinessDay {
            n,
            normalize,
            calendar: Cal::try_new(holidays, week_mask)?,
        })
    }

    /// Return a copy with the `normalize` flag set.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// The number of business days stepped by [`CustomBusinessDay::apply`].
    pub fn n(&self) -> i32 {
        self.n
    }

    /// Whether results of [`CustomBusinessDay::apply`] are truncated to midnight.
    pub fn normalize(&self) -> bool {
        self.normalize
    }

    /// The business day calendar.
    pub fn calendar(&self) -> &Cal {
        &self.calendar
    }

    /// Return a new offset stepping `k` times as many business days.
    pub fn scale(&self, k: i32) -> Self {
        CustomBusinessDay {
            n: self.n * k,
            ..self.clone()
        }
    }

    /// Return a new offset stepping in the opposite direction.
    pub fn negate(&self) -> Self {
        self.scale(-1)
    }

    /// Whether the date is a business day.
    ///
    /// With `normalize` set only midnight values can be on offset.
    pub fn is_on_offset<T: DateLike>(&self, date: &T) -> bool {
        let date = date.to_ndt();
        if self.normalize && date != normalize(&date) {
            return false;
        }
        self.calendar.is_bus_day(&date)
    }

    /// Return the date, if a business day, or the business day preceding it.
    pub fn rollback<T: DateLike>(&self, date: &T) -> Result<T> {
        Ok(T::from_ndt(
            self.calendar.roll_backward_bus_day(&date.to_ndt())?,
        ))
    }

    /// Return the date, if a business day, or the business day following it.
    pub fn rollforward<T: DateLike>(&self, date: &T) -> Result<T> {
        Ok(T::from_ndt(
            self.calendar.roll_forward_bus_day(&date.to_ndt())?,
        ))
    }

    /// Step the date by `n` business days.
    ///
    /// A zero offset returns the date itself, without rolling onto a business day.
    pub fn apply<T: DateLike>(&self, date: &T) -> Result<T> {
        let mut result = self.calendar.add_bus_days(&date.to_ndt(), self.n)?;
        if self.normalize {
            result = normalize(&result);
        }
        Ok(T::from_ndt(result))
    }
}

impl fmt::Display for CustomBusinessDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.n == 1 {
            write!(f, "<CustomBusinessDay>")
        } else {
            write!(f, "<{} * CustomBusinessDays>", self.n)
        }
    }
}
