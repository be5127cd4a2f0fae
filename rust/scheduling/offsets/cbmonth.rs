use chrono::prelude::*;
use log::trace;
use std::fmt;

use crate::errors::Result;
use crate::scheduling::calendars::{normalize, with_date};
use crate::scheduling::offsets::anchor::month_offset;
use crate::scheduling::{Cal, CustomBusinessDay, DateLike, HolidayInput, MonthAnchor, WeekMask};

/// An offset of a number of custom business months.
///
/// Each month is represented by its anchor: the first business day for
/// [`MonthAnchor::Begin`] or the last business day for [`MonthAnchor::End`], where business
/// days are defined by the [`Cal`] of the offset.
///
/// Two offsets are equal when `n`, `normalize`, the week mask, the holidays and the anchor
/// all agree.
///
/// # Examples
/// ```rust
/// # use offsetlib::scheduling::{CustomBusinessMonth, ndt};
/// let offset = CustomBusinessMonth::begin(1);
/// assert_eq!(offset.apply(&ndt(2008, 2, 7)).unwrap(), ndt(2008, 3, 3));
/// assert_eq!(offset.to_string(), "<CustomBusinessMonthBegin>");
///
/// let offset = CustomBusinessMonth::end(-2);
/// assert_eq!(offset.apply(&ndt(2008, 1, 1)).unwrap(), ndt(2007, 11, 30));
/// assert_eq!(offset.to_string(), "<-2 * CustomBusinessMonthEnds>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomBusinessMonth {
    pub(crate) n: i32,
    pub(crate) anchor: MonthAnchor,
    /// Single business day offset carrying the calendar and `normalize` flag; used for rolling.
    pub(crate) cbday: CustomBusinessDay,
}

impl CustomBusinessMonth {
    /// Create an offset of `n` months over the default Monday to Friday calendar.
    pub fn new(n: i32, anchor: MonthAnchor) -> Self {
        Self::with_calendar(n, anchor, Cal::default())
    }

    /// Create an offset of `n` months anchored on the first business day of each month.
    pub fn begin(n: i32) -> Self {
        Self::new(n, MonthAnchor::Begin)
    }

    /// Create an offset of `n` months anchored on the last business day of each month.
    pub fn end(n: i32) -> Self {
        Self::new(n, MonthAnchor::End)
    }

    /// Create an offset using an existing business day calendar.
    pub fn with_calendar(n: i32, anchor: MonthAnchor, calendar: Cal) -> Self {
        CustomBusinessMonth {
            n,
            anchor,
            cbday: CustomBusinessDay::new(1, calendar),
        }
    }

    /// Create an offset from a week mask specification and unparsed holidays.
    ///
    /// # Examples
    /// ```rust
    /// # use offsetlib::scheduling::{CustomBusinessMonth, MonthAnchor, ndt};
    /// let offset = CustomBusinessMonth::try_new(
    ///     2,
    ///     MonthAnchor::Begin,
    ///     false,
    ///     "Mon Tue Wed Thu Fri",
    ///     vec!["2012-02-01".into(), ndt(2012, 2, 2).into(), "2012-03-01".into()],
    /// ).unwrap();
    /// assert_eq!(offset.apply(&ndt(2012, 1, 1)).unwrap(), ndt(2012, 2, 3));
    /// ```
    pub fn try_new(
        n: i32,
        anchor: MonthAnchor,
        normalize: bool,
        week_mask: &str,
        holidays: Vec<HolidayInput>,
    ) -> Result<Self> {
        let week_mask: WeekMask = week_mask.parse()?;
        let calendar = Cal::try_new(holidays, week_mask)?;
        Ok(Self::with_calendar(n, anchor, calendar).with_normalize(normalize))
    }

    /// Return a copy with the `normalize` flag set.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.cbday = self.cbday.with_normalize(normalize);
        self
    }

    /// The number of months stepped by [`CustomBusinessMonth::apply`].
    pub fn n(&self) -> i32 {
        self.n
    }

    /// Whether results are truncated to midnight.
    pub fn normalize(&self) -> bool {
        self.cbday.normalize
    }

    /// The anchor rule of the offset.
    pub fn anchor(&self) -> MonthAnchor {
        self.anchor
    }

    /// The business day calendar.
    pub fn calendar(&self) -> &Cal {
        &self.cbday.calendar
    }

    /// The single business day offset used for rolling.
    pub fn cbday(&self) -> &CustomBusinessDay {
        &self.cbday
    }

    /// Return a new offset stepping `k` times as many months.
    pub fn scale(&self, k: i32) -> Self {
        CustomBusinessMonth {
            n: self.n * k,
            ..self.clone()
        }
    }

    /// Return a new offset stepping in the opposite direction.
    pub fn negate(&self) -> Self {
        self.scale(-1)
    }

    /// Return the anchor business day of a month for this offset.
    pub fn anchor_of_month(&self, year: i32, month: u32) -> Result<NaiveDate> {
        self.anchor.anchor_of_month(&self.cbday.calendar, year, month)
    }

    /// Whether the date is the anchor of its own month.
    ///
    /// With `normalize` set only midnight values can be on offset.
    pub fn is_on_offset<T: DateLike>(&self, date: &T) -> Result<bool> {
        let date = date.to_ndt();
        if self.normalize() && date != normalize(&date) {
            return Ok(false);
        }
        Ok(date.date() == self.anchor_of_month(date.year(), date.month())?)
    }

    /// Return the date, if a business day, or the business day preceding it.
    ///
    /// This snaps onto any business day and does not depend on the anchor rule; see
    /// [`CustomBusinessMonth::rollback_to_anchor`] for rolling onto an anchor.
    pub fn rollback<T: DateLike>(&self, date: &T) -> Result<T> {
        self.cbday.rollback(date)
    }

    /// Return the date, if a business day, or the business day following it.
    ///
    /// This snaps onto any business day and does not depend on the anchor rule; see
    /// [`CustomBusinessMonth::rollforward_to_anchor`] for rolling onto an anchor.
    pub fn rollforward<T: DateLike>(&self, date: &T) -> Result<T> {
        self.cbday.rollforward(date)
    }

    /// Return the date, if on offset, or the nearest preceding anchor.
    ///
    /// # Examples
    /// ```rust
    /// # use offsetlib::scheduling::CustomBusinessMonth;
    /// # use chrono::NaiveDate;
    /// let dt = NaiveDate::from_ymd_opt(2012, 9, 15).unwrap();
    /// let result = CustomBusinessMonth::begin(1).rollback_to_anchor(&dt).unwrap();
    /// assert_eq!(result, NaiveDate::from_ymd_opt(2012, 9, 3).unwrap());
    /// ```
    pub fn rollback_to_anchor<T: DateLike>(&self, date: &T) -> Result<T> {
        if self.is_on_offset(date)? {
            Ok(*date)
        } else {
            Ok(T::from_ndt(self.shift(&date.to_ndt(), -1)?))
        }
    }

    /// Return the date, if on offset, or the nearest following anchor.
    pub fn rollforward_to_anchor<T: DateLike>(&self, date: &T) -> Result<T> {
        if self.is_on_offset(date)? {
            Ok(*date)
        } else {
            Ok(T::from_ndt(self.shift(&date.to_ndt(), 1)?))
        }
    }

    /// Step the date by `n` custom business months.
    ///
    /// The current month's anchor is compared with the date. Stepping forward from a date
    /// before the anchor counts that anchor as the first step, and stepping backward (or by
    /// zero) from a date after the anchor counts it as the first step. An offset with `n = 0`
    /// therefore rolls forward onto the nearest anchor at or after the date.
    ///
    /// Each step lands on a distinct anchor. Where a month has no business day its anchor is
    /// the same date as a neighbouring month's, and that date is counted once.
    ///
    /// The time of day of the input is kept unless `normalize` is set.
    pub fn apply<T: DateLike>(&self, date: &T) -> Result<T> {
        Ok(T::from_ndt(self.shift(&date.to_ndt(), self.n)?))
    }

    /// Return all anchors within `start` and `end`, inclusive.
    pub fn anchor_range<T: DateLike>(&self, start: &T, end: &T) -> Result<Vec<T>> {
        let end = end.to_ndt();
        let mut vec = Vec::new();
        let mut sample_date = self.rollforward_to_anchor(&start.to_ndt())?;
        while sample_date <= end {
            vec.push(T::from_ndt(sample_date));
            sample_date = self.shift(&sample_date, 1)?;
        }
        Ok(vec)
    }

    fn shift(&self, date: &NaiveDateTime, n: i32) -> Result<NaiveDateTime> {
        let (mut year, mut month) = (date.year(), date.month());
        let current = self.anchor_of_month(year, month)?;
        let steps = roll_convention(&date.date(), n, &current);

        // a month without business days shares its anchor with a neighbour; step over it
        let mut target = current;
        for _ in 0..steps.unsigned_abs() {
            let previous = target;
            while target == previous {
                (year, month) = month_offset(year, month, steps.signum());
                target = self.anchor_of_month(year, month)?;
            }
        }
        trace!(
            "{} from {}: current anchor {}, {} month steps to {}",
            self,
            date,
            current,
            steps,
            target
        );
        let result = with_date(date, target);
        if self.normalize() {
            Ok(normalize(&result))
        } else {
            Ok(result)
        }
    }
}

/// Adjust the number of month steps for the position of `date` relative to the current anchor.
fn roll_convention(date: &NaiveDate, n: i32, anchor: &NaiveDate) -> i32 {
    if n > 0 && date < anchor {
        n - 1
    } else if n <= 0 && date > anchor {
        n + 1
    } else {
        n
    }
}

impl fmt::Display for CustomBusinessMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.n == 1 {
            write!(f, "<{}>", self.anchor.name())
        } else {
            write!(f, "<{} * {}s>", self.n, self.anchor.name())
        }
    }
}
