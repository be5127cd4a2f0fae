use chrono::prelude::*;
use log::warn;

use crate::errors::Result;
use crate::scheduling::DateRoll;

/// The business day within each month that a custom business month offset lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthAnchor {
    /// The first business day of the month.
    Begin,
    /// The last business day of the month.
    End,
}

impl MonthAnchor {
    /// Return the anchor business day of a month.
    ///
    /// `Begin` is the earliest business day in the month and `End` the latest. If a month
    /// contains no business day at all, because every working weekday is a holiday, the
    /// search continues into the following (`Begin`) or preceding (`End`) month.
    ///
    /// Fails with [`OffsetError::Configuration`](crate::errors::OffsetError) if the calendar's
    /// week mask has no working weekday.
    ///
    /// # Examples
    /// ```rust
    /// # use offsetlib::scheduling::{Cal, MonthAnchor};
    /// # use chrono::NaiveDate;
    /// let cal = Cal::default();
    /// let begin = MonthAnchor::Begin.anchor_of_month(&cal, 2007, 12).unwrap();
    /// let end = MonthAnchor::End.anchor_of_month(&cal, 2007, 11).unwrap();
    /// assert_eq!(begin, NaiveDate::from_ymd_opt(2007, 12, 3).unwrap());
    /// assert_eq!(end, NaiveDate::from_ymd_opt(2007, 11, 30).unwrap());
    /// ```
    pub fn anchor_of_month<T: DateRoll>(
        &self,
        calendar: &T,
        year: i32,
        month: u32,
    ) -> Result<NaiveDate> {
        let anchor = match self {
            MonthAnchor::Begin => calendar.first_bus_day_of_month(year, month)?,
            MonthAnchor::End => calendar.last_bus_day_of_month(year, month)?,
        }
        .date();
        if anchor.year() != year || anchor.month() != month {
            warn!(
                "{}-{:02} has no business day; {:?} anchor falls on {}",
                year, month, self, anchor
            );
        }
        Ok(anchor)
    }

    /// The name used when displaying offsets anchored on this rule.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            MonthAnchor::Begin => "CustomBusinessMonthBegin",
            MonthAnchor::End => "CustomBusinessMonthEnd",
        }
    }
}

/// Shift a calendar month by `k` months, returning the new `(year, month)`.
///
/// This is plain calendar arithmetic without any business day awareness.
///
/// # Examples
/// ```rust
/// # use offsetlib::scheduling::month_offset;
/// assert_eq!(month_offset(2008, 1, -2), (2007, 11));
/// assert_eq!(month_offset(2012, 10, 10), (2013, 8));
/// ```
pub fn month_offset(year: i32, month: u32, k: i32) -> (i32, u32) {
    let total = i64::from(year) * 12 + i64::from(month) - 1 + i64::from(k);
    (total.div_euclid(12) as i32, total.rem_euclid(12) as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::OffsetError;
    use crate::scheduling::{ndt, Cal, WeekMask};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_offset() {
        assert_eq!(month_offset(2008, 1, 0), (2008, 1));
        assert_eq!(month_offset(2008, 1, 1), (2008, 2));
        assert_eq!(month_offset(2008, 12, 1), (2009, 1));
        assert_eq!(month_offset(2008, 1, -1), (2007, 12));
        assert_eq!(month_offset(2008, 1, -13), (2006, 12));
        assert_eq!(month_offset(2008, 6, 30), (2010, 12));
        assert_eq!(month_offset(2008, 6, -30), (2005, 12));
    }

    #[test]
    fn test_anchor_default_calendar() {
        let cal = Cal::default();
        assert_eq!(MonthAnchor::Begin.anchor_of_month(&cal, 2008, 1).unwrap(), d(2008, 1, 1));
        assert_eq!(MonthAnchor::Begin.anchor_of_month(&cal, 2008, 3).unwrap(), d(2008, 3, 3));
        assert_eq!(MonthAnchor::End.anchor_of_month(&cal, 2008, 2).unwrap(), d(2008, 2, 29));
        assert_eq!(MonthAnchor::End.anchor_of_month(&cal, 2011, 7).unwrap(), d(2011, 7, 29));
    }

    #[test]
    fn test_anchor_with_holidays() {
        let cal = Cal::new(
            vec![ndt(2012, 2, 1), ndt(2012, 2, 2), ndt(2012, 3, 1)],
            WeekMask::default(),
        );
        assert_eq!(MonthAnchor::Begin.anchor_of_month(&cal, 2012, 2).unwrap(), d(2012, 2, 3));
        assert_eq!(MonthAnchor::Begin.anchor_of_month(&cal, 2012, 3).unwrap(), d(2012, 3, 2));
    }

    #[test]
    fn test_anchor_custom_week_mask() {
        let cal = Cal::new(Vec::<NaiveDate>::new(), "Sat Sun".parse().unwrap());
        assert_eq!(MonthAnchor::Begin.anchor_of_month(&cal, 2008, 1).unwrap(), d(2008, 1, 5));
        assert_eq!(MonthAnchor::End.anchor_of_month(&cal, 2008, 1).unwrap(), d(2008, 1, 27));
    }

    #[test]
    fn test_anchor_spills_out_of_month() {
        // every working day of February 2015 is a holiday
        let hols: Vec<NaiveDate> = d(2015, 2, 1)
            .iter_days()
            .take_while(|x| x.month() == 2)
            .collect();
        let cal = Cal::new(hols, WeekMask::default());
        assert_eq!(MonthAnchor::Begin.anchor_of_month(&cal, 2015, 2).unwrap(), d(2015, 3, 2));
        assert_eq!(MonthAnchor::End.anchor_of_month(&cal, 2015, 2).unwrap(), d(2015, 1, 30));
    }

    #[test]
    fn test_anchor_empty_week_mask() {
        let cal = Cal::new(Vec::<NaiveDate>::new(), WeekMask::new([false; 7]));
        assert!(matches!(
            MonthAnchor::End.anchor_of_month(&cal, 2008, 1),
            Err(OffsetError::Configuration(_))
        ));
    }
}
