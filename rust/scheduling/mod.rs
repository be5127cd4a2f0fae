//! Create a business day [`Cal`] and step dates by custom business days and custom business months.
//!
//! The purpose of this module is to provide date offsets which respect an arbitrary working week
//! and an arbitrary list of holidays, such as;
//! - Stepping forward or backward by a number of business days, with [`CustomBusinessDay`].
//! - Stepping to the first or last business day of a month some months away, with
//!   [`CustomBusinessMonth`] and its [`MonthAnchor`] rule.
//!
//! # Calendars and Date Rolling
//!
//! A [`Cal`] is formed of a [`WeekMask`], defining which days of the week are eligible to be
//! business days, and a set of holidays. Holidays may be given as dates, datetimes or text and
//! any time of day is ignored.
//!
//! All calendars implement the [`DateRoll`] trait which provides simple date adjustment, which
//! is called **rolling**. This involves moving forward or backward from non-business days to
//! specific **business days**.
//!
//! ### Example
//! This example creates a business day calendar defining Saturday and Sunday weekends and a
//! specific holiday (the Early May UK Bank Holiday). It rolls Saturday 29th April 2017 forward.
//! ```rust
//! # use offsetlib::scheduling::{Cal, ndt, DateRoll, WeekMask};
//! let cal = Cal::new(vec![ndt(2017, 5, 1)], WeekMask::default());
//! assert_eq!(ndt(2017, 5, 2), cal.roll_forward_bus_day(&ndt(2017, 4, 29)).unwrap());
//! assert_eq!(ndt(2017, 4, 28), cal.roll_backward_bus_day(&ndt(2017, 4, 29)).unwrap());
//! ```
//!
//! # Custom Business Months
//!
//! Each month has one **anchor**: its first business day for [`MonthAnchor::Begin`] or its last
//! business day for [`MonthAnchor::End`]. Applying a [`CustomBusinessMonth`] moves a date onto the
//! anchor of a month `n` months away, counting the current month's anchor as a step when the
//! date has not yet reached it (forward) or has already passed it (backward).
//!
//! ### Example
//! This example uses a calendar where the 1st and 2nd February 2012 are holidays, so the
//! February anchor of a *begin* offset is Friday 3rd February.
//! ```rust
//! # use offsetlib::scheduling::{Cal, ndt, CustomBusinessMonth, MonthAnchor, WeekMask};
//! let cal = Cal::new(vec![ndt(2012, 2, 1), ndt(2012, 2, 2)], WeekMask::default());
//! let offset = CustomBusinessMonth::with_calendar(2, MonthAnchor::Begin, cal);
//! assert_eq!(ndt(2012, 2, 3), offset.apply(&ndt(2012, 1, 1)).unwrap());
//! assert!(offset.is_on_offset(&ndt(2012, 2, 3)).unwrap());
//! ```

mod calendars;
mod offsets;
mod serde;

pub use crate::scheduling::{
    calendars::{
        get_calendar_by_name, ndt, Cal, DateLike, DateRoll, HolidayInput, HolidayProvider,
        WeekMask,
    },
    offsets::{month_offset, CustomBusinessDay, CustomBusinessMonth, MonthAnchor},
};
