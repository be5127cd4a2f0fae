mod cal;
mod calendar;
mod dateroll;
mod holidays;
mod named;
mod week_mask;

pub use crate::scheduling::calendars::{
    cal::Cal,
    calendar::{ndt, DateLike},
    dateroll::DateRoll,
    holidays::{HolidayInput, HolidayProvider},
    named::get_calendar_by_name,
    week_mask::WeekMask,
};
pub(crate) use crate::scheduling::calendars::calendar::{normalize, with_date};
