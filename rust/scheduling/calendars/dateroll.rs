use chrono::prelude::*;
use chrono::Days;

use crate::errors::{OffsetError, Result};
use crate::scheduling::calendars::calendar::{first_of_month, last_of_month, shift_days};

/// Simple date adjustment defining business days, holidays and rolling.
///
/// Only the date part of a `NaiveDateTime` is examined; rolling preserves the time of day.
pub trait DateRoll {
    /// Returns whether the date is part of the general working week.
    fn is_weekday(&self, date: &NaiveDateTime) -> bool;

    /// Returns whether the date is a specific holiday excluded from the regular working week.
    fn is_holiday(&self, date: &NaiveDateTime) -> bool;

    /// Returns the number of days in each week that are part of the working week.
    fn weekdays_per_week(&self) -> u32;

    /// Returns the number of holidays falling on working weekdays within `(start, end]`.
    fn count_weekday_holidays(&self, start: &NaiveDate, end: &NaiveDate) -> u32;

    /// Returns whether the date is a business day, i.e. part of the working week and not a holiday.
    fn is_bus_day(&self, date: &NaiveDateTime) -> bool {
        self.is_weekday(date) && !self.is_holiday(date)
    }

    /// Returns whether the date is not a business day, i.e. either not in working week or a specific holiday.
    fn is_non_bus_day(&self, date: &NaiveDateTime) -> bool {
        !self.is_bus_day(date)
    }

    /// Return an error if no business day can ever exist under this calendar.
    fn ensure_bus_days(&self) -> Result<()> {
        if self.weekdays_per_week() == 0 {
            Err(OffsetError::Configuration(
                "week mask excludes every weekday so no business day exists".to_string(),
            ))
        } else {
            Ok(())
        }
    }

    /// Return the first business day strictly after `date`.
    fn next_bus_day(&self, date: &NaiveDateTime) -> Result<NaiveDateTime> {
        self.ensure_bus_days()?;
        let mut new_date = shift_days(date, 1)?;
        while !self.is_bus_day(&new_date) {
            new_date = shift_days(&new_date, 1)?;
        }
        Ok(new_date)
    }

    /// Return the last business day strictly before `date`.
    fn previous_bus_day(&self, date: &NaiveDateTime) -> Result<NaiveDateTime> {
        self.ensure_bus_days()?;
        let mut new_date = shift_days(date, -1)?;
        while !self.is_bus_day(&new_date) {
            new_date = shift_days(&new_date, -1)?;
        }
        Ok(new_date)
    }

    /// Return the `date`, if a business day, or get the next business date after `date`.
    fn roll_forward_bus_day(&self, date: &NaiveDateTime) -> Result<NaiveDateTime> {
        if self.is_bus_day(date) {
            Ok(*date)
        } else {
            self.next_bus_day(date)
        }
    }

    /// Return the `date`, if a business day, or get the business day preceding `date`.
    fn roll_backward_bus_day(&self, date: &NaiveDateTime) -> Result<NaiveDateTime> {
        if self.is_bus_day(date) {
            Ok(*date)
        } else {
            self.previous_bus_day(date)
        }
    }

    /// Step a date by a number of business days.
    ///
    /// Each step moves to the nearest business day strictly beyond the current position, so a
    /// non-business `date` is not rolled first: adding 1 business day to a Saturday gives the
    /// Monday. Adding **zero** days returns `date` unchanged.
    ///
    /// Whole weeks are skipped at once, corrected by the holidays which fall inside them, so
    /// large `days` do not walk through every calendar day.
    fn add_bus_days(&self, date: &NaiveDateTime, days: i32) -> Result<NaiveDateTime> {
        if days == 0 {
            return Ok(*date);
        }
        self.ensure_bus_days()?;
        let per_week = i64::from(self.weekdays_per_week());
        let forward = days > 0;
        let mut remaining = i64::from(days.unsigned_abs());
        let mut new_date = *date;

        loop {
            // leave at least one step so the landing date is found by single steps
            let weeks = (remaining - 1) / per_week;
            if weeks == 0 {
                break;
            }
            let target = if forward {
                shift_days(&new_date, 7 * weeks)?
            } else {
                shift_days(&new_date, -7 * weeks)?
            };
            let holidays = if forward {
                self.count_weekday_holidays(&new_date.date(), &target.date())
            } else {
                self.count_weekday_holidays(
                    &(target.date() - Days::new(1)),
                    &(new_date.date() - Days::new(1)),
                )
            };
            remaining -= weeks * per_week - i64::from(holidays);
            new_date = target;
        }

        for _ in 0..remaining {
            new_date = if forward {
                self.next_bus_day(&new_date)?
            } else {
                self.previous_bus_day(&new_date)?
            };
        }
        Ok(new_date)
    }

    /// Return the first business day of a month, rolling into the next month if the month has
    /// no business day at all.
    fn first_bus_day_of_month(&self, year: i32, month: u32) -> Result<NaiveDateTime> {
        let first = first_of_month(year, month)?.and_time(NaiveTime::MIN);
        self.roll_forward_bus_day(&first)
    }

    /// Return the last business day of a month, rolling into the previous month if the month
    /// has no business day at all.
    fn last_bus_day_of_month(&self, year: i32, month: u32) -> Result<NaiveDateTime> {
        let last = last_of_month(year, month)?.and_time(NaiveTime::MIN);
        self.roll_backward_bus_day(&last)
    }

    /// Return a vector of business dates between a start and end, inclusive.
    fn bus_date_range(
        &self,
        start: &NaiveDateTime,
        end: &NaiveDateTime,
    ) -> Result<Vec<NaiveDateTime>> {
        let mut vec = Vec::new();
        let mut sample_date = self.roll_forward_bus_day(start)?;
        while sample_date <= *end {
            vec.push(sample_date);
            sample_date = self.next_bus_day(&sample_date)?;
        }
        Ok(vec)
    }

    /// Print a representation of the month of the object.
    fn print_month(&self, year: i32, month: u32) -> Result<String> {
        let first = first_of_month(year, month)?;
        let last = last_of_month(year, month)?;
        let mut output = format!("{:>15} {}\n", first.format("%B").to_string(), year);
        output += "Su Mo Tu We Th Fr Sa\n";

        let idx_start = first.weekday().num_days_from_sunday() as usize;
        let mut arr: [String; 42] = std::array::from_fn(|_| String::from("  "));
        for date in first.iter_days().take_while(|d| *d <= last) {
            let ndt = date.and_time(NaiveTime::MIN);
            let s: String = if self.is_bus_day(&ndt) {
                format!("{:>2}", date.day())
            } else if !self.is_weekday(&ndt) {
                " .".to_string()
            } else {
                " *".to_string()
            };
            arr[idx_start + date.day0() as usize] = s;
        }

        for row in arr.chunks(7) {
            output += &row.join(" ");
            output += "\n";
        }
        Ok(output)
    }

    /// Print a representation of a year of the object.
    fn print_year(&self, year: i32) -> Result<String> {
        let mut data: Vec<Vec<String>> = vec![];
        for i in 1..13 {
            data.push(
                self.print_month(year, i)?
                    .lines()
                    .map(|s| s.to_string())
                    .collect(),
            );
        }
        let mut output = "\n".to_string();
        for first in 0..3 {
            for i in 0..8 {
                output += &format!(
                    "{}   {}   {}   {}\n",
                    data[first][i],
                    data[first + 3][i],
                    data[first + 6][i],
                    data[first + 9][i]
                );
            }
        }
        output += "Legend:\n";
        output += "'1-31': Business day                    '*': Holiday\n";
        output += "   '.': Outside the working week\n";
        Ok(output)
    }
}
