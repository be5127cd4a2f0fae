use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{OffsetError, Result};

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// The days of the week which are eligible to be business days.
///
/// Stored as seven flags ordered Monday to Sunday. The default is Monday to Friday.
///
/// A mask can be parsed from either a string of seven `0`/`1` characters, e.g. `"1111100"`,
/// or a whitespace separated list of day names, e.g. `"Mon Wed Fri"`.
///
/// ```rust
/// # use offsetlib::scheduling::WeekMask;
/// # use chrono::Weekday;
/// let mask: WeekMask = "Mon Wed Fri".parse().unwrap();
/// assert!(mask.contains(Weekday::Wed));
/// assert!(!mask.contains(Weekday::Tue));
/// assert_eq!(mask.to_string(), "1010100");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekMask {
    days: [bool; 7],
}

impl Default for WeekMask {
    fn default() -> Self {
        WeekMask {
            days: [true, true, true, true, true, false, false],
        }
    }
}

impl WeekMask {
    /// Create a mask from flags ordered Monday to Sunday.
    pub fn new(days: [bool; 7]) -> Self {
        WeekMask { days }
    }

    /// Create a mask from the weekdays **excluded** from the working week (0=Mon,.., 6=Sun).
    ///
    /// `vec![5, 6]` gives the usual Saturday and Sunday weekend.
    pub fn from_excluded(excluded: Vec<u8>) -> Result<Self> {
        let mut days = [true; 7];
        for v in excluded {
            let weekday = Weekday::try_from(v)
                .map_err(|_| OffsetError::InvalidWeekMask(format!("weekday index {}", v)))?;
            days[weekday.num_days_from_monday() as usize] = false;
        }
        Ok(WeekMask { days })
    }

    /// Whether the given weekday is part of the working week.
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.days[weekday.num_days_from_monday() as usize]
    }

    /// Number of working weekdays in a week.
    pub fn count(&self) -> u32 {
        self.days.iter().filter(|d| **d).count() as u32
    }

    /// Whether no weekday at all is eligible, in which case no business day can exist.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// The working weekdays, Monday first.
    pub fn weekdays(&self) -> Vec<Weekday> {
        WEEKDAYS
            .iter()
            .filter(|w| self.contains(**w))
            .copied()
            .collect()
    }
}

impl FromStr for WeekMask {
    type Err = OffsetError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.len() == 7 && s.chars().all(|c| c == '0' || c == '1') {
            let mut days = [false; 7];
            for (i, c) in s.chars().enumerate() {
                days[i] = c == '1';
            }
            return Ok(WeekMask { days });
        }
        if s.is_empty() {
            return Err(OffsetError::InvalidWeekMask(s.to_string()));
        }
        let mut days = [false; 7];
        for token in s.split_whitespace() {
            let weekday = Weekday::from_str(token)
                .map_err(|_| OffsetError::InvalidWeekMask(s.to_string()))?;
            days[weekday.num_days_from_monday() as usize] = true;
        }
        Ok(WeekMask { days })
    }
}

impl TryFrom<String> for WeekMask {
    type Error = OffsetError;

    fn try_from(value: String) -> Result<Self> {
        WeekMask::from_str(&value)
    }
}

impl From<WeekMask> for String {
    fn from(mask: WeekMask) -> Self {
        mask.to_string()
    }
}

impl fmt::Display for WeekMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.days.iter() {
            write!(f, "{}", if *d { '1' } else { '0' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_monday_to_friday() {
        let mask = WeekMask::default();
        assert_eq!(mask.count(), 5);
        assert!(mask.contains(Weekday::Mon));
        assert!(mask.contains(Weekday::Fri));
        assert!(!mask.contains(Weekday::Sat));
        assert!(!mask.contains(Weekday::Sun));
    }

    #[test]
    fn test_parse_names() {
        let mask: WeekMask = "Mon Wed Fri".parse().unwrap();
        assert_eq!(
            mask.weekdays(),
            vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]
        );
        let mask: WeekMask = "sunday Thu".parse().unwrap();
        assert_eq!(mask.weekdays(), vec![Weekday::Thu, Weekday::Sun]);
    }

    #[test]
    fn test_parse_bits() {
        let mask: WeekMask = "0000011".parse().unwrap();
        assert_eq!(mask.weekdays(), vec![Weekday::Sat, Weekday::Sun]);
        let mask: WeekMask = "0000000".parse().unwrap();
        assert!(mask.is_empty());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            "Mon Funday".parse::<WeekMask>(),
            Err(OffsetError::InvalidWeekMask(_))
        ));
        assert!("".parse::<WeekMask>().is_err());
        assert!("11111".parse::<WeekMask>().is_err());
    }

    #[test]
    fn test_from_excluded() {
        let mask = WeekMask::from_excluded(vec![5, 6]).unwrap();
        assert_eq!(mask, WeekMask::default());
        let mask = WeekMask::from_excluded(vec![4, 5]).unwrap();
        assert_eq!(mask.to_string(), "1111001");
        assert!(WeekMask::from_excluded(vec![7]).is_err());
    }
}
