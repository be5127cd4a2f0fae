//! Pre-defined calendars which carry no jurisdiction specific holidays.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::errors::{OffsetError, Result};
use crate::scheduling::{Cal, WeekMask};

/// Generic Western business week, Saturday and Sunday weekend.
const BUS: &str = "1111100";

/// Every possible date is a business day.
const ALL: &str = "1111111";

/// Return a holiday free [`Cal`] by name.
///
/// `"bus"` is the Monday to Friday week and `"all"` treats every date as a business day.
pub fn get_calendar_by_name(name: &str) -> Result<Cal> {
    let hmap: HashMap<&str, &str> = HashMap::from([("bus", BUS), ("all", ALL)]);
    match hmap.get(name.to_lowercase().as_str()) {
        None => Err(OffsetError::Configuration(format!(
            "'{}' is not found in list of existing calendars.",
            name
        ))),
        Some(mask) => Ok(Cal::new(Vec::<NaiveDate>::new(), mask.parse::<WeekMask>()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::{ndt, DateRoll};

    #[test]
    fn test_get_bus() {
        let cal = get_calendar_by_name("bus").unwrap();
        assert_eq!(cal, Cal::default());
    }

    #[test]
    fn test_get_all() {
        let cal = get_calendar_by_name("ALL").unwrap();
        assert!(cal.is_bus_day(&ndt(2024, 1, 6)));
        assert!(cal.is_bus_day(&ndt(2024, 1, 7)));
    }

    #[test]
    fn test_unknown_name() {
        assert!(get_calendar_by_name("xyz").is_err());
    }
}
