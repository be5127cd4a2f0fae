use crate::json::JSON;
use crate::scheduling::{Cal, WeekMask};

impl JSON for Cal {}
impl JSON for WeekMask {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::ndt;

    #[test]
    fn test_cal_json() {
        let hols = vec![ndt(2015, 9, 8), ndt(2015, 9, 10)];
        let hcal = Cal::new(hols, "Mon Tue Wed Thu".parse().unwrap());
        let js = hcal.to_json().unwrap();
        let hcal2 = Cal::from_json(&js).unwrap();
        assert_eq!(hcal, hcal2);
    }

    #[test]
    fn test_cal_from_json_text_holidays() {
        let js = r#"{"holidays":["2015-09-08","20150910"],"week_mask":"1111100"}"#;
        let cal = Cal::from_json(js).unwrap();
        assert_eq!(cal, Cal::new(vec![ndt(2015, 9, 8), ndt(2015, 9, 10)], WeekMask::default()));
    }

    #[test]
    fn test_cal_from_json_invalid() {
        let js = r#"{"holidays":["not a date"],"week_mask":"1111100"}"#;
        assert!(Cal::from_json(js).is_err());
        let js = r#"{"holidays":[],"week_mask":"11111"}"#;
        assert!(Cal::from_json(js).is_err());
    }

    #[test]
    fn test_week_mask_json() {
        let mask: WeekMask = "Sun Mon".parse().unwrap();
        let js = mask.to_json().unwrap();
        assert_eq!(js, "\"1000001\"");
        assert_eq!(WeekMask::from_json(&js).unwrap(), mask);
    }
}
