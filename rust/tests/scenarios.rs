use crate::scheduling::{
    ndt, Cal, CustomBusinessDay, CustomBusinessMonth, DateRoll, HolidayInput, MonthAnchor,
    WeekMask,
};
use chrono::{NaiveDate, NaiveDateTime};

fn assert_on_offset(offset: &CustomBusinessMonth, cases: &[(NaiveDateTime, bool)]) {
    for (dt, expected) in cases.iter() {
        assert_eq!(
            offset.is_on_offset(dt).unwrap(),
            *expected,
            "{} on offset {}",
            offset,
            dt
        );
    }
}

#[test]
fn begin_large_n() {
    let dt = ndt(2012, 10, 23);
    assert_eq!(CustomBusinessMonth::begin(10).apply(&dt).unwrap(), ndt(2013, 8, 1));

    let offset = CustomBusinessMonth::begin(1) * 6;
    assert_eq!(offset.negate().apply(&ndt(2012, 1, 1)).unwrap(), ndt(2011, 7, 1));
    assert_eq!(offset.apply(&ndt(2011, 12, 18)).unwrap(), ndt(2012, 6, 1));
}

#[test]
fn end_large_n() {
    let dt = ndt(2012, 10, 23);
    assert_eq!(CustomBusinessMonth::end(10).apply(&dt).unwrap(), ndt(2013, 7, 31));

    let offset = CustomBusinessMonth::end(1) * 6;
    assert_eq!(offset.negate().apply(&ndt(2012, 1, 1)).unwrap(), ndt(2011, 7, 29));
    assert_eq!(offset.apply(&ndt(2011, 12, 18)).unwrap(), ndt(2012, 5, 31));
}

#[test]
fn cday_large_n_round_trip() {
    let dt = ndt(2012, 10, 23);
    let cday = CustomBusinessDay::new(100, Cal::default());
    let there = cday.apply(&dt).unwrap();
    assert_eq!((-cday).apply(&there).unwrap(), dt);
}

#[test]
fn begin_holidays() {
    let holidays: Vec<HolidayInput> = vec![
        "2012-02-01".into(),
        NaiveDate::from_ymd_opt(2012, 2, 2).unwrap().into(),
        ndt(2012, 3, 1).into(),
    ];
    let offset =
        CustomBusinessMonth::try_new(1, MonthAnchor::Begin, false, "1111100", holidays).unwrap();
    let dt = ndt(2012, 1, 1);
    assert_eq!(offset.apply(&dt).unwrap(), ndt(2012, 1, 2));
    assert_eq!(offset.scale(2).apply(&dt).unwrap(), ndt(2012, 2, 3));
    assert_eq!(offset.scale(3).apply(&dt).unwrap(), ndt(2012, 3, 2));
    assert_on_offset(
        &offset,
        &[
            (ndt(2012, 2, 1), false),
            (ndt(2012, 2, 3), true),
            (ndt(2012, 3, 2), true),
        ],
    );
}

#[test]
fn end_holidays() {
    let cal = Cal::new(
        vec![ndt(2012, 1, 31), ndt(2012, 2, 28), ndt(2012, 2, 29)],
        WeekMask::default(),
    );
    let offset = CustomBusinessMonth::with_calendar(1, MonthAnchor::End, cal);
    let dt = ndt(2012, 1, 1);
    assert_eq!(offset.apply(&dt).unwrap(), ndt(2012, 1, 30));
    assert_eq!((2 * &offset).apply(&dt).unwrap(), ndt(2012, 2, 27));
}

#[test]
fn week_mask_and_holidays_together() {
    // Middle-East style Sunday to Thursday working week
    let offset = CustomBusinessMonth::try_new(
        1,
        MonthAnchor::End,
        false,
        "Sun Mon Tue Wed Thu",
        vec!["2013-05-30".into()],
    )
    .unwrap();
    // Friday 31st May 2013 is outside the week and Thursday 30th is a holiday
    assert_eq!(offset.apply(&ndt(2013, 5, 1)).unwrap(), ndt(2013, 5, 29));
    assert_eq!(offset.apply(&ndt(2013, 5, 29)).unwrap(), ndt(2013, 6, 30));

    let offset = CustomBusinessMonth::try_new(
        1,
        MonthAnchor::Begin,
        false,
        "Sun Mon Tue Wed Thu",
        vec!["2013-06-02".into()],
    )
    .unwrap();
    // Saturday 1st June 2013 is outside the week and Sunday 2nd is a holiday
    assert_eq!(offset.apply(&ndt(2013, 5, 15)).unwrap(), ndt(2013, 6, 3));
}

#[test]
fn begin_on_offset() {
    assert_on_offset(
        &CustomBusinessMonth::begin(1),
        &[(ndt(2008, 1, 1), true), (ndt(2008, 1, 31), false)],
    );
}

#[test]
fn end_on_offset() {
    assert_on_offset(
        &CustomBusinessMonth::end(1),
        &[(ndt(2008, 1, 31), true), (ndt(2008, 1, 1), false)],
    );
}

#[test]
fn anchors_are_business_days() {
    let cal = Cal::new(
        vec![ndt(2024, 1, 1), ndt(2024, 3, 29), ndt(2024, 12, 25)],
        WeekMask::default(),
    );
    for anchor in [MonthAnchor::Begin, MonthAnchor::End] {
        let offset = CustomBusinessMonth::with_calendar(1, anchor, cal.clone());
        let anchors = offset
            .anchor_range(&ndt(2024, 1, 1), &ndt(2024, 12, 31))
            .unwrap();
        assert_eq!(anchors.len(), 12);
        for a in anchors.iter() {
            assert!(cal.is_bus_day(a), "{} is not a business day", a);
            assert!(offset.is_on_offset(a).unwrap());
        }
    }
}

#[test]
fn date_inputs_return_dates() {
    let dt = NaiveDate::from_ymd_opt(2008, 1, 1).unwrap();
    let offset = CustomBusinessMonth::end(1);
    let result: NaiveDate = offset.apply(&dt).unwrap();
    assert_eq!(result, NaiveDate::from_ymd_opt(2008, 1, 31).unwrap());
}

#[test]
fn calendar_from_name() {
    let cal = crate::scheduling::get_calendar_by_name("all").unwrap();
    let offset = CustomBusinessMonth::with_calendar(1, MonthAnchor::End, cal);
    // every day is a business day so the anchor is the calendar month end
    assert_eq!(offset.apply(&ndt(2008, 5, 2)).unwrap(), ndt(2008, 5, 31));
}
