//! Integration tests for `Date` serial numbers and the global evaluation date.

use ql_core::{ScopedEvaluationDate, Settings};
use ql_time::{evaluation_date, Date};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn consecutive_serials() {
    let start = date(2000, 1, 1);
    let end = date(2040, 1, 1);

    let mut prev = start;
    let mut counter = start + 1;
    while counter <= end {
        assert_eq!(counter.serial(), prev.serial() + 1, "serial gap at {counter}");
        assert!(counter > prev, "ordering broken at {counter}");
        if counter.month() == prev.month() {
            assert_eq!(counter.day_of_month(), prev.day_of_month() + 1);
        } else {
            assert_eq!(counter.day_of_month(), 1, "month rollover at {counter}");
        }
        prev = counter;
        counter = counter + 1;
    }
}

#[test]
fn evaluation_date_follows_settings() {
    let fixed = date(2024, 1, 10);
    {
        let _guard = ScopedEvaluationDate::new(fixed.serial());
        assert_eq!(evaluation_date().unwrap(), fixed);
    }
    assert_eq!(Settings::instance().evaluation_date_serial(), None);
    assert_eq!(evaluation_date().unwrap(), Date::todays_date().unwrap());
}
