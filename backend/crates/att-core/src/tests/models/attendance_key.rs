use crate::AttendanceKey;

use chrono::{NaiveDate, TimeZone, Utc};

#[test]
fn test_scan_key_uses_utc_calendar_day() {
    let late_evening = Utc.with_ymd_and_hms(2026, 3, 9, 23, 59, 59).unwrap();
    let next_morning = Utc.with_ymd_and_hms(2026, 3, 10, 0, 0, 1).unwrap();

    let first = AttendanceKey::for_scan(7, 1, 10, 55, late_evening);
    let second = AttendanceKey::for_scan(7, 1, 10, 55, next_morning);

    assert_eq!(first.date, NaiveDate::from_ymd_opt(2026, 3, 9).unwrap());
    assert_eq!(second.date, NaiveDate::from_ymd_opt(2026, 3, 10).unwrap());
    assert_ne!(first, second);
}

#[test]
fn test_scan_key_same_day_is_equal() {
    let morning = Utc.with_ymd_and_hms(2026, 3, 9, 8, 0, 0).unwrap();
    let noon = Utc.with_ymd_and_hms(2026, 3, 9, 12, 0, 0).unwrap();

    assert_eq!(
        AttendanceKey::for_scan(7, 1, 10, 55, morning),
        AttendanceKey::for_scan(7, 1, 10, 55, noon)
    );
}
