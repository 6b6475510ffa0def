//! Tests for reducing free intervals to bookable days.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Europe::Amsterdam;
use slot_engine::days::format_days;
use slot_engine::hours::RawDayHours;
use slot_engine::{free_days, invert_busy, Interval, OpeningHours, OpeningHoursTable, Step};

fn raw(entry: Option<(&str, &str)>) -> RawDayHours {
    RawDayHours {
        open: entry.map(|(o, _)| o.to_string()),
        closed: entry.map(|(_, c)| c.to_string()),
    }
}

/// Mon–Fri 09:00–17:00, weekends closed.
fn office_hours() -> OpeningHours {
    let mut entries = vec![raw(Some(("09:00", "17:00"))); 7];
    entries[0] = raw(None);
    entries[6] = raw(None);
    OpeningHours::new(OpeningHoursTable::from_raw(&entries).unwrap(), Amsterdam)
}

fn interval(start: &str, end: &str) -> Interval {
    Interval::try_new(dt(start), dt(end)).unwrap()
}

fn dt(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn empty_week_yields_the_five_weekdays() {
    // Mon 2026-03-02 00:00 → Mon 2026-03-09 00:00, nothing busy.
    let free = invert_busy(
        &[],
        dt("2026-03-02T00:00:00+01:00"),
        dt("2026-03-09T00:00:00+01:00"),
    );
    let days = free_days(&free, &office_hours(), Step::default());

    assert_eq!(
        format_days(&days),
        vec![
            "2026-03-02",
            "2026-03-03",
            "2026-03-04",
            "2026-03-05",
            "2026-03-06"
        ]
    );
}

#[test]
fn closed_weekday_never_qualifies() {
    // Free all Saturday and Sunday.
    let free = vec![interval("2026-03-07T00:00:00+01:00", "2026-03-08T23:59:00+01:00")];

    assert!(free_days(&free, &office_hours(), Step::default()).is_empty());
}

#[test]
fn free_time_before_opening_does_not_qualify() {
    // 08:00–08:10 on a Thursday; clipped to 09:00–17:00 nothing is left.
    let free = vec![interval("2018-05-17T08:00:00+02:00", "2018-05-17T08:10:00+02:00")];

    assert!(free_days(&free, &office_hours(), Step::default()).is_empty());
}

#[test]
fn exactly_one_step_inside_opening_hours_qualifies() {
    let free = vec![interval("2018-05-17T16:45:00+02:00", "2018-05-17T18:00:00+02:00")];

    assert_eq!(
        free_days(&free, &office_hours(), Step::default()),
        vec![date(2018, 5, 17)]
    );
}

#[test]
fn fourteen_minutes_inside_opening_hours_does_not_qualify() {
    let free = vec![interval("2018-05-17T16:46:00+02:00", "2018-05-17T18:00:00+02:00")];

    assert!(free_days(&free, &office_hours(), Step::default()).is_empty());
}

#[test]
fn a_date_is_reported_once() {
    let free = vec![
        interval("2018-05-17T09:00:00+02:00", "2018-05-17T10:00:00+02:00"),
        interval("2018-05-17T11:00:00+02:00", "2018-05-17T12:00:00+02:00"),
        interval("2018-05-17T15:00:00+02:00", "2018-05-18T10:00:00+02:00"),
    ];

    assert_eq!(
        free_days(&free, &office_hours(), Step::default()),
        vec![date(2018, 5, 17), date(2018, 5, 18)]
    );
}

#[test]
fn later_interval_can_qualify_a_day_an_earlier_one_missed() {
    let free = vec![
        interval("2018-05-17T09:00:00+02:00", "2018-05-17T09:10:00+02:00"),
        interval("2018-05-17T13:00:00+02:00", "2018-05-17T13:30:00+02:00"),
    ];

    assert_eq!(
        free_days(&free, &office_hours(), Step::default()),
        vec![date(2018, 5, 17)]
    );
}

#[test]
fn multi_day_interval_skips_the_weekend() {
    // Friday 12:00 → Tuesday 10:00.
    let free = vec![interval("2018-05-18T12:00:00+02:00", "2018-05-22T10:00:00+02:00")];

    assert_eq!(
        free_days(&free, &office_hours(), Step::default()),
        vec![date(2018, 5, 18), date(2018, 5, 21), date(2018, 5, 22)]
    );
}

#[test]
fn larger_step_raises_the_threshold() {
    let free = vec![interval("2018-05-17T09:00:00+02:00", "2018-05-17T09:45:00+02:00")];
    let hour = Step::from_minutes(60).unwrap();

    assert!(free_days(&free, &office_hours(), hour).is_empty());
    assert_eq!(
        free_days(&free, &office_hours(), Step::from_minutes(45).unwrap()).len(),
        1
    );
}
