mod common;
use common::at;

use chrono::{TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use tstamp::core::timefmt::{self, DisplayZone};
use tstamp::errors::AppError;

#[test]
fn test_parse_and_format_fixed_layout() {
    let ts = timefmt::parse("2024-01-01 10:00:05").expect("parse");
    assert_eq!(ts, at(10, 0, 5));
    assert_eq!(timefmt::format(&ts), "2024-01-01 10:00:05");
}

#[test]
fn test_parse_rejects_other_layouts() {
    for bad in ["2024-01-01T10:00:05", "2024-01-01 10:00", "", "yesterday"] {
        match timefmt::parse(bad) {
            Err(AppError::Format { text, .. }) => assert_eq!(text, bad),
            other => panic!("expected format error for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_truncate_drops_subseconds() {
    let ts = Utc.timestamp_opt(1_700_000_000, 999_000_000).unwrap();
    let t = timefmt::truncate(ts);
    assert_eq!(t.timestamp(), 1_700_000_000);
    assert_eq!(t.timestamp_subsec_nanos(), 0);
}

#[test]
fn test_display_zone_keeps_instant() {
    let ts = at(12, 0, 0);
    let zone = DisplayZone::Named(Tz::Europe__Stockholm);
    let shown = timefmt::to_display_zone(&ts, &zone);

    assert_eq!(timefmt::format(&shown), "2024-01-01 13:00:00");
    assert_eq!(shown.with_timezone(&Utc), ts);

    let utc = timefmt::to_display_zone(&ts, &DisplayZone::Named(Tz::UTC));
    assert_eq!(timefmt::format(&utc), "2024-01-01 12:00:00");
}

#[test]
fn test_local_zone_keeps_instant() {
    let ts = at(12, 0, 0);
    let shown = timefmt::to_display_zone(&ts, &DisplayZone::Local);
    assert_eq!(shown.with_timezone(&Utc), ts);
}

#[test]
fn test_format_duration() {
    assert_eq!(timefmt::format_duration(TimeDelta::zero()), "0s");
    assert_eq!(timefmt::format_duration(TimeDelta::seconds(5)), "5s");
    assert_eq!(timefmt::format_duration(TimeDelta::seconds(120)), "2m0s");
    assert_eq!(timefmt::format_duration(TimeDelta::seconds(3605)), "1h0m5s");
    assert_eq!(timefmt::format_duration(TimeDelta::hours(26) + TimeDelta::minutes(3)), "26h3m0s");
    assert_eq!(timefmt::format_duration(TimeDelta::seconds(-65)), "-1m5s");
}

#[test]
fn test_format_duration_length_grows_with_magnitude() {
    let samples = [0, 9, 59, 60, 599, 3599, 3600, 35_999, 360_000];
    let widths: Vec<usize> = samples
        .iter()
        .map(|s| timefmt::format_duration(TimeDelta::seconds(*s)).len())
        .collect();
    assert!(widths.windows(2).all(|w| w[0] <= w[1]), "{widths:?}");
}
