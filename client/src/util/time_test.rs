use super::*;
use chrono::{FixedOffset, Utc};

#[test]
fn formats_utc_timestamp() {
    assert_eq!(format_timestamp_in("2024-01-01T10:00:00Z", &Utc), "01.01.2024, 10:00");
}

#[test]
fn accepts_fractional_seconds_and_offsets() {
    assert_eq!(format_timestamp_in("2024-03-09T07:05:59.123456+00:00", &Utc), "09.03.2024, 07:05");
}

#[test]
fn converts_into_target_zone() {
    let moscow = FixedOffset::east_opt(3 * 3600).unwrap();
    assert_eq!(format_timestamp_in("2024-01-01T22:30:00Z", &moscow), "02.01.2024, 01:30");
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(format_timestamp_in("", &Utc), "");
}

#[test]
fn unparsable_input_is_shown_raw() {
    assert_eq!(format_timestamp_in("yesterday", &Utc), "yesterday");
}
