//! Message timestamp formatting.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, Local, TimeZone};

const DISPLAY_FORMAT: &str = "%d.%m.%Y, %H:%M";

/// Format an RFC 3339 timestamp in the viewer's local zone.
pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &Local)
}

/// Format `raw` as `DD.MM.YYYY, HH:MM` in `tz`. Empty input stays empty;
/// unparsable input is shown as-is.
pub fn format_timestamp_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if raw.is_empty() {
        return String::new();
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        Err(_) => raw.to_owned(),
    }
}
