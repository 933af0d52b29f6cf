//! Time utilities: GPX timestamp parsing/formatting and duration formatting.

use chrono::{NaiveDateTime, TimeDelta};

/// The fixed timestamp layout read and written by the tool.
pub const GPX_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.000Z";

pub fn parse_gpx_time(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), GPX_TIME_FORMAT).ok()
}

pub fn format_gpx_time(t: NaiveDateTime) -> String {
    t.format(GPX_TIME_FORMAT).to_string()
}

/// Whole seconds elapsed from `prev` to `cur`; sub-second parts are truncated.
pub fn seconds_between(prev: NaiveDateTime, cur: NaiveDateTime) -> i64 {
    let delta: TimeDelta = cur - prev;
    delta.num_seconds()
}

/// Formats seconds as `HHh MMm SSs`.
pub fn secs2readable(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();
    format!(
        "{}{:02}h {:02}m {:02}s",
        sign,
        s / 3600,
        (s % 3600) / 60,
        s % 60
    )
}
