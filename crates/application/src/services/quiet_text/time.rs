use chrono::DateTime;
use chrono_tz::Tz;
use std::fmt::Write;

/// Appends `HH:MM:SS.uuuuuu` rendered in `zone`, with `?` placeholders for absent parts.
///
/// Seconds that do not fit a calendar date are treated like absent seconds.
pub fn write_time(out: &mut String, secs: Option<u64>, nsecs: Option<u32>, zone: &Tz) {
    let wall_clock = secs
        .and_then(|s| i64::try_from(s).ok())
        .and_then(|s| DateTime::from_timestamp(s, 0));

    match wall_clock {
        Some(utc) => {
            let _ = write!(out, "{}", utc.with_timezone(zone).format("%H:%M:%S"));
        }
        None => out.push_str("??:??:??"),
    }

    match nsecs {
        Some(nsecs) => {
            let _ = write!(out, ".{:06}", nsecs / 1000);
        }
        None => out.push_str(".??????"),
    }
}
