//! Time utilities: parsing HH:MM, minute arithmetic, formatting.

use chrono::{Local, NaiveTime, Timelike};

/// Parse a wall-clock time written as `H:MM`, `HH:MM` or `HH:MM:SS`.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    ["%H:%M", "%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(t, fmt).ok())
}

/// Parse a 12-hour clock time such as `9:05 AM`, as spreadsheets often
/// render time cells when saved as text.
pub fn parse_time_12h(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    ["%I:%M %p", "%I:%M:%S %p"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(t, fmt).ok())
}

pub fn minutes_of_day(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Round to the closest whole minute. Spreadsheet time serials are floats
/// and come back a few microseconds off.
pub fn round_to_minute(t: NaiveTime) -> NaiveTime {
    let secs = t.num_seconds_from_midnight() as f64 + t.nanosecond() as f64 / 1e9;
    let minutes = ((secs / 60.0).round() as u32) % (24 * 60);
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap_or(NaiveTime::MIN)
}

/// Current local time as `HH:MM`.
pub fn now_hhmm() -> String {
    format_time(Local::now().time())
}

pub fn format_hours(hours: f64) -> String {
    format!("{:.2} h", hours)
}
