//! Derived durations between two wall-clock times.

use crate::utils::time::{minutes_of_day, parse_time};

/// Minutes from `start` to `end`, as text.
///
/// Empty when either side is blank or unreadable, `"0"` when `end` is
/// earlier than `start`.
pub fn duration(start: &str, end: &str) -> String {
    if start.is_empty() || end.is_empty() {
        return String::new();
    }

    match (parse_time(start), parse_time(end)) {
        (Some(s), Some(e)) => {
            let minutes = minutes_of_day(e) - minutes_of_day(s);
            if minutes < 0 {
                "0".to_string()
            } else {
                minutes.to_string()
            }
        }
        _ => String::new(),
    }
}

/// Numeric value of a duration cell; blank or non-numeric counts as zero.
pub fn minutes_value(value: &str) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}
