// src/export/excel_date.rs

use crate::utils::{date, time};
use chrono::{NaiveDate, NaiveDateTime, Timelike};

pub(crate) const DATE_FORMAT: &str = "yyyy-mm-dd";
pub(crate) const TIME_FORMAT: &str = "hh:mm";

/// Excel serial (days since 1899-12-30) of a `YYYY-MM-DD` string.
pub(crate) fn date_serial(s: &str) -> Option<f64> {
    let d = date::parse_date(s)?;
    d.and_hms_opt(0, 0, 0).map(|dt| naive_datetime_to_excel_serial(&dt))
}

/// Fraction of a day of an `HH:MM` string.
pub(crate) fn time_serial(s: &str) -> Option<f64> {
    let t = time::parse_time(s)?;
    Some(t.num_seconds_from_midnight() as f64 / 86400.0)
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> f64 {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default();

    let duration = *dt - excel_epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    days + secs / 86400.0
}
