use crate::core::duration::duration;
use crate::errors::{AppError, AppResult};
use crate::export::model::{
    COL_ACTIVITY, COL_ACTUAL_END, COL_ACTUAL_START, COL_CATEGORY, COL_DATE, COL_PLANNED_END,
    COL_PLANNED_START, COL_PRIORITY, COL_STATUS,
};
use crate::import::reader::{CellValue, SheetRow, read_rows};
use crate::models::status::Status;
use crate::models::task::TaskRecord;
use crate::utils::{date, time};
use chrono::NaiveDate;
use std::path::Path;

pub struct ImportLogic;

impl ImportLogic {
    /// Read `path` and convert every row, failing as a whole on the first
    /// bad row so that nothing is applied partially.
    pub fn import(path: &Path, today: NaiveDate) -> AppResult<Vec<TaskRecord>> {
        let rows = read_rows(path)?;
        rows_to_tasks(&rows, today)
    }
}

/// Convert sheet rows into task records, in sheet order.
///
/// Rows without any known column are skipped. A row that has other columns
/// but no `Activity` aborts the conversion with an error naming the row.
pub fn rows_to_tasks(rows: &[SheetRow], today: NaiveDate) -> AppResult<Vec<TaskRecord>> {
    let today_str = today.format("%Y-%m-%d").to_string();
    let mut tasks = Vec::new();

    for row in rows {
        if row.is_empty() {
            continue;
        }

        let activity = match row.get(COL_ACTIVITY) {
            Some(cell) if cell.is_truthy() => cell_text(cell),
            _ => {
                return Err(AppError::Import(format!(
                    "Row {} is missing the required 'Activity' field.",
                    row.line
                )));
            }
        };

        let planned_start = time_value(row.get(COL_PLANNED_START));
        let planned_end = time_value(row.get(COL_PLANNED_END));
        let actual_start = time_value(row.get(COL_ACTUAL_START));
        let actual_end = time_value(row.get(COL_ACTUAL_END));

        let date = date_value(row.get(COL_DATE));
        let done = row
            .get(COL_STATUS)
            .map(|c| cell_text(c).trim() == Status::Done.as_str())
            .unwrap_or(false);

        tasks.push(TaskRecord {
            id: tasks.len() as u32 + 1,
            date: if date.is_empty() { today_str.clone() } else { date },
            activity,
            priority: row.get(COL_PRIORITY).map(cell_text).unwrap_or_default(),
            done,
            planned_duration: duration(&planned_start, &planned_end),
            planned_start,
            planned_end,
            actual_duration: duration(&actual_start, &actual_end),
            actual_start,
            actual_end,
            project_category: row.get(COL_CATEGORY).map(cell_text).unwrap_or_default(),
        });
    }

    Ok(tasks)
}

fn cell_text(cell: &CellValue) -> String {
    match cell {
        CellValue::Text(s) => s.clone(),
        CellValue::Number(n) => format_number(*n),
        CellValue::Bool(b) => b.to_string(),
        CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// `YYYY-MM-DD` for date cells and recognisable date text.
fn date_value(cell: Option<&CellValue>) -> String {
    match cell {
        None => String::new(),
        Some(CellValue::DateTime(dt)) => dt.date().format("%Y-%m-%d").to_string(),
        Some(CellValue::Text(s)) => date::parse_date_lenient(s)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| s.trim().to_string()),
        Some(other) => cell_text(other),
    }
}

/// `HH:MM` (24-hour) for time cells and recognisable time text.
fn time_value(cell: Option<&CellValue>) -> String {
    match cell {
        None => String::new(),
        Some(CellValue::DateTime(dt)) => time::format_time(time::round_to_minute(dt.time())),
        Some(CellValue::Text(s)) => time::parse_time(s)
            .or_else(|| time::parse_time_12h(s))
            .map(time::format_time)
            .unwrap_or_else(|| s.trim().to_string()),
        Some(other) => cell_text(other),
    }
}
