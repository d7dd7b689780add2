use crate::errors::{AppError, AppResult};
use crate::export::model::COLUMNS;
use crate::utils::path::extension_of;
use calamine::{Data, DataType, Reader, open_workbook_auto};
use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::path::Path;

/// A non-empty cell, typed the way the file stored it.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Whether the cell counts as "filled in" for a required column.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Text(s) => !s.trim().is_empty(),
            CellValue::Number(n) => *n != 0.0 && !n.is_nan(),
            CellValue::Bool(b) => *b,
            CellValue::DateTime(_) => true,
        }
    }
}

/// One data row of the sheet, restricted to the known column labels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetRow {
    /// 1-based row number, header included; one per record, not per text line.
    pub line: usize,
    pub cells: HashMap<String, CellValue>,
}

impl SheetRow {
    pub fn get(&self, label: &str) -> Option<&CellValue> {
        self.cells.get(label)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

fn is_known_label(label: &str) -> bool {
    COLUMNS.iter().any(|(known, _, _)| *known == label)
}

/// Read the data rows of `path` (first sheet only).
///
/// `.xlsx` and `.xls` go through the workbook reader, `.csv` through the CSV
/// reader; any other extension is rejected.
pub fn read_rows(path: &Path) -> AppResult<Vec<SheetRow>> {
    match extension_of(path).as_deref() {
        Some("xlsx") | Some("xls") => read_workbook(path),
        Some("csv") => read_csv(path),
        other => Err(AppError::UnsupportedFormat(
            other.unwrap_or("(none)").to_string(),
        )),
    }
}

fn read_workbook(path: &Path) -> AppResult<Vec<SheetRow>> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| AppError::Spreadsheet(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Spreadsheet("the workbook has no sheets".to_string()))?
        .map_err(|e| AppError::Spreadsheet(e.to_string()))?;

    let first_row = range.start().map(|(r, _)| r as usize).unwrap_or(0);
    let mut rows = range.rows();

    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    let labels: Vec<String> = header.iter().map(|c| c.to_string()).collect();

    let mut out = Vec::new();
    for (i, row) in rows.enumerate() {
        let mut cells = HashMap::new();
        for (label, cell) in labels.iter().zip(row.iter()) {
            if !is_known_label(label) {
                continue;
            }
            if let Some(value) = workbook_cell(cell) {
                cells.insert(label.clone(), value);
            }
        }
        out.push(SheetRow {
            // +1 for 1-based numbering, +1 for the header
            line: first_row + i + 2,
            cells,
        });
    }

    Ok(out)
}

fn workbook_cell(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.trim().is_empty() => None,
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Int(i) => Some(CellValue::Number(*i as f64)),
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::DateTime(_) | Data::DateTimeIso(_) => Some(
            cell.as_datetime()
                .map(CellValue::DateTime)
                .unwrap_or_else(|| CellValue::Text(cell.to_string())),
        ),
        Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
    }
}

fn read_csv(path: &Path) -> AppResult<Vec<SheetRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::Spreadsheet(format!("CSV open error: {e}")))?;

    let labels: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::Spreadsheet(format!("Failed to read CSV headers: {e}")))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut out = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result.map_err(|e| AppError::Spreadsheet(format!("CSV read error: {e}")))?;

        let mut cells = HashMap::new();
        for (label, field) in labels.iter().zip(record.iter()) {
            if is_known_label(label) && !field.trim().is_empty() {
                cells.insert(label.clone(), CellValue::Text(field.to_string()));
            }
        }

        // counted per record: a quoted cell may span several physical lines
        out.push(SheetRow { line: i + 2, cells });
    }

    Ok(out)
}
