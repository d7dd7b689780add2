// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{DATE_FORMAT, TIME_FORMAT, date_serial, time_serial};
use crate::export::model::{COLUMNS, ColumnKind, TaskExport, task_to_row};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;

pub(crate) const SHEET_NAME: &str = "Todos";

/// Export XLSX: one styled sheet, fixed column widths, typed cells.
pub(crate) fn export_xlsx(tasks: &[TaskExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, (label, width, _)) in COLUMNS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *label, &header_format)
            .map_err(to_export_error)?;
        worksheet
            .set_column_width(col as u16, *width)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    // ---------------------------
    // Rows
    // ---------------------------
    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, task) in tasks.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in task_to_row(task).iter().enumerate() {
            write_cell(worksheet, row, col as u16, value, COLUMNS[col].2, band)?;
        }
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write one cell according to its column kind. Values that do not parse as
/// their kind are written as text so nothing is lost.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &str,
    kind: ColumnKind,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if value.trim().is_empty() {
        worksheet
            .write_blank(row, col, &base)
            .map_err(to_export_error)?;
        return Ok(());
    }

    let typed = match kind {
        ColumnKind::Date => date_serial(value).map(|s| (s, base.clone().set_num_format(DATE_FORMAT))),
        ColumnKind::Time => time_serial(value).map(|s| (s, base.clone().set_num_format(TIME_FORMAT))),
        ColumnKind::Number => value
            .trim()
            .parse::<f64>()
            .ok()
            .map(|n| (n, base.clone().set_align(FormatAlign::Right))),
        ColumnKind::Text => None,
    };

    match typed {
        Some((number, fmt)) => worksheet.write_with_format(row, col, number, &fmt),
        None => worksheet.write_with_format(row, col, value, &base),
    }
    .map_err(to_export_error)?;

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
