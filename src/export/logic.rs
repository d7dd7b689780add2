// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::exportable;
use crate::export::xlsx::export_xlsx;
use crate::models::task::TaskRecord;
use crate::ui::messages::warning;
use crate::ui::prompt::ask_yes_no;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write every task with an activity to `path`.
    ///
    /// Returns how many tasks were written. With nothing to export a notice
    /// is printed, no file is touched and 0 is returned. An existing file is
    /// replaced only with `force` or after confirmation.
    pub fn export(
        records: &[TaskRecord],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        let tasks = exportable(records);

        if tasks.is_empty() {
            warning("There are no tasks to export.");
            return Ok(0);
        }

        if path.exists()
            && !force
            && !ask_yes_no(&format!("The file '{}' already exists.", path.display()))?
        {
            return Err(AppError::Export(
                "Export cancelled: existing file not overwritten".to_string(),
            ));
        }

        match format {
            ExportFormat::Xlsx => export_xlsx(&tasks, path)?,
            ExportFormat::Csv => export_csv(&tasks, path)?,
            ExportFormat::Json => export_json(&tasks, path)?,
        }

        Ok(tasks.len())
    }
}
