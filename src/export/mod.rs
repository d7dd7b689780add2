// src/export/mod.rs

mod excel_date;
mod json_csv;
pub mod logic;
pub mod model;
mod xlsx;

pub use logic::ExportLogic;
pub use model::{TaskExport, exportable};

use crate::ui::messages::success;
use crate::utils::path::extension_of;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Guess the format from a file extension; spreadsheets by default.
    pub fn from_path(path: &Path) -> Self {
        match extension_of(path).as_deref() {
            Some("csv") => ExportFormat::Csv,
            Some("json") => ExportFormat::Json,
            _ => ExportFormat::Xlsx,
        }
    }
}
