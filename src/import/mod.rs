//! Spreadsheet import: read the first sheet of a file and turn its rows
//! into task records.

pub mod logic;
pub mod reader;

pub use logic::{ImportLogic, rows_to_tasks};
pub use reader::{CellValue, SheetRow, read_rows};
