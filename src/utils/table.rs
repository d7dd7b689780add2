//! Table rendering utilities for CLI outputs.

use crate::utils::colors::{GREY, RESET};
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    /// Cells wider than this are cut and end with an ellipsis.
    pub max_width: usize,
}

impl Column {
    pub fn new(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width,
        }
    }
}

#[derive(Clone)]
pub struct Cell {
    pub text: String,
    pub color: Option<&'static str>,
}

impl Cell {
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored<S: Into<String>>(text: S, color: &'static str) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let longest = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(c.text.as_str()))
                    .max()
                    .unwrap_or(0);
                longest
                    .max(UnicodeWidthStr::width(col.header.as_str()))
                    .min(col.max_width)
            })
            .collect()
    }

    /// Total visible width of a rendered line.
    pub fn line_width(&self) -> usize {
        self.widths().iter().map(|w| w + 1).sum()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad(&col.header, *w));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, w) in widths.iter().enumerate() {
                let cell = row.get(i).cloned().unwrap_or_else(|| Cell::plain(""));
                let text = if cell.text.trim().is_empty() {
                    "--".to_string()
                } else {
                    truncate(&cell.text, *w)
                };
                let color = if cell.text.trim().is_empty() {
                    Some(GREY)
                } else {
                    cell.color
                };
                match color {
                    Some(c) => out.push_str(&format!("{c}{}{RESET}", pad(&text, *w))),
                    None => out.push_str(&pad(&text, *w)),
                }
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize) -> String {
    let visible = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible)))
}

fn truncate(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    let mut out = String::new();
    for ch in s.chars() {
        let next = format!("{out}{ch}");
        if UnicodeWidthStr::width(next.as_str()) + 1 > width {
            break;
        }
        out = next;
    }
    out.push('…');
    out
}
