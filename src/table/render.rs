//! Rendering: the printable result of rendering a table

use crate::types::{CellValue, ColumnName, DEFAULT_DELIMITER};
use serde::Serialize;
use std::fmt;

/// Rendered table contents
///
/// Holds the header (declared columns, in order) and one line of cells per
/// row, in insertion order. Every line has exactly as many cells as the header.
/// Producing text or JSON from it is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendering {
    /// Header cells
    columns: Vec<ColumnName>,
    /// Row cells
    rows: Vec<Vec<CellValue>>,
}

impl Rendering {
    pub(crate) fn new(columns: Vec<ColumnName>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { columns, rows }
    }

    /// Header cells
    pub fn columns(&self) -> &[ColumnName] {
        &self.columns
    }

    /// Row cells
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Header line followed by one line per row, cells joined by `delimiter`
    pub fn lines(&self, delimiter: &str) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(self.columns.join(delimiter));
        for row in &self.rows {
            lines.push(row.join(delimiter));
        }
        lines
    }

    /// All lines joined with newlines, with a trailing newline
    pub fn to_text(&self, delimiter: &str) -> String {
        let mut output = String::new();
        for line in self.lines(delimiter) {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    /// JSON object `{"columns": [...], "rows": [[...], ...]}`
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Rendering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text(DEFAULT_DELIMITER))
    }
}
