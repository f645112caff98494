//! Table structure: a named, fixed-schema collection of rows

use crate::table::{Rendering, Row};
use crate::types::ColumnName;
use std::fmt;

/// Table error types
///
/// Faults found when a row does not match the table schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A declared column has no value in a row
    MissingColumnValue(ColumnName),
    /// A row carries a value for a column the table does not declare
    UnknownColumn(ColumnName),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::MissingColumnValue(name) => {
                write!(f, "Missing value for column: {}", name)
            }
            TableError::UnknownColumn(name) => write!(f, "Unknown column: {}", name),
        }
    }
}

impl std::error::Error for TableError {}

/// Table result type
pub type TableResult<T> = Result<T, TableError>;

/// Table structure
///
/// Stores:
/// - name: identifier, unique within a database
/// - columns: declared column names; their order is the display order
/// - rows: appended rows, in insertion order
///
/// The column list is fixed at construction. It may be empty or contain
/// duplicates; neither is rejected here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
    columns: Vec<ColumnName>,
    rows: Vec<Row>,
}

impl Table {
    /// Create a table with no columns and no rows
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_columns(name, Vec::new())
    }

    /// Create a table with the given columns and no rows
    pub fn with_columns(name: impl Into<String>, columns: Vec<ColumnName>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Get table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get declared columns
    pub fn columns(&self) -> &[ColumnName] {
        &self.columns
    }

    /// Get column count
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get position of the first column with this name
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Check whether a column is declared
    pub fn has_column(&self, name: &str) -> bool {
        self.column_position(name).is_some()
    }

    /// Get all rows
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get row count
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Append a row
    ///
    /// The row is not checked against the schema; use [`Table::validate_row`]
    /// first if that matters. A row lacking a declared column makes
    /// [`Table::render`] fail later.
    pub fn append_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Check a row against the schema
    ///
    /// Missing declared columns are reported before undeclared ones.
    pub fn validate_row(&self, row: &Row) -> TableResult<()> {
        if let Some(missing) = self.columns.iter().find(|c| !row.contains(c)) {
            return Err(TableError::MissingColumnValue(missing.clone()));
        }

        if let Some(unknown) = row.columns().into_iter().find(|c| !self.has_column(c)) {
            return Err(TableError::UnknownColumn(unknown.to_string()));
        }

        Ok(())
    }

    /// Render header and rows
    ///
    /// Fails on the first row, in insertion order, that has no value for a
    /// declared column.
    pub fn render(&self) -> TableResult<Rendering> {
        let mut lines = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let cells = self
                .columns
                .iter()
                .map(|column| {
                    row.get(column)
                        .map(str::to_string)
                        .ok_or_else(|| TableError::MissingColumnValue(column.clone()))
                })
                .collect::<TableResult<Vec<_>>>()?;
            lines.push(cells);
        }

        Ok(Rendering::new(self.columns.clone(), lines))
    }
}
