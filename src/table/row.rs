//! Row structure: one record of column/value pairs

use crate::types::{CellValue, ColumnName};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single record
///
/// Maps column names to string values. Keys are unique within a row; the
/// order in which they were set carries no meaning, the owning table's column
/// list decides display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    data: HashMap<ColumnName, CellValue>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Set a value, returning the row for chaining
    pub fn with(mut self, column: impl Into<ColumnName>, value: impl Into<CellValue>) -> Self {
        self.set(column, value);
        self
    }

    /// Set a value, returning the previous one for that column
    pub fn set(
        &mut self,
        column: impl Into<ColumnName>,
        value: impl Into<CellValue>,
    ) -> Option<CellValue> {
        self.data.insert(column.into(), value.into())
    }

    /// Get the value stored for a column
    pub fn get(&self, column: &str) -> Option<&str> {
        self.data.get(column).map(String::as_str)
    }

    /// Check whether the row has a value for a column
    pub fn contains(&self, column: &str) -> bool {
        self.data.contains_key(column)
    }

    /// Column names present in this row, sorted
    pub fn columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = self.data.keys().map(String::as_str).collect();
        columns.sort_unstable();
        columns
    }

    /// Number of values in the row
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the row holds no values
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<ColumnName>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            data: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
