//! TableBuilder for fluent table construction
//!
//! Provides a builder pattern for creating tables with:
//! - Table name
//! - Columns, one at a time or in batch, in declaration order

use crate::table::Table;
use crate::types::ColumnName;

/// Builder for constructing Table instances
///
/// # Example
/// ```
/// use tabstore::table::TableBuilder;
///
/// let table = TableBuilder::new("users")
///     .column("id")
///     .column("email")
///     .build();
///
/// assert_eq!(table.columns(), &["id", "email"]);
/// ```
#[derive(Debug)]
pub struct TableBuilder {
    name: String,
    columns: Vec<ColumnName>,
}

impl TableBuilder {
    /// Create a new table builder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Add a single column after the ones already declared
    pub fn column(mut self, column: impl Into<ColumnName>) -> Self {
        self.columns.push(column.into());
        self
    }

    /// Add multiple columns at once
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ColumnName>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Build the table
    pub fn build(self) -> Table {
        Table::with_columns(self.name, self.columns)
    }
}
