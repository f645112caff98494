use crate::catalog::error::{DatabaseError, DatabaseResult};
use crate::table::{Rendering, Row, Table, TableBuilder};
use crate::types::{ColumnName, RowPolicy, StoreConfig, TableOrder};
use linked_hash_map::LinkedHashMap;
use tracing::{debug, info, warn};

pub mod error;
pub mod shared;

pub use shared::SharedDatabase;

/// Result of listing tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableListing {
    /// Names of all tables, in the configured order
    Names(Vec<String>),
    /// The database holds no tables
    Empty,
}

impl TableListing {
    /// Table names; empty for `Empty`
    pub fn names(&self) -> &[String] {
        match self {
            TableListing::Names(names) => names,
            TableListing::Empty => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, TableListing::Empty)
    }
}

/// In-memory collection of tables keyed by name
///
/// Names are case-sensitive and unique. Tables are kept in creation order;
/// `StoreConfig::table_order` decides whether listings follow that order or
/// sort the names.
pub struct Database {
    config: StoreConfig,
    tables: LinkedHashMap<String, Table>,
}

impl Database {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            tables: LinkedHashMap::new(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn create_table(
        &mut self,
        table_name: &str,
        columns: Vec<ColumnName>,
    ) -> DatabaseResult<&Table> {
        if self.tables.contains_key(table_name) {
            warn!(table = table_name, "table already exists");
            return Err(DatabaseError::TableAlreadyExists(table_name.to_string()));
        }

        let table = TableBuilder::new(table_name).columns(columns).build();
        info!(
            table = table_name,
            columns = table.column_count(),
            "created table"
        );
        self.tables.insert(table_name.to_string(), table);

        self.get_table(table_name)
    }

    pub fn list_tables(&self) -> TableListing {
        if self.tables.is_empty() {
            return TableListing::Empty;
        }

        let mut names: Vec<String> = self.tables.keys().cloned().collect();
        if self.config.table_order == TableOrder::Sorted {
            names.sort();
        }
        TableListing::Names(names)
    }

    pub fn table_exists(&self, table_name: &str) -> bool {
        self.tables.contains_key(table_name)
    }

    pub fn get_table(&self, table_name: &str) -> DatabaseResult<&Table> {
        self.tables
            .get(table_name)
            .ok_or_else(|| DatabaseError::TableNotFound(table_name.to_string()))
    }

    pub fn get_table_mut(&mut self, table_name: &str) -> DatabaseResult<&mut Table> {
        self.tables
            .get_mut(table_name)
            .ok_or_else(|| DatabaseError::TableNotFound(table_name.to_string()))
    }

    /// Look up a table, creating an empty one with no columns when absent
    pub fn get_or_create_table(&mut self, table_name: &str) -> &mut Table {
        if !self.tables.contains_key(table_name) {
            info!(table = table_name, "creating empty table on lookup");
        }
        self.tables
            .entry(table_name.to_string())
            .or_insert_with(|| Table::new(table_name))
    }

    pub fn add_row(&mut self, table_name: &str, row: Row) -> DatabaseResult<()> {
        let policy = self.config.row_policy;
        let table = match self.get_table_mut(table_name) {
            Ok(table) => table,
            Err(err) => {
                warn!(table = table_name, "cannot add row to missing table");
                return Err(err);
            }
        };

        if policy == RowPolicy::Strict {
            if let Err(err) = table.validate_row(&row) {
                warn!(table = table_name, error = %err, "rejected row");
                return Err(err.into());
            }
        }

        table.append_row(row);
        debug!(table = table_name, rows = table.row_count(), "added row");
        Ok(())
    }

    pub fn display_table(&self, table_name: &str) -> DatabaseResult<Rendering> {
        let table = self.get_table(table_name)?;
        let rendering = table.render()?;
        debug!(table = table_name, rows = rendering.rows().len(), "rendered table");
        Ok(rendering)
    }

    /// Number of tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
