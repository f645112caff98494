//! Shared database handle for use from several threads

use crate::catalog::error::DatabaseResult;
use crate::catalog::{Database, TableListing};
use crate::table::{Rendering, Row};
use crate::types::{ColumnName, StoreConfig};
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable, thread-safe handle to one [`Database`]
///
/// Every operation holds the lock only for its own duration and returns owned
/// data, so no guard escapes to the caller. Reads (listing, lookup, rendering)
/// share the lock; creating tables and adding rows take it exclusively.
#[derive(Clone)]
pub struct SharedDatabase {
    inner: Arc<RwLock<Database>>,
}

impl SharedDatabase {
    pub fn new(config: StoreConfig) -> Self {
        Self::from(Database::new(config))
    }

    /// Create a table and return its declared columns
    pub fn create_table(
        &self,
        table_name: &str,
        columns: Vec<ColumnName>,
    ) -> DatabaseResult<Vec<ColumnName>> {
        self.inner
            .write()
            .create_table(table_name, columns)
            .map(|table| table.columns().to_vec())
    }

    pub fn list_tables(&self) -> TableListing {
        self.inner.read().list_tables()
    }

    pub fn table_exists(&self, table_name: &str) -> bool {
        self.inner.read().table_exists(table_name)
    }

    /// Declared columns of a table
    pub fn columns(&self, table_name: &str) -> DatabaseResult<Vec<ColumnName>> {
        self.inner
            .read()
            .get_table(table_name)
            .map(|table| table.columns().to_vec())
    }

    pub fn add_row(&self, table_name: &str, row: Row) -> DatabaseResult<()> {
        self.inner.write().add_row(table_name, row)
    }

    pub fn display_table(&self, table_name: &str) -> DatabaseResult<Rendering> {
        self.inner.read().display_table(table_name)
    }

    /// Run a closure with shared access to the database
    pub fn read<R>(&self, f: impl FnOnce(&Database) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run a closure with exclusive access to the database
    pub fn write<R>(&self, f: impl FnOnce(&mut Database) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl From<Database> for SharedDatabase {
    fn from(db: Database) -> Self {
        Self {
            inner: Arc::new(RwLock::new(db)),
        }
    }
}

impl Default for SharedDatabase {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::error::DatabaseError;
    use std::thread;

    #[test]
    fn test_shared_basic_operations() {
        let db = SharedDatabase::default();

        let columns = db
            .create_table("users", vec!["id".to_string(), "email".to_string()])
            .unwrap();
        assert_eq!(columns, vec!["id", "email"]);
        assert!(db.table_exists("users"));

        db.add_row("users", Row::new().with("id", "1").with("email", "a@b.c"))
            .unwrap();
        let rendering = db.display_table("users").unwrap();
        assert_eq!(rendering.lines(" "), vec!["id email", "1 a@b.c"]);

        assert_eq!(
            db.columns("ghost"),
            Err(DatabaseError::TableNotFound("ghost".to_string()))
        );
    }

    #[test]
    fn test_shared_clone_sees_same_database() {
        let db = SharedDatabase::default();
        let other = db.clone();

        db.create_table("t", vec!["a".to_string()]).unwrap();
        assert!(other.table_exists("t"));
        assert_eq!(other.read(|db| db.len()), 1);
    }

    #[test]
    fn test_shared_write_closure() {
        let db = SharedDatabase::default();
        let count = db.write(|db| {
            db.get_or_create_table("auto");
            db.len()
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn test_concurrent_table_creation() {
        let db = SharedDatabase::default();
        let num_threads = 4;
        let tables_per_thread = 25;

        let handles: Vec<_> = (0..num_threads)
            .map(|thread_id| {
                let db = db.clone();
                thread::spawn(move || {
                    let mut created = 0;
                    for i in 0..tables_per_thread {
                        let table_name = format!("table_{}_{}", thread_id, i);
                        if db.create_table(&table_name, vec!["id".to_string()]).is_ok() {
                            created += 1;
                        }
                    }
                    created
                })
            })
            .collect();

        let success_count: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(success_count, num_threads * tables_per_thread);
        assert_eq!(db.list_tables().names().len(), num_threads * tables_per_thread);
    }

    #[test]
    fn test_concurrent_same_name_only_one_wins() {
        let db = SharedDatabase::default();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let db = db.clone();
                thread::spawn(move || db.create_table("contested", vec![format!("c{}", i)]).is_ok())
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(wins, 1);
        assert_eq!(db.columns("contested").unwrap().len(), 1);
    }

    #[test]
    fn test_concurrent_add_rows() {
        let db = SharedDatabase::default();
        db.create_table("log", vec!["writer".to_string(), "seq".to_string()])
            .unwrap();

        let handles: Vec<_> = (0..4)
            .map(|writer| {
                let db = db.clone();
                thread::spawn(move || {
                    for seq in 0..50 {
                        let row = Row::new()
                            .with("writer", writer.to_string())
                            .with("seq", seq.to_string());
                        db.add_row("log", row).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let rendering = db.display_table("log").unwrap();
        assert_eq!(rendering.rows().len(), 200);

        // Rows from one writer stay in the order that writer inserted them
        for writer in 0..4 {
            let seqs: Vec<usize> = rendering
                .rows()
                .iter()
                .filter(|cells| cells[0] == writer.to_string())
                .map(|cells| cells[1].parse().unwrap())
                .collect();
            assert_eq!(seqs, (0..50).collect::<Vec<_>>());
        }
    }
}
