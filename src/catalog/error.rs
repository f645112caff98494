//! Database error definitions

use crate::table::TableError;
use std::error::Error;
use std::fmt;

/// Database error types
///
/// Represents every rejected outcome of a database operation. None of them
/// leave the database modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseError {
    /// Table already exists
    TableAlreadyExists(String),
    /// Table not found
    TableNotFound(String),
    /// A row has no value for a declared column
    MissingColumnValue(String),
    /// A row has a value for an undeclared column
    UnknownColumn(String),
}

impl fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseError::TableAlreadyExists(name) => {
                write!(f, "Table already exists: {}", name)
            }
            DatabaseError::TableNotFound(name) => write!(f, "Table not found: {}", name),
            DatabaseError::MissingColumnValue(name) => {
                write!(f, "Missing value for column: {}", name)
            }
            DatabaseError::UnknownColumn(name) => write!(f, "Unknown column: {}", name),
        }
    }
}

impl Error for DatabaseError {}

impl From<TableError> for DatabaseError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::MissingColumnValue(name) => DatabaseError::MissingColumnValue(name),
            TableError::UnknownColumn(name) => DatabaseError::UnknownColumn(name),
        }
    }
}

/// Result type for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
