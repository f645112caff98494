//! Tabstore in-memory tabular store library

// Global type definitions
pub mod types;

// Import various modules
pub mod catalog;
pub mod cli;
pub mod table;

// Re-export core items for easier access
pub use catalog::error::{DatabaseError, DatabaseResult};
pub use catalog::{Database, SharedDatabase, TableListing};
pub use table::{Rendering, Row, Table};
pub use types::StoreConfig;
