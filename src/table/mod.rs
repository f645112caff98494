//! Table module for rows, tables and their rendering
//!
//! This module implements the table entity with the following features:
//! - Dynamic schema: an ordered list of column names fixed at creation
//! - Append-only rows of column/value pairs
//! - Rendering into header and row cells without printing anything

pub mod builder;
pub mod render;
pub mod row;
pub mod table;

pub use builder::TableBuilder;
pub use render::Rendering;
pub use row::Row;
pub use table::{Table, TableError, TableResult};
