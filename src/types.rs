use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Global type definitions
///
/// Stores configuration structs, enums and type aliases shared by the store,
/// the menu front end and the binary.
/// Column name type
pub type ColumnName = String;

/// Cell value type (all columns hold strings)
pub type CellValue = String;

/// Default delimiter placed between rendered cells
pub const DEFAULT_DELIMITER: &str = "\t";

/// Order in which table names are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableOrder {
    /// Creation order
    #[default]
    Insertion,
    /// Lexicographic byte order of the names
    Sorted,
}

impl fmt::Display for TableOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableOrder::Insertion => write!(f, "insertion"),
            TableOrder::Sorted => write!(f, "sorted"),
        }
    }
}

/// When rows are checked against the table schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowPolicy {
    /// Accept any row at insert time; a missing value surfaces when rendering
    #[default]
    Permissive,
    /// Reject rows with missing or undeclared columns at insert time
    Strict,
}

impl fmt::Display for RowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowPolicy::Permissive => write!(f, "permissive"),
            RowPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// Output format used by the front end when displaying a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Delimiter-joined text lines
    #[default]
    Text,
    /// JSON object with `columns` and `rows`
    Json,
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warn level
    #[default]
    Warn,
    /// Error level
    Error,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Store configuration
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Delimiter placed between rendered cells
    pub delimiter: String,
    /// Listing order of table names
    pub table_order: TableOrder,
    /// Row validation policy
    pub row_policy: RowPolicy,
    /// Display format
    pub output_format: OutputFormat,
    /// Log level
    pub log_level: LogLevel,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            delimiter: String::from(DEFAULT_DELIMITER),
            table_order: TableOrder::Insertion,
            row_policy: RowPolicy::Permissive,
            output_format: OutputFormat::Text,
            log_level: LogLevel::Warn,
        }
    }
}

impl StoreConfig {
    /// Load a configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse a configuration from a JSON string
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Configuration error type
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    IoError(std::io::Error),
    /// Config file is not valid JSON for `StoreConfig`
    ParseError(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(err) => write!(f, "I/O error: {}", err),
            ConfigError::ParseError(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(err) => Some(err),
            ConfigError::ParseError(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;
