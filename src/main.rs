//! Tabstore interactive program entry

// Use jemalloc as global allocator
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

use clap::{Parser, ValueEnum};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tabstore::cli::Menu;
use tabstore::types::{LogLevel, OutputFormat, RowPolicy, StoreConfig, TableOrder};
use tabstore::Database;
use tracing::info;

#[derive(Parser, Debug, Clone)]
#[command(name = "tabstore")]
#[command(about = "In-memory tables with a dynamic schema, driven from a text menu")]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Delimiter between displayed cells
    #[arg(short = 'd', long)]
    delimiter: Option<String>,

    /// Listing order of table names
    #[arg(long, value_enum)]
    order: Option<OrderArg>,

    /// Reject rows with missing or undeclared columns when they are added
    #[arg(long, conflicts_with = "row_policy")]
    strict: bool,

    /// Row validation policy; `strict` is the same as `--strict`
    #[arg(long, value_enum)]
    row_policy: Option<RowPolicyArg>,

    /// Display format
    #[arg(short = 'f', long, value_enum)]
    format: Option<FormatArg>,

    /// Log level (logs go to stderr)
    #[arg(short = 'l', long, value_enum)]
    log_level: Option<LogLevelArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum OrderArg {
    Insertion,
    Sorted,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum RowPolicyArg {
    Permissive,
    Strict,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum FormatArg {
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum LogLevelArg {
    Debug,
    Info,
    Warn,
    Error,
}

impl Args {
    fn into_config(self) -> Result<StoreConfig, tabstore::types::ConfigError> {
        let mut config = match &self.config {
            Some(path) => StoreConfig::from_file(path)?,
            None => StoreConfig::default(),
        };

        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        if let Some(order) = self.order {
            config.table_order = match order {
                OrderArg::Insertion => TableOrder::Insertion,
                OrderArg::Sorted => TableOrder::Sorted,
            };
        }
        if self.strict {
            config.row_policy = RowPolicy::Strict;
        }
        if let Some(policy) = self.row_policy {
            config.row_policy = match policy {
                RowPolicyArg::Permissive => RowPolicy::Permissive,
                RowPolicyArg::Strict => RowPolicy::Strict,
            };
        }
        if let Some(format) = self.format {
            config.output_format = match format {
                FormatArg::Text => OutputFormat::Text,
                FormatArg::Json => OutputFormat::Json,
            };
        }
        if let Some(level) = self.log_level {
            config.log_level = match level {
                LogLevelArg::Debug => LogLevel::Debug,
                LogLevelArg::Info => LogLevel::Info,
                LogLevelArg::Warn => LogLevel::Warn,
                LogLevelArg::Error => LogLevel::Error,
            };
        }

        Ok(config)
    }
}

fn init_logging(level: LogLevel) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        tracing_subscriber::EnvFilter::new(level.as_filter_str())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let config = match Args::parse().into_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load config: {}", err);
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.log_level);
    info!(
        order = %config.table_order,
        policy = %config.row_policy,
        "tabstore starting"
    );

    let mut db = Database::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = Menu::new(&mut db, stdin.lock(), stdout.lock()).run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("I/O error: {}", err);
            ExitCode::FAILURE
        }
    }
}
