//! Interactive menu front end
//!
//! Drives a [`Database`] from a text menu. Input is read as
//! whitespace-separated tokens; every core outcome is turned into a message
//! here, the database itself never prints.

use crate::catalog::error::DatabaseError;
use crate::catalog::{Database, TableListing};
use crate::table::Row;
use crate::types::OutputFormat;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub mod input;

pub use input::TokenReader;

/// Menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateTable,
    ListTables,
    AddRow,
    DisplayTable,
    Exit,
}

impl MenuChoice {
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::CreateTable),
            2 => Some(MenuChoice::ListTables),
            3 => Some(MenuChoice::AddRow),
            4 => Some(MenuChoice::DisplayTable),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Whether the loop keeps going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

const MENU: &str = "\n--- Database Management ---\n\
                    1. Create Table\n\
                    2. List Tables\n\
                    3. Add Row to Table\n\
                    4. Display Table\n\
                    5. Exit\n";

/// Text menu bound to one database, one input and one output
pub struct Menu<'a, R, W> {
    db: &'a mut Database,
    input: TokenReader<R>,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(db: &'a mut Database, input: R, output: W) -> Self {
        Self {
            db,
            input: TokenReader::new(input),
            output,
        }
    }

    /// Run until the user picks Exit or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            if self.step()? == Flow::Stop {
                break;
            }
        }
        self.output.flush()
    }

    fn step(&mut self) -> io::Result<Flow> {
        let Some(token) = self.prompt("Enter your choice: ")? else {
            return Ok(Flow::Stop);
        };

        let number = match token.parse::<i64>() {
            Ok(number) => number,
            Err(_) => {
                self.input.discard_line();
                writeln!(self.output, "Invalid input. Please enter a number.")?;
                return Ok(Flow::Continue);
            }
        };

        let Some(choice) = MenuChoice::from_number(number) else {
            writeln!(self.output, "Invalid choice. Please try again.")?;
            return Ok(Flow::Continue);
        };
        debug!(?choice, "menu choice");

        match choice {
            MenuChoice::CreateTable => self.create_table(),
            MenuChoice::ListTables => self.list_tables(),
            MenuChoice::AddRow => self.add_row(),
            MenuChoice::DisplayTable => self.display_table(),
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting program. Goodbye!")?;
                Ok(Flow::Stop)
            }
        }
    }

    fn create_table(&mut self) -> io::Result<Flow> {
        let Some(table_name) = self.prompt("Enter table name: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(count) = self.prompt("Enter number of columns: ")? else {
            return Ok(Flow::Stop);
        };

        let count = match count.parse::<i64>() {
            Ok(count) if count > 0 => count,
            _ => {
                self.input.discard_line();
                writeln!(self.output, "Invalid column count.")?;
                return Ok(Flow::Continue);
            }
        };

        writeln!(self.output, "Enter column names:")?;
        let mut columns = Vec::new();
        for _ in 0..count {
            let Some(column) = self.input.next_token()? else {
                return Ok(Flow::Stop);
            };
            columns.push(column);
        }

        match self.db.create_table(&table_name, columns) {
            Ok(_) => writeln!(
                self.output,
                "Table \"{}\" created successfully.",
                table_name
            )?,
            Err(err) => self.report(&table_name, &err)?,
        }
        Ok(Flow::Continue)
    }

    fn list_tables(&mut self) -> io::Result<Flow> {
        match self.db.list_tables() {
            TableListing::Empty => writeln!(self.output, "No tables in the database.")?,
            TableListing::Names(names) => {
                writeln!(self.output, "Tables in the database:")?;
                for name in names {
                    writeln!(self.output, "{}", name)?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn add_row(&mut self) -> io::Result<Flow> {
        let Some(table_name) = self.prompt("Enter table name to add a row: ")? else {
            return Ok(Flow::Stop);
        };

        let columns = match self.db.get_table(&table_name) {
            Ok(table) => table.columns().to_vec(),
            Err(err) => {
                self.report(&table_name, &err)?;
                return Ok(Flow::Continue);
            }
        };

        writeln!(self.output, "Enter values for the following columns:")?;
        let mut row = Row::new();
        for column in columns {
            let Some(value) = self.prompt(&format!("{}: ", column))? else {
                return Ok(Flow::Stop);
            };
            row.set(column, value);
        }

        match self.db.add_row(&table_name, row) {
            Ok(()) => writeln!(self.output, "Row added to table \"{}\".", table_name)?,
            Err(err) => self.report(&table_name, &err)?,
        }
        Ok(Flow::Continue)
    }

    fn display_table(&mut self) -> io::Result<Flow> {
        let Some(table_name) = self.prompt("Enter table name to display: ")? else {
            return Ok(Flow::Stop);
        };

        let rendering = match self.db.display_table(&table_name) {
            Ok(rendering) => rendering,
            Err(err) => {
                self.report(&table_name, &err)?;
                return Ok(Flow::Continue);
            }
        };

        let format = self.db.config().output_format;
        match format {
            OutputFormat::Text => {
                let text = rendering.to_text(&self.db.config().delimiter);
                write!(self.output, "{}", text)?;
            }
            OutputFormat::Json => match rendering.to_json() {
                Ok(json) => writeln!(self.output, "{}", json)?,
                Err(err) => writeln!(self.output, "Failed to encode table: {}", err)?,
            },
        }
        Ok(Flow::Continue)
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.input.next_token()
    }

    fn report(&mut self, table_name: &str, err: &DatabaseError) -> io::Result<()> {
        writeln!(self.output, "{}", describe(table_name, err))
    }
}

/// User-facing message for a rejected operation
pub fn describe(table_name: &str, err: &DatabaseError) -> String {
    match err {
        DatabaseError::TableAlreadyExists(name) => {
            format!("Table with name \"{}\" already exists.", name)
        }
        DatabaseError::TableNotFound(name) => format!("Table \"{}\" does not exist.", name),
        DatabaseError::MissingColumnValue(column) => format!(
            "Table \"{}\" has a row with no value for column \"{}\".",
            table_name, column
        ),
        DatabaseError::UnknownColumn(column) => format!(
            "Table \"{}\" has no column \"{}\".",
            table_name, column
        ),
    }
}
