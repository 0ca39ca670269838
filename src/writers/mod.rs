pub mod csv_writer;
pub mod json_writer;
pub mod table_writer;

pub use csv_writer::CsvWriter;
pub use json_writer::JsonWriter;
pub use table_writer::TableWriter;

use crate::error::{FipsError, Result};
use crate::models::Record;
use crate::table::Table;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", name)
    }
}

/// How to render a result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// CSV only
    pub header: bool,
    /// CSV only
    pub index: bool,
}

impl OutputOptions {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            header: true,
            index: true,
        }
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    pub fn with_index(mut self, index: bool) -> Self {
        self.index = index;
        self
    }

    /// Header and index switches only apply to CSV output.
    pub fn validate(&self) -> Result<()> {
        if self.format != OutputFormat::Csv && !(self.header && self.index) {
            return Err(FipsError::InvalidFormat(format!(
                "header and index options require csv output, not {}",
                self.format
            )));
        }
        Ok(())
    }

    pub fn write<R: Record, W: Write>(&self, table: &Table<R>, out: W) -> Result<()> {
        self.validate()?;
        match self.format {
            OutputFormat::Table => TableWriter::new().write_table(table, out),
            OutputFormat::Csv => CsvWriter::new()
                .with_header(self.header)
                .with_index(self.index)
                .write_table(table, out),
            OutputFormat::Json => JsonWriter::new().write_table(table, out),
        }
    }
}

/// Where output goes: standard output unless a file is named.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Destination {
    #[default]
    Stdout,
    File(PathBuf),
}

impl Destination {
    pub fn open(&self) -> Result<Box<dyn Write>> {
        Ok(match self {
            Destination::Stdout => Box::new(io::stdout().lock()),
            Destination::File(path) => Box::new(BufWriter::new(File::create(path)?)),
        })
    }
}

impl From<Option<PathBuf>> for Destination {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Destination::Stdout, Destination::File)
    }
}
