//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide table, CSV and JSON renderings of batch reports and masked keys.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings; see `output_result`).
//!
//! Invariants:
//! - Tables use tab-separation for consistent alignment in standard terminals.
//! - Table and CSV share the same columns, in the same order.
//! - Missing values render as `N/A` in table and CSV, `null` in JSON.
//! - No formatter ever sees a raw key; rows carry masked keys only.

use anyhow::Result;
use keyprobe_client::BatchReport;

mod common;
mod csv;
mod json;
mod table;

pub use common::{output_result, summary_line};
pub use self::csv::CsvFormatter;
pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: table, csv, json", s),
        }
    }
}

/// Renders command results.
pub trait Formatter {
    /// Format a batch report. `show_errors` adds the response snippet of failed keys.
    fn format_report(&self, report: &BatchReport, show_errors: bool) -> Result<String>;

    /// Format masked keys produced by `keyprobe mask`.
    fn format_masked_keys(&self, masked: &[String]) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
