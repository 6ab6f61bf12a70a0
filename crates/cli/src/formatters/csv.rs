//! CSV formatter implementation.
//!
//! Responsibilities:
//! - Format reports as RFC 4180 CSV with the same columns as the table.
//!
//! Does NOT handle:
//! - The summary line (printed to stderr by the command).

use anyhow::{Context, Result};
use keyprobe_client::BatchReport;

use crate::formatters::Formatter;
use crate::formatters::common::{REPORT_COLUMNS, SNIPPET_COLUMN, entry_cells, snippet_cell};

/// CSV formatter.
pub struct CsvFormatter;

impl CsvFormatter {
    fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
        String::from_utf8(bytes).context("CSV output is not valid UTF-8")
    }
}

impl Formatter for CsvFormatter {
    fn format_report(&self, report: &BatchReport, show_errors: bool) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let mut header: Vec<&str> = REPORT_COLUMNS.to_vec();
        if show_errors {
            header.push(SNIPPET_COLUMN);
        }
        writer
            .write_record(&header)
            .context("Failed to write CSV headers")?;

        for entry in &report.entries {
            let mut record = entry_cells(entry).to_vec();
            if show_errors {
                record.push(snippet_cell(entry));
            }
            writer
                .write_record(&record)
                .context("Failed to write CSV row")?;
        }

        Self::finish(writer)
    }

    fn format_masked_keys(&self, masked: &[String]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(["API Key (masked)"])
            .context("Failed to write CSV headers")?;
        for key in masked {
            writer
                .write_record([key])
                .context("Failed to write CSV row")?;
        }
        Self::finish(writer)
    }
}
