//! Table formatter implementation.
//!
//! Renders tab-separated rows followed by the summary line.

use anyhow::Result;
use keyprobe_client::BatchReport;

use crate::formatters::Formatter;
use crate::formatters::common::{
    REPORT_COLUMNS, SNIPPET_COLUMN, entry_cells, snippet_cell, summary_line,
};

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_report(&self, report: &BatchReport, show_errors: bool) -> Result<String> {
        let mut output = String::new();

        output.push_str(&REPORT_COLUMNS.join("\t"));
        if show_errors {
            output.push('\t');
            output.push_str(SNIPPET_COLUMN);
        }
        output.push('\n');

        for entry in &report.entries {
            output.push_str(&entry_cells(entry).join("\t"));
            if show_errors {
                output.push('\t');
                // Keep one row per key.
                output.push_str(&snippet_cell(entry).replace(['\n', '\r', '\t'], " "));
            }
            output.push('\n');
        }

        output.push('\n');
        output.push_str(&summary_line(report));
        output.push('\n');

        Ok(output)
    }

    fn format_masked_keys(&self, masked: &[String]) -> Result<String> {
        let mut output = String::from("API Key (masked)\n");
        for key in masked {
            output.push_str(key);
            output.push('\n');
        }
        Ok(output)
    }
}
