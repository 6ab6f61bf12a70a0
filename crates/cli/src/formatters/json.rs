//! JSON formatter implementation.
//!
//! Formats reports as pretty-printed JSON, including counts.

use anyhow::Result;
use keyprobe_client::BatchReport;
use serde::Serialize;

use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

#[derive(Serialize)]
struct ReportOutput<'a> {
    ok_count: usize,
    fail_count: usize,
    #[serde(flatten)]
    report: &'a BatchReport,
}

#[derive(Serialize)]
struct MaskedKeyOutput<'a> {
    masked_key: &'a str,
}

impl Formatter for JsonFormatter {
    fn format_report(&self, report: &BatchReport, _show_errors: bool) -> Result<String> {
        // JSON always carries the full result, snippets included.
        let output = ReportOutput {
            ok_count: report.ok_count(),
            fail_count: report.fail_count(),
            report,
        };
        Ok(format!("{}\n", serde_json::to_string_pretty(&output)?))
    }

    fn format_masked_keys(&self, masked: &[String]) -> Result<String> {
        let rows: Vec<MaskedKeyOutput<'_>> = masked
            .iter()
            .map(|k| MaskedKeyOutput { masked_key: k })
            .collect();
        Ok(format!("{}\n", serde_json::to_string_pretty(&rows)?))
    }
}
