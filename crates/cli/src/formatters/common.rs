//! Common utilities for formatters.
//!
//! Responsibilities:
//! - Shared column set and per-entry cell values for table and CSV.
//! - The `<ok> ok / <failed> failed` summary line.
//! - Atomic file writing.

use anyhow::{Context, Result};
use keyprobe_client::{BatchEntry, BatchReport};

/// Default string representation for missing values in table and CSV output.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

/// Column headers shared by the table and CSV formatters.
pub const REPORT_COLUMNS: [&str; 5] = ["API Key (masked)", "Works", "HTTP Status", "Time (s)", "Detail"];

/// Extra column added when failure snippets are requested.
pub const SNIPPET_COLUMN: &str = "Error Snippet";

/// Cell values for one entry, in `REPORT_COLUMNS` order.
pub fn entry_cells(entry: &BatchEntry) -> [String; 5] {
    let result = &entry.result;
    [
        entry.masked_key.clone(),
        if result.ok { "yes" } else { "no" }.to_string(),
        result
            .status_code
            .map(|s| s.to_string())
            .unwrap_or_else(|| DEFAULT_MISSING_VALUE.to_string()),
        format!("{:.3}", result.elapsed_seconds()),
        result.detail(),
    ]
}

/// Failure snippet cell; empty for passing keys and failures without a body.
pub fn snippet_cell(entry: &BatchEntry) -> String {
    entry.result.raw_error_snippet.clone().unwrap_or_default()
}

/// `"<ok> ok / <failed> failed"`, with a note when the batch was cut short.
pub fn summary_line(report: &BatchReport) -> String {
    let mut line = format!("{} ok / {} failed", report.ok_count(), report.fail_count());
    if report.cancelled {
        line.push_str(&format!(
            " ({} of {} keys not checked)",
            report.total_requested - report.len(),
            report.total_requested
        ));
    }
    line
}

/// Write formatted output to a file or stdout.
pub fn output_result(
    output: &str,
    format: crate::formatters::OutputFormat,
    output_file: Option<&std::path::PathBuf>,
) -> Result<()> {
    if let Some(path) = output_file {
        write_to_file(output, path)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        eprintln!(
            "Results written to {} ({:?} format)",
            path.display(),
            format
        );
    } else {
        print!("{}", output);
    }
    Ok(())
}

/// Write formatted output to a file atomically.
///
/// Creates parent directories if needed, writes to a temp file then renames.
pub fn write_to_file(content: &str, path: &std::path::Path) -> Result<()> {
    use std::fs;
    use std::io::Write;
    use tempfile::NamedTempFile;

    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => std::path::Path::new("."),
    };

    fs::create_dir_all(parent_dir)
        .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temp file")?;
    temp_file.flush().context("Failed to flush temp file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
