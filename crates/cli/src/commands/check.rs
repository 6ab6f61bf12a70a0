//! `keyprobe check`: validate keys against the API.
//!
//! Responsibilities:
//! - Collect keys, run the batch with a progress bar, render the report.
//! - Decide the exit code from the report.
//!
//! Does NOT handle:
//! - Probe classification (see `keyprobe_client::endpoints`).
//!
//! Invariants:
//! - The output format is validated before any request is sent.
//! - A cancelled batch is still rendered before `Cancelled` is returned.

use anyhow::{Context, Result};
use keyprobe_client::{BatchRunner, KeyProbeClient, MetricsCollector};
use keyprobe_config::Config;
use std::path::PathBuf;
use tracing::info;

use crate::cancellation::{CancellationToken, Cancelled};
use crate::error::ExitCode;
use crate::formatters::{OutputFormat, get_formatter, output_result, summary_line};
use crate::input::collect_keys;
use crate::progress::KeyProgress;

/// Options for one `check` invocation.
pub struct CheckArgs {
    pub keys: Vec<String>,
    pub keys_file: Option<PathBuf>,
    pub show_errors: bool,
    pub output_format: String,
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
    pub metrics_enabled: bool,
}

pub async fn run(config: Config, args: CheckArgs, cancel: &CancellationToken) -> Result<ExitCode> {
    let format = OutputFormat::from_str(&args.output_format)?;
    let keys = collect_keys(args.keys, args.keys_file.as_deref())?;

    let metrics = if args.metrics_enabled {
        MetricsCollector::new()
    } else {
        MetricsCollector::disabled()
    };

    let client = KeyProbeClient::builder()
        .from_config(&config)
        .metrics(metrics.clone())
        .build()
        .context("Failed to build HTTP client")?;

    info!(
        base_url = %client.base_url(),
        method = client.method(),
        contract = %client.contract(),
        timeout_secs = config.timeout.as_secs_f64(),
        "Checking keys"
    );

    let runner = BatchRunner::new(&client, config.timeout).with_metrics(metrics);
    let mut progress = KeyProgress::new(!args.quiet, keys.len(), cancel.clone());

    let report = runner.run(&keys, &mut progress).await?;
    progress.finish();

    let output = get_formatter(format).format_report(&report, args.show_errors)?;
    output_result(&output, format, args.output_file.as_ref())?;

    // Table output on stdout already ends with the summary.
    if format != OutputFormat::Table || args.output_file.is_some() {
        eprintln!("{}", summary_line(&report));
    }

    if report.cancelled {
        return Err(Cancelled.into());
    }

    Ok(if report.all_ok() {
        ExitCode::Success
    } else {
        ExitCode::KeysFailed
    })
}
