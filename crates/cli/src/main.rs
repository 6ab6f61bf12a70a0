//! keyprobe - check api-tennis.com API keys from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build the validated configuration and install logging/metrics.
//! - Run the selected command and map the outcome to a structured exit code.
//!
//! Does NOT handle:
//! - Probe logic or response classification (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap env defaults.
//! - Logs and progress go to stderr; stdout carries only rendered results.

mod args;
mod cancellation;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod input;
mod progress;

use anyhow::Context;
use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use keyprobe_config::{Config, ConfigLoader};

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::InvalidConfig.as_i32());
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                ExitCode::GeneralError
            } else {
                ExitCode::Success
            };
            std::process::exit(code.as_i32());
        }
    };

    let mut tracing_config = keyprobe_client::TracingConfig::new();
    if let Some(ref endpoint) = cli.otlp_endpoint {
        tracing_config = tracing_config.with_otlp_endpoint(endpoint);
    }
    if let Some(ref name) = cli.otel_service_name {
        tracing_config = tracing_config.with_service_name(name);
    }
    let tracing_guard = match tracing_config.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize tracing: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let _metrics_exporter = match cli.metrics_bind.as_deref() {
        Some(bind_addr) => match keyprobe_client::MetricsExporter::install(bind_addr) {
            Ok(exporter) => Some(exporter),
            Err(e) => {
                eprintln!("Failed to start metrics exporter: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        },
        None => None,
    };

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    // Only `check` talks to the network; `mask` and `completions` work without a valid config.
    let needs_config = matches!(cli.command, args::Commands::Check { .. });
    let result = match needs_config.then(|| build_config(&cli)).transpose() {
        Ok(config) => run_command(cli, config, &cancel).await,
        Err(e) => Err(e),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    tracing_guard.shutdown();

    std::process::exit(exit_code.as_i32());
}

/// Merge defaults, `KEYPROBE_*` environment variables and CLI flags (highest priority).
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new()
        .from_env()
        .context("Failed to load configuration from environment")?;

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref method) = cli.method {
        loader = loader.with_method(method.clone());
    }
    if let Some(contract) = cli.contract {
        loader = loader.with_contract(contract);
    }
    if let Some(timeout) = cli.timeout {
        loader = loader.with_timeout_secs(timeout);
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    loader.build().context("Invalid configuration")
}
