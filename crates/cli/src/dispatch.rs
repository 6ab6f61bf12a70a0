//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - Only `check` requires a validated configuration.

use anyhow::{Context, Result};
use keyprobe_config::Config;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;
use crate::error::ExitCode;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(
    cli: Cli,
    config: Option<Config>,
    cancel_token: &CancellationToken,
) -> Result<ExitCode> {
    match cli.command {
        Commands::Check {
            keys,
            keys_file,
            show_errors,
        } => {
            let config = config.context("configuration was not loaded for 'check'")?;
            let args = commands::check::CheckArgs {
                keys,
                keys_file,
                show_errors,
                output_format: cli.output,
                output_file: cli.output_file,
                quiet: cli.quiet,
                metrics_enabled: cli.metrics_bind.is_some(),
            };
            commands::check::run(config, args, cancel_token).await
        }
        Commands::Mask { keys, keys_file } => {
            commands::mask::run(keys, keys_file, &cli.output, cli.output_file)?;
            Ok(ExitCode::Success)
        }
        Commands::Completions { shell } => {
            commands::completions::run(shell)?;
            Ok(ExitCode::Success)
        }
    }
}
