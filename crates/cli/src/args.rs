//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read `KEYPROBE_*` config variables; `ConfigLoader::from_env` does,
//!   so flags given here always win over the environment.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use keyprobe_config::ResponseContract;
use keyprobe_config::constants::DEFAULT_EXPORT_FILE_NAME;
use std::path::PathBuf;

const AFTER_HELP: &str = "Examples:
  keyprobe check KEY1 KEY2
  keyprobe check --keys-file keys.txt -o csv --output-file results.csv
  cat keys.txt | keyprobe check --show-errors
  keyprobe mask --keys-file keys.txt

Environment:
  KEYPROBE_BASE_URL, KEYPROBE_METHOD, KEYPROBE_CONTRACT,
  KEYPROBE_TIMEOUT, KEYPROBE_SKIP_VERIFY, DOTENV_DISABLED

Exit codes:
  0 all keys ok, 1 error, 2 no keys given, 3 at least one key failed,
  4 invalid configuration, 130 interrupted
";

#[derive(Parser)]
#[command(name = "keyprobe")]
#[command(about = "Check api-tennis.com API keys from the command line", long_about = None)]
#[command(version)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Base URL of the API (default: https://api-tennis.com) [env: KEYPROBE_BASE_URL]
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Query method used for the probe request (default: get_countries) [env: KEYPROBE_METHOD]
    #[arg(long, global = true)]
    pub method: Option<String>,

    /// Response rule that decides success: success (success == 1) or result ('result' key present) [env: KEYPROBE_CONTRACT]
    #[arg(long, global = true, value_name = "CONTRACT")]
    pub contract: Option<ResponseContract>,

    /// Per-request timeout in seconds, 1 to 60 (default: 10) [env: KEYPROBE_TIMEOUT]
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<f64>,

    /// Skip TLS certificate verification [env: KEYPROBE_SKIP_VERIFY]
    #[arg(long, global = true)]
    pub skip_verify: bool,

    /// Output format (table, csv, json)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    #[arg(long, global = true, value_name = "FILE", help = output_file_help())]
    pub output_file: Option<PathBuf>,

    /// Suppress progress output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Serve Prometheus metrics on this address (e.g., 127.0.0.1:9090)
    #[arg(long, global = true, env = "KEYPROBE_METRICS_BIND", value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    /// Export traces to this OTLP endpoint (e.g., http://localhost:4317)
    #[arg(long, global = true, env = "KEYPROBE_OTLP_ENDPOINT", value_name = "URL")]
    pub otlp_endpoint: Option<String>,

    /// Service name reported with exported traces
    #[arg(long, global = true, env = "KEYPROBE_OTEL_SERVICE_NAME", value_name = "NAME")]
    pub otel_service_name: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

fn output_file_help() -> String {
    format!(
        "Write results to a file instead of stdout (e.g., {})",
        DEFAULT_EXPORT_FILE_NAME
    )
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate API keys against the API, one request per key
    Check {
        /// Keys to check. Also read from --keys-file or piped stdin.
        #[arg(value_name = "KEY")]
        keys: Vec<String>,

        /// File with one key per line ('-' reads stdin)
        #[arg(short = 'f', long, value_name = "FILE")]
        keys_file: Option<PathBuf>,

        /// Show the response snippet for each failed key
        #[arg(long)]
        show_errors: bool,
    },

    /// Print masked forms of keys without contacting the API
    Mask {
        #[arg(value_name = "KEY")]
        keys: Vec<String>,

        /// File with one key per line ('-' reads stdin)
        #[arg(short = 'f', long, value_name = "FILE")]
        keys_file: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
