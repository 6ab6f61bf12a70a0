//! `keyprobe mask`: show masked forms of keys without any network access.

use anyhow::Result;
use keyprobe_client::{BatchError, mask_key};
use secrecy::ExposeSecret;
use std::path::PathBuf;

use crate::formatters::{OutputFormat, get_formatter, output_result};
use crate::input::collect_keys;

pub fn run(
    keys: Vec<String>,
    keys_file: Option<PathBuf>,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let keys = collect_keys(keys, keys_file.as_deref())?;
    if keys.is_empty() {
        return Err(BatchError::EmptyInput.into());
    }

    let masked: Vec<String> = keys.iter().map(|k| mask_key(k.expose_secret())).collect();

    let output = get_formatter(format).format_masked_keys(&masked)?;
    output_result(&output, format, output_file.as_ref())
}
