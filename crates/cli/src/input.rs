//! Key input collection.
//!
//! Responsibilities:
//! - Gather keys from positional arguments, a keys file, or stdin.
//! - Wrap every key in `SecretString` as soon as it is read.
//!
//! Does NOT handle:
//! - Rejecting an empty key list (the batch runner reports `EmptyInput`).
//!
//! Invariants:
//! - Keys are trimmed; blank lines are dropped; input order is preserved.
//! - Stdin is read implicitly only when it is not a terminal and no other source was given.

use anyhow::{Context, Result};
use keyprobe_client::parse_keys;
use secrecy::SecretString;
use std::io::{IsTerminal, Read};
use std::path::Path;

/// Where keys are read from when `--keys-file -` is given.
const STDIN_PATH: &str = "-";

/// Collect keys from every configured source.
///
/// File (or stdin) keys come first, followed by positional keys.
pub fn collect_keys(args: Vec<String>, keys_file: Option<&Path>) -> Result<Vec<SecretString>> {
    let mut keys = Vec::new();

    match keys_file {
        Some(path) if path.as_os_str() == STDIN_PATH => {
            keys.extend(parse_keys(&read_stdin()?));
        }
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read keys file: {}", path.display()))?;
            keys.extend(parse_keys(&text));
        }
        None if args.is_empty() && !std::io::stdin().is_terminal() => {
            keys.extend(parse_keys(&read_stdin()?));
        }
        None => {}
    }

    for arg in args {
        keys.extend(parse_keys(&arg));
    }

    Ok(keys)
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read keys from stdin")?;
    Ok(text)
}
