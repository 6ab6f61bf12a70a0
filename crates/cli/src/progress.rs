//! Progress indicator for key batches.
//!
//! Responsibilities:
//! - Show a `completed/total` bar while keys are being checked.
//! - Ensure ALL progress output is written to STDERR (never stdout), so
//!   machine-readable output (csv/json) is not contaminated.
//! - Surface Ctrl+C to the batch runner through `is_cancelled`.
//!
//! Non-responsibilities:
//! - Printing results; stdout remains reserved for results.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use keyprobe_client::ProgressObserver;
use std::time::Duration;

use crate::cancellation::CancellationToken;

const BAR_TEMPLATE: &str = "{spinner} Checking {msg} [{bar:40.cyan/blue}] {pos}/{len}";

/// Batch progress bar; a no-op when disabled (`--quiet`).
pub(crate) struct KeyProgress {
    pb: Option<ProgressBar>,
    cancel: CancellationToken,
}

impl KeyProgress {
    pub(crate) fn new(enabled: bool, total: usize, cancel: CancellationToken) -> Self {
        if !enabled {
            return Self { pb: None, cancel };
        }

        let style = ProgressStyle::with_template(BAR_TEMPLATE)
            .map(|s| s.progress_chars("=>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());

        let pb = ProgressBar::new(total as u64);
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            pb: Some(pb),
            cancel,
        }
    }

    /// Finish the bar and clear it from the terminal.
    pub(crate) fn finish(&self) {
        if let Some(pb) = &self.pb {
            pb.finish_and_clear();
        }
    }
}

impl ProgressObserver for KeyProgress {
    fn on_key_started(&mut self, _index: usize, masked_key: &str) {
        if let Some(pb) = &self.pb {
            pb.set_message(masked_key.to_string());
        }
    }

    fn on_progress(&mut self, completed: usize, total: usize) {
        if let Some(pb) = &self.pb {
            pb.set_length(total as u64);
            pb.set_position(completed as u64);
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for KeyProgress {
    fn drop(&mut self) {
        if let Some(pb) = &self.pb
            && !pb.is_finished()
        {
            pb.finish_and_clear();
        }
    }
}
