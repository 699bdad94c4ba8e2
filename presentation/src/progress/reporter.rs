//! Spinner shown while a backend call is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A spinner on stderr that disappears when the answer arrives
pub struct DispatchSpinner {
    bar: ProgressBar,
}

impl DispatchSpinner {
    /// Start a spinner, or a hidden one when `visible` is false
    pub fn start(visible: bool, message: &str) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new_spinner();
            bar.set_style(Self::spinner_style());
            bar.set_message(message.to_string());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        } else {
            ProgressBar::hidden()
        };
        Self { bar }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
