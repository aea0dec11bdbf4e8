//! Progress spinner for the import verification pass.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::SitelinkTheme;
use super::{should_use_colors, SpinnerHandle};

/// A progress spinner for long-running operations.
pub struct ProgressSpinner {
    bar: ProgressBar,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// Create a spinner that doesn't show (for non-TTY output).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    fn theme() -> SitelinkTheme {
        if should_use_colors() {
            SitelinkTheme::new()
        } else {
            SitelinkTheme::plain()
        }
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.bar
            .set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
        self.bar
            .finish_with_message(Self::theme().format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        self.bar
            .set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
        self.bar.finish_with_message(Self::theme().format_error(msg));
    }
}
