//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for piped/headless output
//! - [`MockUI`] for assertions in tests
//!
//! There are no prompts: the registrar never asks questions, it only
//! reports. All state the handlers need (theme, output mode) lives inside
//! the `UserInterface` value passed to them.

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, SitelinkTheme};

/// Trait for user-facing output.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display an extra diagnostic line, shown only in verbose mode.
    fn detail(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a non-fatal warning.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display a contextual hint following an error or report.
    fn hint(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Announce a numbered step, e.g. "[2/7] Checking Python version".
    fn step(&mut self, current: usize, total: usize, msg: &str);

    /// Start a spinner for a long-running operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Check if attached to an interactive terminal.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}
