//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, NonInteractiveUI, OutputMode, ProgressSpinner, SitelinkTheme, SpinnerHandle,
    UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: SitelinkTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            SitelinkTheme::new()
        } else {
            SitelinkTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            writeln!(self.term, "  {}", self.theme.dim.apply_to(msg)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn hint(&mut self, msg: &str) {
        eprintln!("  {}", self.theme.hint.apply_to(msg));
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
    }

    fn step(&mut self, current: usize, total: usize, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_step(current, total, msg)).ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.term.is_term() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI for the current stdout.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    if Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_creation() {
        let ui = TerminalUI::new(OutputMode::Normal);
        drop(ui);
    }

    #[test]
    fn terminal_ui_output_mode() {
        let ui = TerminalUI::new(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn create_ui_respects_mode() {
        let ui = create_ui(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
