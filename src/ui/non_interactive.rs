//! Non-interactive UI for piped/headless output.

use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive output.
///
/// Plain text, no spinner animation: spinner milestones are printed as
/// ordinary status lines so logs stay readable.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            println!("  {}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn hint(&mut self, msg: &str) {
        eprintln!("  {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}\n", title);
    }

    fn step(&mut self, current: usize, total: usize, msg: &str) {
        println!("[{}/{}] {}", current, total, msg);
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(LogSpinner {
            started: message.to_string(),
        })
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner stand-in that logs milestones as plain lines.
struct LogSpinner {
    started: String,
}

impl SpinnerHandle for LogSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("✗ {} (while: {})", msg, self.started);
    }
}
