//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing operations
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing the parsed CLI action

use std::path::{Path, PathBuf};

use crate::cli::args::{Action, Cli};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches the parsed CLI action to its implementation.
pub struct CommandDispatcher {
    repo_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given repository root.
    pub fn new(repo_root: PathBuf) -> Self {
        Self { repo_root }
    }

    /// Get the repository root path.
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// Dispatch and execute the selected action.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match cli.action() {
            Action::Install { run_tests } => {
                let cmd = super::install::InstallCommand::new(&self.repo_root, run_tests);
                cmd.execute(ui)
            }
            Action::Remove => {
                let cmd = super::remove::RemoveCommand::new();
                cmd.execute(ui)
            }
            Action::Check => {
                let cmd = super::check::CheckCommand::new();
                cmd.execute(ui)
            }
        }
    }
}
