//! Remove command implementation.
//!
//! Deletes at most one file (the registration file) and never touches the
//! registered directory itself. Afterwards a single canary import checks
//! that the modules actually stopped resolving; a still-importable canary
//! is a warning, not a failure, since the directory may be reachable
//! through PYTHONPATH or another registration.

use crate::error::{Result, SitelinkError};
use crate::interpreter::{site, try_import, ImportOutcome, Interpreter};
use crate::ui::UserInterface;
use crate::{manifest, platform, registration};

use super::dispatcher::{Command, CommandResult};

/// The remove command implementation.
#[derive(Default)]
pub struct RemoveCommand;

impl RemoveCommand {
    /// Create a new remove command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for RemoveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Removing mylibs registration");

        if !platform::is_elevated() {
            return Err(SitelinkError::InsufficientPrivilege);
        }

        let py = Interpreter::discover()?;
        let site_dir = site::resolve(&py)?;

        if registration::delete(&site_dir)? {
            ui.success(&format!(
                "Removed {}",
                registration::registration_path(&site_dir).display()
            ));
        } else {
            ui.warning("Not installed (no registration file found)");
        }

        match try_import(&py, manifest::CANARY_MODULE)? {
            ImportOutcome::Ok { .. } => {
                ui.warning(&format!(
                    "'{}' is still importable; removal may be incomplete",
                    manifest::CANARY_MODULE
                ));
            }
            ImportOutcome::Failed { .. } => {
                ui.detail(&format!(
                    "'{}' is no longer importable",
                    manifest::CANARY_MODULE
                ));
            }
        }

        Ok(CommandResult::success())
    }
}
