//! Check command implementation.
//!
//! Read-only status report: interpreter, site directory, registration
//! file, and per-library import availability. Missing libraries are
//! informational and never affect the exit code; only a missing
//! interpreter is fatal.

use crate::error::{Result, SitelinkError};
use crate::interpreter::{site, verify_all, ImportOutcome, Interpreter, MIN_VERSION};
use crate::ui::UserInterface;
use crate::{manifest, registration};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
#[derive(Default)]
pub struct CheckCommand;

impl CheckCommand {
    /// Create a new check command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("mylibs installation status");

        let py = Interpreter::discover()?;
        ui.message(&format!("Python: {} ({})", py.raw_version(), py.program()));
        if !py.meets_minimum() {
            ui.warning(&format!(
                "Python {} is below the supported minimum {}",
                py.version(),
                MIN_VERSION
            ));
        }

        match site::resolve(&py) {
            Ok(site_dir) => {
                ui.message(&format!("Site directory: {}", site_dir.display()));
                match registration::read(&site_dir)? {
                    Some(root) => ui.message(&format!("Registered: {}", root.display())),
                    None => ui.message("Not installed (no registration file)"),
                }
            }
            Err(SitelinkError::SitePathNotFound) => {
                ui.warning("No site directory found");
            }
            Err(e) => return Err(e),
        }

        ui.message("");
        ui.message("Libraries:");
        let reports = verify_all(&py, &manifest::MODULES)?;
        for report in &reports {
            match &report.outcome {
                ImportOutcome::Ok {
                    version: Some(version),
                } => ui.message(&format!("  {:<18} {}", report.module, version)),
                ImportOutcome::Ok { version: None } => {
                    ui.message(&format!("  {:<18} OK", report.module));
                }
                ImportOutcome::Failed { message } => {
                    ui.message(&format!("  {:<18} not available", report.module));
                    ui.detail(&format!("    {}", message));
                }
            }
        }

        let available = reports.iter().filter(|r| r.ok()).count();
        ui.message("");
        if available == reports.len() {
            ui.success(&format!("All {} libraries available", reports.len()));
        } else {
            ui.warning(&format!(
                "{} of {} libraries available",
                available,
                reports.len()
            ));
        }

        Ok(CommandResult::success())
    }
}
