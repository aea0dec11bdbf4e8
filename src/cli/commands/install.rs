//! Install command implementation.
//!
//! Installation is a fixed sequence of checks, each a hard stop on
//! failure, followed by the registration write and an import verification
//! pass. The registration file is written before verification runs and is
//! left in place when verification fails; the failure is reported and the
//! exit code is non-zero, but nothing is rolled back.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SitelinkError};
use crate::interpreter::{site, ImportOutcome, Interpreter, MIN_VERSION};
use crate::registration::{self, WriteOutcome};
use crate::ui::UserInterface;
use crate::{manifest, platform};

use super::dispatcher::{Command, CommandResult};
use super::test::TestCommand;

const INSTALL_STEPS: usize = 7;

/// The install command implementation.
pub struct InstallCommand {
    repo_root: PathBuf,
    run_tests: bool,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(repo_root: &Path, run_tests: bool) -> Self {
        Self {
            repo_root: repo_root.to_path_buf(),
            run_tests,
        }
    }

    /// Get the repository root path.
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Installing mylibs");

        ui.step(1, INSTALL_STEPS, "Checking operating system");
        match platform::read_os_release() {
            Some(ref os) if os.is_supported() => {
                ui.detail(&format!("Detected {}", os.describe()));
            }
            other => {
                let name = other
                    .map(|os| os.describe().to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                return Err(SitelinkError::UnsupportedPlatform { os: name });
            }
        }

        ui.step(2, INSTALL_STEPS, "Locating Python interpreter");
        let py = Interpreter::discover()?;
        ui.detail(&format!("Using {} ({})", py.program(), py.raw_version()));

        ui.step(3, INSTALL_STEPS, "Checking Python version");
        if !py.meets_minimum() {
            return Err(SitelinkError::RuntimeTooOld {
                found: py.version().to_string(),
                minimum: MIN_VERSION.to_string(),
            });
        }

        ui.step(4, INSTALL_STEPS, "Checking privileges");
        if !platform::is_elevated() {
            return Err(SitelinkError::InsufficientPrivilege);
        }

        ui.step(5, INSTALL_STEPS, "Resolving site directory");
        let site_dir = site::resolve(&py)?;
        ui.detail(&format!("Site directory: {}", site_dir.display()));

        ui.step(6, INSTALL_STEPS, "Writing registration file");
        let repo_root = fs::canonicalize(&self.repo_root)?;
        match registration::write(&site_dir, &repo_root)? {
            WriteOutcome::Fresh => {}
            WriteOutcome::AlreadyInstalled => {
                ui.warning("Already installed (registration is up to date)");
            }
            WriteOutcome::Replaced { previous } => {
                ui.warning(&format!(
                    "Overwriting previous installation: {} -> {}",
                    previous.display(),
                    repo_root.display()
                ));
            }
        }

        ui.step(7, INSTALL_STEPS, "Verifying imports");
        verify_imports(&py, &manifest::MODULES, ui)?;

        ui.success(&format!(
            "Registered {} in {}",
            repo_root.display(),
            registration::registration_path(&site_dir).display()
        ));

        if self.run_tests {
            let test = TestCommand::new(&self.repo_root);
            return test.execute(ui);
        }

        Ok(CommandResult::success())
    }
}

/// Import every manifest module through the interpreter.
///
/// All imports must succeed; the first failure aborts with the
/// interpreter's error text.
fn verify_imports(
    py: &Interpreter,
    modules: &[&str],
    ui: &mut dyn UserInterface,
) -> Result<()> {
    let mut spinner = ui.start_spinner("Importing modules");

    for module in modules {
        spinner.set_message(&format!("Importing {}", module));
        match crate::interpreter::try_import(py, module) {
            Ok(ImportOutcome::Ok { .. }) => {}
            Ok(ImportOutcome::Failed { message }) => {
                spinner.finish_error(&format!("{} failed to import", module));
                return Err(SitelinkError::VerificationFailed {
                    module: module.to_string(),
                    message,
                });
            }
            Err(e) => {
                spinner.finish_error("Verification aborted");
                return Err(e.into());
            }
        }
    }

    spinner.finish_success(&format!("All {} modules import cleanly", modules.len()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn install_command_creation() {
        let cmd = InstallCommand::new(Path::new("/opt/mylibs"), true);
        assert_eq!(cmd.repo_root(), Path::new("/opt/mylibs"));
    }

    #[test]
    #[cfg(unix)]
    fn verify_imports_passes_with_clean_interpreter() {
        // `true` accepts any -c payload and exits 0.
        let py = Interpreter::with_program("true", MIN_VERSION);
        let mut ui = MockUI::new();

        assert!(verify_imports(&py, &["mynumpy", "mypandas"], &mut ui).is_ok());
        assert_eq!(ui.spinners().len(), 1);
    }

    #[test]
    #[cfg(unix)]
    fn verify_imports_surfaces_first_failure() {
        // `sh -c "import ..."` fails, standing in for a broken install.
        let py = Interpreter::with_program("sh", MIN_VERSION);
        let mut ui = MockUI::new();

        let err = verify_imports(&py, &["mynumpy"], &mut ui).unwrap_err();
        match err {
            SitelinkError::VerificationFailed { module, .. } => assert_eq!(module, "mynumpy"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn verify_imports_with_missing_interpreter_is_io_error() {
        let py = Interpreter::with_program("this-program-does-not-exist-12345", MIN_VERSION);
        let mut ui = MockUI::new();

        let err = verify_imports(&py, &["mynumpy"], &mut ui).unwrap_err();
        assert!(matches!(err, SitelinkError::Io(_)));
    }

    #[test]
    #[cfg(unix)]
    fn verify_imports_checks_every_module_before_success() {
        let py = Interpreter::with_program("true", MIN_VERSION);
        let mut ui = MockUI::new();

        verify_imports(&py, &manifest::MODULES, &mut ui).unwrap();
    }
}
