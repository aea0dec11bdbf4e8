//! Import verification through the interpreter.

use super::Interpreter;

/// Outcome of importing a single module.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportOutcome {
    /// Import succeeded; version attribute when the module exposes one.
    Ok { version: Option<String> },

    /// Import failed with the interpreter's error text.
    Failed { message: String },
}

/// Per-module verification report.
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub module: String,
    pub outcome: ImportOutcome,
}

impl ImportReport {
    /// Whether the module imported.
    pub fn ok(&self) -> bool {
        matches!(self.outcome, ImportOutcome::Ok { .. })
    }
}

/// Try to import one module, reading its version attribute when present.
///
/// `Err` means the interpreter itself could not be invoked; an import
/// failure is an `Ok(ImportOutcome::Failed)`.
pub fn try_import(py: &Interpreter, module: &str) -> std::io::Result<ImportOutcome> {
    let code = format!(
        "import {module}; print(getattr({module}, '__version__', ''))",
        module = module
    );
    let capture = py.eval(&code)?;

    if capture.success {
        let version = capture.stdout.trim();
        Ok(ImportOutcome::Ok {
            version: (!version.is_empty()).then(|| version.to_string()),
        })
    } else {
        Ok(ImportOutcome::Failed {
            message: import_error(&capture.stderr),
        })
    }
}

/// Import every module in order, collecting per-module reports.
pub fn verify_all(py: &Interpreter, modules: &[&str]) -> std::io::Result<Vec<ImportReport>> {
    modules
        .iter()
        .map(|module| {
            Ok(ImportReport {
                module: module.to_string(),
                outcome: try_import(py, module)?,
            })
        })
        .collect()
}

/// Last non-empty line of the interpreter's traceback, e.g.
/// `ModuleNotFoundError: No module named 'mynumpy'`.
fn import_error(stderr: &str) -> String {
    stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("import failed")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{PyVersion, MIN_VERSION};

    fn fake(program: &str) -> Interpreter {
        Interpreter::with_program(program, MIN_VERSION)
    }

    #[test]
    fn import_error_takes_last_traceback_line() {
        let stderr = "Traceback (most recent call last):\n  File \"<string>\", line 1, in <module>\nModuleNotFoundError: No module named 'mynumpy'\n";
        assert_eq!(
            import_error(stderr),
            "ModuleNotFoundError: No module named 'mynumpy'"
        );
    }

    #[test]
    fn import_error_empty_stderr_has_fallback() {
        assert_eq!(import_error(""), "import failed");
        assert_eq!(import_error("\n  \n"), "import failed");
    }

    #[test]
    #[cfg(unix)]
    fn silent_success_yields_no_version() {
        // `true` exits 0 with no output, like a module without __version__.
        let outcome = try_import(&fake("true"), "mynumpy").unwrap();
        assert_eq!(outcome, ImportOutcome::Ok { version: None });
    }

    #[test]
    #[cfg(unix)]
    fn failing_interpreter_reports_failed_outcome() {
        // `sh -c "import mynumpy; ..."` cannot run `import` and exits non-zero.
        let outcome = try_import(&fake("sh"), "mynumpy").unwrap();
        assert!(matches!(outcome, ImportOutcome::Failed { .. }));
    }

    #[test]
    fn missing_interpreter_is_io_error() {
        let py = Interpreter::with_program(
            "this-program-does-not-exist-12345",
            PyVersion {
                major: 3,
                minor: 8,
                patch: 0,
            },
        );
        assert!(try_import(&py, "mynumpy").is_err());
    }

    #[test]
    #[cfg(unix)]
    fn verify_all_reports_every_module() {
        let reports = verify_all(&fake("true"), &["mynumpy", "mypandas"]).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(ImportReport::ok));
        assert_eq!(reports[0].module, "mynumpy");
    }

    #[test]
    #[cfg(unix)]
    fn verify_all_keeps_failures_in_place() {
        let reports = verify_all(&fake("sh"), &["mynumpy"]).unwrap();
        assert_eq!(reports.len(), 1);
        assert!(!reports[0].ok());
    }
}
