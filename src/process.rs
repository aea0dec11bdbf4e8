//! Blocking subprocess invocation.
//!
//! Every external invocation the registrar makes (version query, import
//! verification, test run) goes through here. Calls block until the child
//! exits; there is no timeout.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

/// Captured result of a finished subprocess.
#[derive(Debug, Clone)]
pub struct Capture {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether the process exited with code 0.
    pub success: bool,
}

/// Run a program with arguments, capturing stdout and stderr.
///
/// Returns `Err` only when the process cannot be spawned; a non-zero exit
/// is reported through [`Capture::success`].
pub fn capture<P: AsRef<OsStr>>(program: P, args: &[&str]) -> std::io::Result<Capture> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()?;

    Ok(Capture {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
    })
}

/// Run a program with inherited stdio, streaming its output to the terminal.
///
/// Used for the test run, whose output belongs to the user. Returns the
/// child's exit code (None if killed by signal); `Err` only when the
/// process cannot be spawned.
pub fn passthrough<P: AsRef<OsStr>>(
    program: P,
    args: &[&str],
    cwd: &Path,
) -> std::io::Result<Option<i32>> {
    let status = Command::new(program).args(args).current_dir(cwd).status()?;
    Ok(status.code())
}
