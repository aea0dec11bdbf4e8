//! Site directory resolution.
//!
//! The interpreter's dist-packages directory is found by trying an ordered
//! list of candidates and taking the first that exists on disk:
//!
//! 1. whatever `site.getsitepackages()` reports,
//! 2. a fixed list of conventional Debian locations,
//! 3. a path derived from the interpreter's major/minor version.

use std::path::PathBuf;

use crate::error::{Result, SitelinkError};

use super::{Interpreter, PyVersion};

/// Conventional Debian locations, checked when the interpreter query fails
/// or points at a directory that does not exist.
const CONVENTIONAL_PATHS: [&str; 7] = [
    "/usr/lib/python3/dist-packages",
    "/usr/local/lib/python3/dist-packages",
    "/usr/lib/python3.12/dist-packages",
    "/usr/lib/python3.11/dist-packages",
    "/usr/lib/python3.10/dist-packages",
    "/usr/lib/python3.9/dist-packages",
    "/usr/lib/python3.8/dist-packages",
];

/// Resolve the interpreter's site directory.
///
/// Read-only: the only filesystem access is the existence probe.
pub fn resolve(py: &Interpreter) -> Result<PathBuf> {
    let queried = query_site_packages(py);
    tracing::debug!(?queried, "site-packages query");

    first_existing(candidate_paths(queried, py.version())).ok_or(SitelinkError::SitePathNotFound)
}

/// Ask the interpreter for its configured site-packages directories.
///
/// Prefers a dist-packages entry (Debian installs third-party modules
/// there); falls back to the first reported directory.
fn query_site_packages(py: &Interpreter) -> Option<PathBuf> {
    let code = "import site; print('\\n'.join(site.getsitepackages()))";
    let capture = py.eval(code).ok()?;
    if !capture.success {
        return None;
    }

    let lines: Vec<&str> = capture
        .stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    lines
        .iter()
        .find(|line| line.contains("dist-packages"))
        .or_else(|| lines.first())
        .map(PathBuf::from)
}

/// All candidate directories, in resolution order.
fn candidate_paths(queried: Option<PathBuf>, version: PyVersion) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(path) = queried {
        candidates.push(path);
    }
    candidates.extend(CONVENTIONAL_PATHS.iter().map(PathBuf::from));
    candidates.push(derived_path(version));
    candidates
}

/// Directory implied by the interpreter's major/minor version.
fn derived_path(version: PyVersion) -> PathBuf {
    PathBuf::from(format!(
        "/usr/lib/python{}.{}/dist-packages",
        version.major, version.minor
    ))
}

/// First candidate that exists as a directory.
fn first_existing(candidates: Vec<PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|path| path.is_dir())
}
