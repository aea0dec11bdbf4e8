//! Interpreter discovery and version probing.

use std::fmt;

use crate::error::{Result, SitelinkError};
use crate::process::{self, Capture};

/// Candidate executable names, in priority order.
pub const INTERPRETER_CANDIDATES: [&str; 2] = ["python3", "python"];

/// Minimum interpreter version the registrar supports.
pub const MIN_VERSION: PyVersion = PyVersion {
    major: 3,
    minor: 8,
    patch: 0,
};

/// A parsed interpreter version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PyVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl fmt::Display for PyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// A discovered Python interpreter.
///
/// Created once per handler that needs it; immutable thereafter.
#[derive(Debug, Clone)]
pub struct Interpreter {
    program: String,
    version: PyVersion,
    raw_version: String,
}

impl Interpreter {
    /// Probe PATH for a usable interpreter.
    ///
    /// The first candidate that runs and reports a parsable version wins.
    pub fn discover() -> Result<Self> {
        for candidate in INTERPRETER_CANDIDATES {
            let Ok(capture) = process::capture(candidate, &["--version"]) else {
                tracing::debug!("{} not on PATH", candidate);
                continue;
            };
            if !capture.success {
                continue;
            }

            // Python 3.3 and earlier printed the version banner to stderr.
            let banner = if capture.stdout.trim().is_empty() {
                capture.stderr.trim()
            } else {
                capture.stdout.trim()
            };

            if let Some(version) = parse_version(banner) {
                tracing::debug!("found {} ({})", candidate, version);
                return Ok(Self {
                    program: candidate.to_string(),
                    version,
                    raw_version: banner.to_string(),
                });
            }
        }

        Err(SitelinkError::RuntimeNotFound)
    }

    /// Build a handle around a known program and version.
    pub fn with_program(program: &str, version: PyVersion) -> Self {
        Self {
            program: program.to_string(),
            version,
            raw_version: version.to_string(),
        }
    }

    /// The executable name or path this handle invokes.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The parsed interpreter version.
    pub fn version(&self) -> PyVersion {
        self.version
    }

    /// The version banner as the interpreter reported it.
    pub fn raw_version(&self) -> &str {
        &self.raw_version
    }

    /// Whether the interpreter meets the supported minimum version.
    pub fn meets_minimum(&self) -> bool {
        self.version >= MIN_VERSION
    }

    /// Run a one-line program through `-c`, capturing output.
    pub fn eval(&self, code: &str) -> std::io::Result<Capture> {
        process::capture(&self.program, &["-c", code])
    }
}

/// Extract a version triple from a banner like "Python 3.10.12".
fn parse_version(banner: &str) -> Option<PyVersion> {
    let re = regex::Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").ok()?;
    let caps = re.captures(banner)?;

    Some(PyVersion {
        major: caps.get(1)?.as_str().parse().ok()?,
        minor: caps.get(2)?.as_str().parse().ok()?,
        patch: caps
            .get(3)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_version_full_triple() {
        let version = parse_version("Python 3.10.12").unwrap();
        assert_eq!(
            version,
            PyVersion {
                major: 3,
                minor: 10,
                patch: 12
            }
        );
    }

    #[test]
    fn parse_version_without_patch() {
        let version = parse_version("Python 3.8").unwrap();
        assert_eq!(version.patch, 0);
    }

    #[test]
    fn parse_version_no_match() {
        assert!(parse_version("no digits here").is_none());
    }

    #[test]
    fn version_display_round_trips() {
        let version = PyVersion {
            major: 3,
            minor: 8,
            patch: 0,
        };
        assert_eq!(version.to_string(), "3.8.0");
    }

    #[test]
    fn version_ordering_is_numeric() {
        // 3.10 must sort after 3.8, not before (string comparison would fail)
        let old = parse_version("Python 3.8.19").unwrap();
        let new = parse_version("Python 3.10.1").unwrap();
        assert!(new > old);
    }

    #[test]
    fn minimum_version_boundary() {
        let at_floor = Interpreter::with_program(
            "python3",
            PyVersion {
                major: 3,
                minor: 8,
                patch: 0,
            },
        );
        let below = Interpreter::with_program(
            "python3",
            PyVersion {
                major: 3,
                minor: 7,
                patch: 9,
            },
        );
        assert!(at_floor.meets_minimum());
        assert!(!below.meets_minimum());
    }

    #[test]
    fn candidates_prefer_python3() {
        assert_eq!(INTERPRETER_CANDIDATES[0], "python3");
    }

    #[test]
    #[cfg(unix)]
    fn eval_runs_through_dash_c() {
        // `true` ignores its arguments and exits 0; enough to exercise the plumbing.
        let py = Interpreter::with_program("true", MIN_VERSION);
        let capture = py.eval("print('hi')").unwrap();
        assert!(capture.success);
    }
}
