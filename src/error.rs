//! Error types for Sitelink operations.
//!
//! This module defines [`SitelinkError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `SitelinkError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `SitelinkError::Other`) for unexpected errors
//! - Every error is terminal for the invocation; nothing is retried

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Sitelink operations.
#[derive(Debug, Error)]
pub enum SitelinkError {
    /// The host is not a Debian-family system.
    #[error("Unsupported platform: {os}")]
    UnsupportedPlatform { os: String },

    /// No Python interpreter was found on PATH.
    #[error("No Python interpreter found on PATH (tried python3, python)")]
    RuntimeNotFound,

    /// The interpreter is older than the supported minimum.
    #[error("Python {found} is too old (need {minimum} or newer)")]
    RuntimeTooOld { found: String, minimum: String },

    /// Install/remove invoked without root privileges.
    #[error("This operation requires root privileges")]
    InsufficientPrivilege,

    /// No dist-packages directory exists at any known location.
    #[error("Could not locate a site directory for the interpreter")]
    SitePathNotFound,

    /// The registration file could not be written or confirmed.
    #[error("Failed to write registration file {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },

    /// A manifest module did not import after registration.
    #[error("Import verification failed for '{module}': {message}")]
    VerificationFailed { module: String, message: String },

    /// The test entry script is missing from the repository.
    #[error("Test entry not found: {path}")]
    TestEntryNotFound { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SitelinkError {
    /// An actionable follow-up line shown after the error message.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::UnsupportedPlatform { .. } => Some(
                "Only Debian-family systems are supported. Add the repository to \
                 PYTHONPATH manually: export PYTHONPATH=\"$PYTHONPATH:/path/to/mylibs\"",
            ),
            Self::RuntimeNotFound => Some("Install Python 3 first: sudo apt install python3"),
            Self::InsufficientPrivilege => Some("Re-run with sudo"),
            Self::SitePathNotFound => Some(
                "Checked site.getsitepackages() and the usual dist-packages locations",
            ),
            _ => None,
        }
    }
}

/// Result type alias for Sitelink operations.
pub type Result<T> = std::result::Result<T, SitelinkError>;
