//! Registration file lifecycle.
//!
//! Installation state is exactly one file, `mylibs.pth`, inside the
//! resolved site directory. Its content is a single line: the absolute
//! repository root. The file is overwritten, never appended, so the most
//! recent install wins.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SitelinkError};

/// Fixed name of the path-registration file.
pub const REGISTRATION_FILE: &str = "mylibs.pth";

/// What happened when the registration file was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// No prior registration existed.
    Fresh,

    /// A registration with the same content was already present.
    AlreadyInstalled,

    /// A registration pointing elsewhere was overwritten.
    Replaced { previous: PathBuf },
}

/// Full path of the registration file inside a site directory.
pub fn registration_path(site: &Path) -> PathBuf {
    site.join(REGISTRATION_FILE)
}

/// Read the registered repository root, if any.
pub fn read(site: &Path) -> std::io::Result<Option<PathBuf>> {
    let path = registration_path(site);
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let line = content.lines().next().unwrap_or("").trim();
    Ok((!line.is_empty()).then(|| PathBuf::from(line)))
}

/// Write the registration file, overwriting any previous registration.
///
/// The file is left world-readable (0644) so every interpreter session can
/// pick it up. Confirmed present after the write.
pub fn write(site: &Path, repo_root: &Path) -> Result<WriteOutcome> {
    let path = registration_path(site);
    let previous = read(site)?;

    let outcome = match previous {
        Some(prev) if prev.as_path() == repo_root => WriteOutcome::AlreadyInstalled,
        Some(prev) => WriteOutcome::Replaced { previous: prev },
        None => WriteOutcome::Fresh,
    };

    fs::write(&path, format!("{}\n", repo_root.display())).map_err(|e| {
        SitelinkError::WriteFailed {
            path: path.clone(),
            message: e.to_string(),
        }
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).map_err(|e| {
            SitelinkError::WriteFailed {
                path: path.clone(),
                message: e.to_string(),
            }
        })?;
    }

    if !path.exists() {
        return Err(SitelinkError::WriteFailed {
            path,
            message: "file missing after write".to_string(),
        });
    }

    tracing::debug!(path = %path.display(), ?outcome, "registration written");
    Ok(outcome)
}

/// Delete the registration file. Returns whether one existed.
///
/// Never touches the registered directory itself.
pub fn delete(site: &Path) -> Result<bool> {
    let path = registration_path(site);
    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(&path)?;
    Ok(true)
}
