//! Sitelink - registers the mylibs learning libraries with the system Python.
//!
//! The mylibs repository ships minimal, readable re-implementations of
//! common Python libraries (mynumpy, mypandas, myrequests, ...). Sitelink
//! makes them importable system-wide: it resolves the interpreter's
//! dist-packages directory, writes a one-line `mylibs.pth` file pointing
//! at the repository, and verifies that every shipped module imports.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and command implementations
//! - [`error`] - Error types and result alias
//! - [`interpreter`] - Python discovery, site resolution, import checks
//! - [`manifest`] - The fixed list of shipped module names
//! - [`platform`] - OS family and privilege checks
//! - [`process`] - Blocking subprocess invocation
//! - [`registration`] - Registration file lifecycle
//! - [`ui`] - Terminal output, themes, and the test mock
//!
//! # Example
//!
//! ```
//! use sitelink::registration;
//! use tempfile::TempDir;
//!
//! // Register a repository inside a site directory
//! let site = TempDir::new().unwrap();
//! registration::write(site.path(), std::path::Path::new("/opt/mylibs")).unwrap();
//! assert_eq!(
//!     registration::read(site.path()).unwrap(),
//!     Some(std::path::PathBuf::from("/opt/mylibs"))
//! );
//! ```

pub mod cli;
pub mod error;
pub mod interpreter;
pub mod manifest;
pub mod platform;
pub mod process;
pub mod registration;
pub mod ui;

pub use error::{Result, SitelinkError};
