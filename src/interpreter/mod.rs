//! Python interpreter discovery and queries.

pub mod imports;
pub mod probe;
pub mod site;

pub use imports::{try_import, verify_all, ImportOutcome, ImportReport};
pub use probe::{Interpreter, PyVersion, INTERPRETER_CANDIDATES, MIN_VERSION};
