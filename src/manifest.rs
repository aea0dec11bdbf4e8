//! The fixed set of shim modules shipped by the repository.
//!
//! These names must become importable after installation. The list mirrors
//! the top-level directories of the mylibs checkout; updating one without
//! the other breaks install verification.

/// Every top-level module the repository provides.
pub const MODULES: [&str; 13] = [
    "mybeautifulsoup",
    "mycolorama",
    "myfeedparser",
    "myhashlib",
    "mymatplotlib",
    "mynumpy",
    "mypandas",
    "mypsutil",
    "mypypdf",
    "mypytest",
    "myreportlab",
    "myrequests",
    "mytqdm",
];

/// Representative module used by remove to sanity-check uninstallation.
pub const CANARY_MODULE: &str = "mynumpy";

/// Test entry script at the repository root.
pub const TEST_ENTRY: &str = "test_libs.py";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canary_is_in_manifest() {
        assert!(MODULES.contains(&CANARY_MODULE));
    }

    #[test]
    fn module_names_are_identifiers() {
        // Names are spliced into `python -c "import <name>"`.
        for module in MODULES {
            assert!(module.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
            assert!(!module.is_empty());
        }
    }

    #[test]
    fn manifest_has_no_duplicates() {
        let mut names: Vec<&str> = MODULES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), MODULES.len());
    }
}
