//! CLI argument definitions.
//!
//! The registrar keeps the original flag-style surface: one binary, a
//! handful of mutually exclusive mode flags, install as the default when
//! no mode flag is given.

use clap::Parser;

/// Sitelink - registers the mylibs learning libraries with the system Python.
#[derive(Debug, Parser)]
#[command(name = "sitelink")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// After a successful install, also run the library test suite
    #[arg(short = 't', long, conflicts_with_all = ["remove", "check"])]
    pub test: bool,

    /// Uninstall: delete the registration file
    #[arg(short = 'r', long, conflicts_with = "check")]
    pub remove: bool,

    /// Report installation status without changing anything
    #[arg(short = 'c', long)]
    pub check: bool,

    /// Show verbose diagnostic output
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// The action selected by the mode flags.
    pub fn action(&self) -> Action {
        if self.remove {
            Action::Remove
        } else if self.check {
            Action::Check
        } else {
            Action::Install {
                run_tests: self.test,
            }
        }
    }
}

/// What the invocation should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Register the repository (the default).
    Install { run_tests: bool },
    /// Delete the registration file.
    Remove,
    /// Report installation status.
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sitelink").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags_means_install() {
        let cli = parse(&[]);
        assert_eq!(cli.action(), Action::Install { run_tests: false });
    }

    #[test]
    fn test_flag_chains_into_tests() {
        let cli = parse(&["--test"]);
        assert_eq!(cli.action(), Action::Install { run_tests: true });
    }

    #[test]
    fn short_aliases_are_accepted() {
        assert_eq!(parse(&["-r"]).action(), Action::Remove);
        assert_eq!(parse(&["-c"]).action(), Action::Check);
        assert!(parse(&["-v"]).verbose);
    }

    #[test]
    fn remove_conflicts_with_check() {
        let result = Cli::try_parse_from(["sitelink", "--remove", "--check"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_conflicts_with_remove() {
        let result = Cli::try_parse_from(["sitelink", "--test", "--remove"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let result = Cli::try_parse_from(["sitelink", "--bogus"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_combines_with_every_mode() {
        assert_eq!(parse(&["-v", "-r"]).action(), Action::Remove);
        assert_eq!(parse(&["-v", "-c"]).action(), Action::Check);
        assert_eq!(
            parse(&["-v", "-t"]).action(),
            Action::Install { run_tests: true }
        );
    }
}
