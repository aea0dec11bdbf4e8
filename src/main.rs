//! Sitelink CLI entry point.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use sitelink::cli::{Cli, CommandDispatcher};
use sitelink::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("sitelink=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sitelink=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    // clap exits 2 on usage errors by default; this tool's contract is
    // exit 1 for anything other than help/version.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    init_tracing(cli.debug);
    tracing::debug!("Sitelink starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let output_mode = if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    let mut ui = create_ui(output_mode);

    // The repository root is wherever the registrar is invoked from.
    let repo_root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            ui.error(&format!("Cannot determine working directory: {}", e));
            return ExitCode::from(1);
        }
    };

    let dispatcher = CommandDispatcher::new(repo_root);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&e.to_string());
            if let Some(hint) = e.hint() {
                ui.hint(hint);
            }
            ExitCode::from(1)
        }
    }
}
