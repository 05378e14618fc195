//! antora-ci CLI entry point.

use std::process::ExitCode;

use antora_ci::cli::{Cli, CommandDispatcher};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries the rewritten playbook.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("antora_ci=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("antora_ci=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("antora-ci starting with args: {:?}", cli);

    if let Some(dir) = &cli.project {
        if let Err(e) = std::env::set_current_dir(dir) {
            eprintln!("Error: cannot change to {}: {}", dir.display(), e);
            return ExitCode::from(1);
        }
    }

    let dispatcher = CommandDispatcher::new();
    let mut stdout = std::io::stdout().lock();

    match dispatcher.dispatch(&cli, &mut stdout) {
        Ok(result) if result.success => ExitCode::SUCCESS,
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
