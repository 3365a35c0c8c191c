//! chainrig CLI entry point.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use chainrig::cli::{Cli, CommandDispatcher};
use chainrig::config::EnvInput;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("chainrig=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chainrig=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("chainrig starting with args: {:?}", cli);

    // Snapshot the environment once: process env layered over the dotenv
    // file. Everything downstream works from this record.
    let env_file = cli.env_file.clone().unwrap_or_else(|| ".env".into());
    let env = match EnvInput::from_process_env_with_file(Path::new(&env_file)) {
        Ok(env) => env,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    let dispatcher = CommandDispatcher::new(env);
    let mut stdout = io::stdout().lock();

    match dispatcher.dispatch(&cli, &mut stdout) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
