//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use crate::cli::args::{Cli, Commands, ShowArgs};
use crate::config::EnvInput;
use crate::error::Result;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing output to `out`.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    env: EnvInput,
}

impl CommandDispatcher {
    /// Create a new dispatcher over the given environment snapshot.
    pub fn new(env: EnvInput) -> Self {
        Self { env }
    }

    /// The environment snapshot this dispatcher resolves against.
    pub fn env(&self) -> &EnvInput {
        &self.env
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation.
    /// With no subcommand, `show` runs.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Show(args)) => {
                let cmd = super::show::ShowCommand::new(&cli.network, &self.env, args.clone());
                cmd.execute(out)
            }
            Some(Commands::Networks(args)) => {
                let cmd = super::networks::NetworksCommand::new(&self.env, args.clone());
                cmd.execute(out)
            }
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(&cli.network, &self.env, args.clone());
                cmd.execute(out)
            }
            Some(Commands::Bootstrap(args)) => {
                let cmd =
                    super::bootstrap::BootstrapCommand::new(&cli.network, args.clone());
                cmd.execute(out)
            }
            None => {
                let cmd = super::show::ShowCommand::new(
                    &cli.network,
                    &self.env,
                    ShowArgs::default(),
                );
                cmd.execute(out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn command_result_codes() {
        assert_eq!(CommandResult::success().exit_code, 0);
        assert!(CommandResult::success().success);
        assert_eq!(CommandResult::failure(2).exit_code, 2);
        assert!(!CommandResult::failure(2).success);
    }

    #[test]
    fn no_subcommand_runs_show() {
        let cli = Cli::parse_from(["chainrig"]);
        let dispatcher = CommandDispatcher::new(EnvInput::default());

        let mut out = Vec::new();
        let result = dispatcher.dispatch(&cli, &mut out).unwrap();

        assert!(result.success);
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("hardhat"));
    }
}
