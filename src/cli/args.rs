//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// chainrig - Multi-network contract deployment configuration resolver.
#[derive(Debug, Parser)]
#[command(name = "chainrig")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Target network
    #[arg(short, long, global = true, default_value = "hardhat")]
    pub network: String,

    /// Path to a dotenv file (defaults to .env in the current directory)
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the resolved configuration (default if no command specified)
    Show(ShowArgs),

    /// List the networks reachable with the current environment
    Networks(NetworksArgs),

    /// Verify the requested network has every secret it needs
    Check(CheckArgs),

    /// Print the deterministic bootstrap deployment bundle
    Bootstrap(BootstrapArgs),
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `networks` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct NetworksArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {}

/// Arguments for the `bootstrap` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BootstrapArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn network_defaults_to_local() {
        let cli = Cli::parse_from(["chainrig"]);
        assert_eq!(cli.network, "hardhat");
        assert!(cli.command.is_none());
    }

    #[test]
    fn network_flag_is_global() {
        let cli = Cli::parse_from(["chainrig", "check", "--network", "goerli"]);
        assert_eq!(cli.network, "goerli");
        assert!(matches!(cli.command, Some(Commands::Check(_))));
    }

    #[test]
    fn show_accepts_json_flag() {
        let cli = Cli::parse_from(["chainrig", "show", "--json"]);
        match cli.command {
            Some(Commands::Show(args)) => assert!(args.json),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
