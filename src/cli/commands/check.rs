//! Check command implementation.
//!
//! The `chainrig check` command runs the full configuration resolution for
//! the requested network and reports the result without printing the
//! configuration itself. It exists so CI and deploy scripts can fail fast,
//! before any compilation starts.

use std::io::Write;

use crate::cli::args::CheckArgs;
use crate::config::{DeployConfig, EnvInput};
use crate::error::{ChainrigError, Result};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    network: String,
    env: EnvInput,
    #[allow(dead_code)]
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(network: &str, env: &EnvInput, args: CheckArgs) -> Self {
        Self {
            network: network.to_string(),
            env: env.clone(),
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        match DeployConfig::resolve(&self.network, &self.env) {
            Ok(_) => {
                writeln!(out, "ok: network '{}' is deployable", self.network)?;
                Ok(CommandResult::success())
            }
            // Terminal configuration errors get a distinct exit code so
            // scripts can tell them apart from tool failures.
            Err(
                e @ (ChainrigError::MissingSecret { .. }
                | ChainrigError::InvalidSettings { .. }
                | ChainrigError::UnknownNetwork { .. }),
            ) => {
                writeln!(out, "error: {e}")?;
                Ok(CommandResult::failure(2))
            }
            Err(e) => Err(e),
        }
    }
}
