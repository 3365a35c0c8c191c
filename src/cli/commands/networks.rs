//! Networks command implementation.
//!
//! The `chainrig networks` command lists every network reachable with the
//! current environment, without requiring a target network or its secrets.

use std::io::Write;

use crate::cli::args::NetworksArgs;
use crate::config::{EnvInput, NetworkCatalog};
use crate::error::{ChainrigError, Result};
use crate::secrets::OutputMasker;

use super::dispatcher::{Command, CommandResult};

/// The networks command implementation.
pub struct NetworksCommand {
    env: EnvInput,
    args: NetworksArgs,
}

impl NetworksCommand {
    /// Create a new networks command.
    pub fn new(env: &EnvInput, args: NetworksArgs) -> Self {
        Self {
            env: env.clone(),
            args,
        }
    }
}

impl Command for NetworksCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let catalog = NetworkCatalog::build(&self.env);
        let masker = OutputMasker::for_env(&self.env);

        let rendered = if self.args.json {
            serde_json::to_string_pretty(&catalog).map_err(|e| ChainrigError::Other(e.into()))?
        } else {
            catalog
                .profiles()
                .iter()
                .map(|p| format!("{:<8} {}", p.name, p.url))
                .collect::<Vec<_>>()
                .join("\n")
        };

        writeln!(out, "{}", masker.mask(&rendered))?;
        Ok(CommandResult::success())
    }
}
