//! Bootstrap command implementation.
//!
//! The `chainrig bootstrap` command prints the deterministic deployment
//! bundle an orchestrator needs to install the bootstrap factory on the
//! requested network: factory address, deployer address, required funding,
//! and the raw pre-signed transaction.

use std::io::Write;

use crate::cli::args::BootstrapArgs;
use crate::config::{deterministic_deployment, DeterministicDeployment};
use crate::error::{ChainrigError, Result};

use super::dispatcher::{Command, CommandResult};

/// The bootstrap command implementation.
pub struct BootstrapCommand {
    network: String,
    args: BootstrapArgs,
}

impl BootstrapCommand {
    /// Create a new bootstrap command.
    pub fn new(network: &str, args: BootstrapArgs) -> Self {
        Self {
            network: network.to_string(),
            args,
        }
    }
}

impl Command for BootstrapCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let bundle = deterministic_deployment(&self.network);

        if self.args.json {
            let json = serde_json::to_string_pretty(&bundle)
                .map_err(|e| ChainrigError::Other(e.into()))?;
            writeln!(out, "{json}")?;
        } else {
            writeln!(out, "{}", render_text(&bundle))?;
        }

        Ok(CommandResult::success())
    }
}

fn render_text(bundle: &DeterministicDeployment) -> String {
    format!(
        "factory:   {}\ndeployer:  {}\nfunding:   {} wei\nsigned tx: 0x{}",
        bundle.factory,
        bundle.deployer,
        bundle.funding,
        hex::encode(&bundle.signed_tx),
    )
}
