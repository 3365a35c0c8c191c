//! Show command implementation.
//!
//! The `chainrig show` command resolves the full deployment configuration
//! for the requested network and prints it with secrets redacted.

use std::io::Write;

use crate::cli::args::ShowArgs;
use crate::config::{DeployConfig, EnvInput};
use crate::error::{ChainrigError, Result};
use crate::secrets::OutputMasker;

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    network: String,
    env: EnvInput,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(network: &str, env: &EnvInput, args: ShowArgs) -> Self {
        Self {
            network: network.to_string(),
            env: env.clone(),
            args,
        }
    }
}

impl Command for ShowCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let config = DeployConfig::resolve(&self.network, &self.env)?;
        let masker = OutputMasker::for_env(&self.env);

        let rendered = if self.args.json {
            serde_json::to_string_pretty(&config).map_err(|e| ChainrigError::Other(e.into()))?
        } else {
            render_text(&config)
        };

        writeln!(out, "{}", masker.mask(&rendered))?;
        Ok(CommandResult::success())
    }
}

fn render_text(config: &DeployConfig) -> String {
    let mut lines = Vec::new();
    lines.push(format!("network:  {}", config.network));
    lines.push(format!(
        "compilers: {}",
        config
            .compilers
            .iter()
            .map(|c| c.version.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    ));
    lines.push(format!("deployer account index: {}", config.deployer_account_index));
    lines.push(format!(
        "test timeout: {}ms",
        config.test_timeout.as_millis()
    ));
    lines.push(String::from("networks:"));
    for profile in config.networks.profiles() {
        let cred = profile
            .credential
            .as_ref()
            .map(|c| c.kind())
            .unwrap_or("none");
        lines.push(format!(
            "  {:<8} {} (credential: {})",
            profile.name, profile.url, cred
        ));
    }
    lines.join("\n")
}
