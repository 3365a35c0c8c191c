//! Full configuration assembly.
//!
//! [`DeployConfig::resolve`] is the single entry point that turns an
//! environment snapshot and a requested network into the configuration
//! object consumed by external build and deploy tooling. Resolution is
//! all-or-nothing: preflight runs first, then compiler selection, then
//! catalog construction, and any failure aborts before partial state exists.

use crate::config::compiler::{select_compilers, CompilerSpec};
use crate::config::deterministic::{deterministic_deployment, DeterministicDeployment};
use crate::config::env::EnvInput;
use crate::config::network::NetworkCatalog;
use crate::config::preflight::ensure_network_secrets;
use crate::error::{ChainrigError, Result};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Index of the named deployer account within the derived account list.
pub const DEPLOYER_ACCOUNT_INDEX: u32 = 0;

/// Timeout handed to the external test runner.
pub const TEST_TIMEOUT: Duration = Duration::from_millis(2_000_000);

/// Project directory layout consumed by the external compiler and deployer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPaths {
    /// Compiled artifact output.
    pub artifacts: PathBuf,
    /// Compiler cache.
    pub cache: PathBuf,
    /// Deployment scripts.
    pub deploy: PathBuf,
    /// Contract sources.
    pub sources: PathBuf,
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self {
            artifacts: PathBuf::from("build/artifacts"),
            cache: PathBuf::from("build/cache"),
            deploy: PathBuf::from("src/deploy"),
            sources: PathBuf::from("contracts"),
        }
    }
}

/// The resolved build/deploy configuration.
///
/// Immutable once constructed; safe to share across parallel per-network
/// deployment tasks.
#[derive(Debug, Clone, Serialize)]
pub struct DeployConfig {
    /// The network this resolution was requested for.
    pub network: String,
    /// Ordered compiler list, primary spec first.
    pub compilers: Vec<CompilerSpec>,
    /// All networks reachable with the current environment.
    pub networks: NetworkCatalog,
    /// Index of the deployer account.
    pub deployer_account_index: u32,
    /// Verification API key, passed through to the external verifier.
    #[serde(skip_serializing)]
    pub etherscan_api_key: Option<String>,
    /// Test-runner timeout.
    #[serde(serialize_with = "serialize_millis")]
    pub test_timeout: Duration,
    /// Project directory layout.
    pub paths: ProjectPaths,
}

impl DeployConfig {
    /// Resolve the configuration for the requested network.
    ///
    /// # Errors
    ///
    /// - `MissingSecret` when the network is API-key-gated and the key is
    ///   absent (checked before anything else)
    /// - `InvalidSettings` when the compiler settings override is malformed
    /// - `UnknownNetwork` when the identifier is not in the resolved catalog
    pub fn resolve(network: &str, env: &EnvInput) -> Result<Self> {
        ensure_network_secrets(network, env)?;

        let compilers = select_compilers(
            env.solidity_version.as_deref(),
            env.solidity_settings.as_deref(),
        )?;
        let networks = NetworkCatalog::build(env);

        if !networks.contains(network) {
            return Err(ChainrigError::UnknownNetwork {
                name: network.to_string(),
            });
        }

        tracing::info!(
            network,
            compiler = %compilers[0].version,
            catalog_size = networks.len(),
            "resolved deployment configuration"
        );

        Ok(Self {
            network: network.to_string(),
            compilers,
            networks,
            deployer_account_index: DEPLOYER_ACCOUNT_INDEX,
            etherscan_api_key: env.etherscan_api_key.clone(),
            test_timeout: TEST_TIMEOUT,
            paths: ProjectPaths::default(),
        })
    }

    /// Deterministic bootstrap bundle for the given network.
    ///
    /// Network-invariant; see [`DeterministicDeployment`].
    pub fn deterministic_deployment(&self, network: &str) -> DeterministicDeployment {
        deterministic_deployment(network)
    }
}

fn serialize_millis<S: serde::Serializer>(
    d: &Duration,
    s: S,
) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}
