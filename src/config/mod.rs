//! Configuration resolution for multi-network contract deployment.
//!
//! This module turns an environment snapshot into the configuration object
//! that external build and deploy tooling consumes:
//!
//! - Environment snapshot and dotenv layering in [`env`]
//! - Network catalog construction in [`network`]
//! - Fail-fast secret validation in [`preflight`]
//! - Compiler version and optimizer selection in [`compiler`]
//! - The deterministic bootstrap-factory bundle in [`deterministic`]
//! - Full assembly in [`loader`]
//!
//! # Example
//!
//! ```
//! use chainrig::config::{DeployConfig, EnvInput, LOCAL_NETWORK};
//!
//! let config = DeployConfig::resolve(LOCAL_NETWORK, &EnvInput::default()).unwrap();
//! assert_eq!(config.compilers[0].version, "0.7.6");
//! assert!(config.networks.contains(LOCAL_NETWORK));
//! ```

pub mod compiler;
pub mod deterministic;
pub mod env;
pub mod loader;
pub mod network;
pub mod preflight;

// Env re-exports
pub use env::{load_env_file, merge_env, EnvInput, INPUT_VARS};

// Network re-exports
pub use network::{
    NetworkCatalog, NetworkProfile, ProfileBuilder, ResourceLimits, INFURA_NETWORKS,
    LOCAL_NETWORK,
};

// Preflight re-exports
pub use preflight::ensure_network_secrets;

// Compiler re-exports
pub use compiler::{
    select_compilers, CompilerSpec, DEFAULT_SOLC_VERSION, LEGACY_SOLC_VERSIONS,
};

// Deterministic deployment re-exports
pub use deterministic::{
    deterministic_deployment, DeterministicDeployment, DEPLOYER_ADDRESS, FACTORY_ADDRESS,
    FUNDING_WEI, SIGNED_TX,
};

// Loader re-exports
pub use loader::{DeployConfig, ProjectPaths, DEPLOYER_ACCOUNT_INDEX, TEST_TIMEOUT};
