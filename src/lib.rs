//! chainrig - Multi-network contract deployment configuration resolver.
//!
//! chainrig resolves everything needed to compile and deploy a set of smart
//! contracts across multiple EVM networks: signing credentials selected by
//! priority, per-network connection parameters, compiler versions, and the
//! deterministic bootstrap-factory bundle that deploys the same factory at
//! the same address on every chain.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Environment snapshot, network catalog, compiler selection,
//!   deterministic deployment, and full configuration assembly
//! - [`error`] - Error types and result aliases
//! - [`secrets`] - Signing credentials and output masking
//!
//! # Example
//!
//! ```
//! use chainrig::config::{DeployConfig, EnvInput};
//!
//! let env = EnvInput {
//!     private_key: Some("0xac09...ff80".into()),
//!     ..EnvInput::default()
//! };
//! let config = DeployConfig::resolve("xdai", &env).unwrap();
//! let credential = config.networks.get("xdai").unwrap().credential.as_ref().unwrap();
//! assert_eq!(credential.kind(), "private-key");
//! ```
//!
//! Compilation, RPC transport, and contract verification are external
//! collaborators; this crate only assembles the in-memory configuration
//! they consume.

pub mod cli;
pub mod config;
pub mod error;
pub mod secrets;

pub use error::{ChainrigError, Result};
