//! Error types for chainrig operations.
//!
//! This module defines [`ChainrigError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration loading either fully succeeds or aborts with one of these
//!   errors before any compilation or network interaction
//! - No error in this taxonomy is retried; all are terminal and surfaced to
//!   the invoking operator
//! - Use `anyhow::Error` (via `ChainrigError::Other`) for unexpected errors

use alloy_primitives::U256;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for chainrig operations.
#[derive(Debug, Error)]
pub enum ChainrigError {
    /// A requested network requires a third-party API key that is absent
    /// from the environment. Raised at configuration-load time, before any
    /// compilation or deployment step.
    #[error("Could not find Infura key in env, unable to connect to network {network}")]
    MissingSecret { network: String },

    /// Malformed JSON in the compiler-settings override.
    #[error("Invalid SOLIDITY_SETTINGS: {message}")]
    InvalidSettings { message: String },

    /// The requested network identifier is not in the resolved catalog.
    #[error("Unknown network: {name}")]
    UnknownNetwork { name: String },

    /// The deployer account lacks the funding required to broadcast the
    /// deterministic bootstrap transaction. Raised by deployment
    /// orchestrators consuming [`crate::config::DeterministicDeployment`],
    /// never by configuration loading itself.
    #[error("Deployer is underfunded: needs {needed} wei, has {balance} wei")]
    UnderfundedDeployer { needed: U256, balance: U256 },

    /// Failed to parse an environment file.
    #[error("Failed to parse env file at {path}: {message}")]
    EnvParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for chainrig operations.
pub type Result<T> = std::result::Result<T, ChainrigError>;
