//! Signing credentials and secret masking.
//!
//! This module owns the crate's handling of sensitive material:
//!
//! - [`Credential`] - Signing material for a deployer account
//! - [`resolve_credential`] - Private-key-over-mnemonic resolution
//! - [`DEV_MNEMONIC`] - The well-known local development mnemonic
//! - [`OutputMasker`] - Masks secret values in rendered output
//!
//! # Example
//!
//! ```
//! use chainrig::secrets::{resolve_credential, Credential};
//!
//! // A private key always wins over a mnemonic.
//! let cred = resolve_credential(Some("0xabc"), Some("some phrase")).unwrap();
//! assert!(matches!(cred, Credential::PrivateKey(_)));
//! ```

pub mod credential;
pub mod mask;

pub use credential::{resolve_credential, Credential, DEV_MNEMONIC};
pub use mask::OutputMasker;
