//! Fail-fast secret validation.
//!
//! Before any compilation or network I/O, the requested network is checked
//! against the set of networks that require a third-party API key. A gated
//! network requested without its key aborts configuration loading
//! immediately, so no compilation time is wasted and no partial deployment
//! state is produced.

use crate::config::{EnvInput, INFURA_NETWORKS};
use crate::error::{ChainrigError, Result};

/// Verify the requested network has every secret it needs.
///
/// Runs synchronously at configuration-load time, never lazily at first RPC
/// call.
///
/// # Errors
///
/// `MissingSecret` when the network is Infura-gated and `INFURA_KEY` is
/// absent from the environment.
pub fn ensure_network_secrets(network: &str, env: &EnvInput) -> Result<()> {
    if INFURA_NETWORKS.contains(&network) && env.infura_key.is_none() {
        return Err(ChainrigError::MissingSecret {
            network: network.to_string(),
        });
    }
    Ok(())
}
