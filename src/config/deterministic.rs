//! Deterministic bootstrap-factory deployment bundle.
//!
//! The CREATE2-style bootstrap factory is deployed from a pre-signed,
//! key-independent transaction. Broadcasting the same raw bytes on any chain
//! deploys the same bytecode at the same address, which is what makes
//! cross-network contract addresses reproducible.

use alloy_primitives::{address, bytes, Address, Bytes, U256};
use serde::Serialize;

/// Address the bootstrap factory lands at on every chain.
pub const FACTORY_ADDRESS: Address = address!("0xDC846a0d870Bf4Ded7dbe017dfa45227781D736f");

/// One-shot deployer address recovered from the pre-signed transaction.
pub const DEPLOYER_ADDRESS: Address = address!("0xFa5727bE643dba6599fC7F812fE60dA3264A8205");

/// Funding the deployer address needs before the transaction can be
/// broadcast, in wei.
pub const FUNDING_WEI: u64 = 150_240_384_615_360_000;

/// The pre-signed factory deployment transaction, byte-exact.
///
/// Legacy transaction with a fixed gas price and a v value independent of
/// any chain id, so it is valid on every network.
pub const SIGNED_TX: Bytes = bytes!("0xf8a6238601b541cf380c830138808080b853604580600e600039806000f350fe7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe03601600081602082378035828234f58015156039578182fd5b8082525050506014600cf31ba022c006ba37aac70ed20568d0b862c1b0729be4a35a6431f5477508bbe1454ceca03a6c230cdca0b0b90ad6ae39b96d5579ad90e27e45967cda629992dca9cccea4");

/// Everything a deployment orchestrator needs to bootstrap the factory.
///
/// The bundle is identical for every network. Orchestrators consuming it
/// must:
///
/// 1. ensure [`deployer`](Self::deployer) holds at least
///    [`funding`](Self::funding) on the target chain, reporting
///    [`UnderfundedDeployer`](crate::error::ChainrigError::UnderfundedDeployer)
///    otherwise instead of broadcasting a transaction doomed to fail;
/// 2. broadcast [`signed_tx`](Self::signed_tx) unchanged, byte for byte;
/// 3. treat "factory already deployed at [`factory`](Self::factory)" as
///    success, not failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeterministicDeployment {
    /// Address the factory contract is deployed at.
    pub factory: Address,
    /// Address that signs and broadcasts the deployment transaction.
    pub deployer: Address,
    /// Minimum balance the deployer needs, in wei.
    pub funding: U256,
    /// Raw signed deployment transaction bytes.
    pub signed_tx: Bytes,
}

impl DeterministicDeployment {
    /// The constant bundle.
    pub fn bundle() -> Self {
        Self {
            factory: FACTORY_ADDRESS,
            deployer: DEPLOYER_ADDRESS,
            funding: U256::from(FUNDING_WEI),
            signed_tx: SIGNED_TX,
        }
    }
}

/// Deterministic deployment bundle for the given network.
///
/// The identifier is accepted to match the provider interface the
/// orchestrator calls once per target network, but the returned bundle is
/// network-invariant by construction.
pub fn deterministic_deployment(_network: &str) -> DeterministicDeployment {
    DeterministicDeployment::bundle()
}
