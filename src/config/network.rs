//! Network catalog construction.
//!
//! The catalog maps a network identifier to a [`NetworkProfile`]: RPC
//! endpoint, optional resource limits, and the shared signing credential.
//! Profiles are built through [`ProfileBuilder`] so override precedence is
//! an explicit, testable function rather than implicit field-overwrite order.

use crate::config::EnvInput;
use crate::secrets::{resolve_credential, Credential};
use serde::Serialize;

/// Identifier of the local development network.
///
/// The local network gets no injected credential and synthetic resource
/// limits generous enough for unconstrained testing.
pub const LOCAL_NETWORK: &str = "hardhat";

/// Networks whose RPC endpoint is gated behind `INFURA_KEY`.
pub const INFURA_NETWORKS: &[&str] = &["mainnet", "rinkeby", "kovan", "goerli"];

/// Networks reachable through an open public endpoint.
const OPEN_NETWORKS: &[(&str, &str)] = &[
    ("xdai", "https://xdai.poanetwork.dev"),
    ("ewc", "https://rpc.energyweb.org"),
    ("volta", "https://volta-rpc.energyweb.org"),
];

/// Gas and contract-size ceilings for a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceLimits {
    /// Per-transaction gas ceiling.
    pub gas: u64,
    /// Block gas limit.
    pub block_gas_limit: u64,
    /// Whether contracts may exceed the EIP-170 size limit.
    pub allow_unlimited_contract_size: bool,
}

impl ResourceLimits {
    /// Synthetic limits for the local development network.
    pub fn unconstrained() -> Self {
        Self {
            gas: 100_000_000,
            block_gas_limit: 100_000_000,
            allow_unlimited_contract_size: true,
        }
    }
}

/// Connection parameters for one blockchain network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkProfile {
    /// Network identifier.
    pub name: String,
    /// RPC endpoint URL.
    pub url: String,
    /// Resource limits, present only where the network enforces custom ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<ResourceLimits>,
    /// Signing credential, shared across remote networks. Serialized as the
    /// credential kind only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential: Option<Credential>,
}

/// Builds a [`NetworkProfile`] from a base (name + URL) and explicit
/// overrides. Each setter replaces the previous value for that field, so
/// precedence is the call order and nothing else.
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    name: String,
    url: String,
    limits: Option<ResourceLimits>,
    credential: Option<Credential>,
}

impl ProfileBuilder {
    /// Start from the base profile: identifier and endpoint URL.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            limits: None,
            credential: None,
        }
    }

    /// Attach a signing credential.
    pub fn credential(mut self, credential: Option<Credential>) -> Self {
        self.credential = credential;
        self
    }

    /// Attach resource limits.
    pub fn limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Finalize the immutable profile.
    pub fn build(self) -> NetworkProfile {
        NetworkProfile {
            name: self.name,
            url: self.url,
            limits: self.limits,
            credential: self.credential,
        }
    }
}

/// Mapping from network identifier to connection parameters.
///
/// Profiles keep their insertion order: local network first, then the
/// Infura-gated networks, open networks, and the optional custom endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct NetworkCatalog {
    profiles: Vec<NetworkProfile>,
}

impl NetworkCatalog {
    /// Build the catalog from the environment snapshot.
    ///
    /// The shared credential is resolved once and injected into every remote
    /// profile. Infura-gated networks are included only when the key is
    /// present; requesting one without the key is caught by preflight. The
    /// `custom` profile exists only when `NODE_URL` is set.
    pub fn build(env: &EnvInput) -> Self {
        let shared =
            resolve_credential(env.private_key.as_deref(), env.mnemonic.as_deref());
        match &shared {
            Some(cred) => tracing::debug!("resolved shared {} credential", cred.kind()),
            None => tracing::debug!("no signing credential configured"),
        }

        let mut profiles = Vec::new();

        // Local development network: no credential, synthetic limits.
        profiles.push(
            ProfileBuilder::new(LOCAL_NETWORK, "http://127.0.0.1:8545")
                .limits(ResourceLimits::unconstrained())
                .build(),
        );

        if let Some(key) = &env.infura_key {
            for name in INFURA_NETWORKS {
                profiles.push(
                    ProfileBuilder::new(*name, infura_url(name, key))
                        .credential(shared.clone())
                        .build(),
                );
            }
        } else {
            tracing::debug!("INFURA_KEY not set, omitting gated networks from catalog");
        }

        for (name, url) in OPEN_NETWORKS {
            profiles.push(
                ProfileBuilder::new(*name, *url)
                    .credential(shared.clone())
                    .build(),
            );
        }

        if let Some(url) = &env.node_url {
            profiles.push(
                ProfileBuilder::new("custom", url.clone())
                    .credential(shared.clone())
                    .build(),
            );
        }

        Self { profiles }
    }

    /// Look up a profile by network identifier.
    pub fn get(&self, name: &str) -> Option<&NetworkProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Whether the catalog contains the given network.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Network identifiers in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name.as_str()).collect()
    }

    /// All profiles in catalog order.
    pub fn profiles(&self) -> &[NetworkProfile] {
        &self.profiles
    }

    /// Number of networks in the catalog.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the catalog is empty. It never is after a successful build.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn infura_url(network: &str, key: &str) -> String {
    format!("https://{network}.infura.io/v3/{key}")
}
