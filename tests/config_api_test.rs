//! Integration tests for the public configuration API.

use chainrig::config::{
    deterministic_deployment, DeployConfig, EnvInput, NetworkCatalog, DEFAULT_SOLC_VERSION,
    INFURA_NETWORKS, LOCAL_NETWORK,
};
use chainrig::error::ChainrigError;
use chainrig::secrets::{resolve_credential, Credential, DEV_MNEMONIC};
use std::collections::HashMap;

fn env_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn private_key_always_beats_mnemonic() {
    for mnemonic in [None, Some(""), Some(DEV_MNEMONIC)] {
        let cred = resolve_credential(Some("0xkey"), mnemonic).unwrap();
        assert!(matches!(cred, Credential::PrivateKey(_)));
    }
}

#[test]
fn every_gated_network_fails_fast_without_key() {
    for network in INFURA_NETWORKS {
        let err = DeployConfig::resolve(network, &EnvInput::default()).unwrap_err();
        assert!(
            matches!(err, ChainrigError::MissingSecret { .. }),
            "{network} should fail with MissingSecret"
        );
    }
}

#[test]
fn compiler_order_tracks_override_and_keeps_legacy_tail() {
    let with_override = EnvInput::from_map(&env_map(&[("SOLIDITY_VERSION", "0.8.19")]));
    let config = DeployConfig::resolve(LOCAL_NETWORK, &with_override).unwrap();
    let versions: Vec<_> = config.compilers.iter().map(|c| c.version.as_str()).collect();
    assert_eq!(versions, ["0.8.19", "0.6.12", "0.5.17"]);

    let config = DeployConfig::resolve(LOCAL_NETWORK, &EnvInput::default()).unwrap();
    assert_eq!(config.compilers[0].version, DEFAULT_SOLC_VERSION);
}

#[test]
fn deterministic_bundle_invariant_over_identifiers() {
    let reference = deterministic_deployment("mainnet");
    for network in ["hardhat", "xdai", "goerli", "volta", "made-up-chain"] {
        let bundle = deterministic_deployment(network);
        assert_eq!(bundle.factory, reference.factory);
        assert_eq!(bundle.deployer, reference.deployer);
        assert_eq!(bundle.funding, reference.funding);
        assert_eq!(bundle.signed_tx, reference.signed_tx);
    }
}

#[test]
fn invalid_settings_json_yields_no_config() {
    let env = EnvInput::from_map(&env_map(&[("SOLIDITY_SETTINGS", "{")]));
    let result = DeployConfig::resolve(LOCAL_NETWORK, &env);
    match result {
        Err(ChainrigError::InvalidSettings { message }) => {
            assert!(!message.is_empty());
        }
        other => panic!("expected InvalidSettings, got {other:?}"),
    }
}

#[test]
fn local_network_is_unconstrained_and_credential_free() {
    let env = EnvInput::from_map(&env_map(&[("PK", "0xabc"), ("INFURA_KEY", "k")]));
    let config = DeployConfig::resolve(LOCAL_NETWORK, &env).unwrap();
    let local = config.networks.get(LOCAL_NETWORK).unwrap();

    assert!(local.credential.is_none());
    let limits = local.limits.expect("local network carries limits");
    assert!(limits.allow_unlimited_contract_size);
    assert!(limits.gas >= 100_000_000);
}

#[test]
fn mnemonic_flows_through_to_gated_network() {
    let env = EnvInput::from_map(&env_map(&[
        ("MNEMONIC", DEV_MNEMONIC),
        ("INFURA_KEY", "project-key"),
    ]));
    let config = DeployConfig::resolve("goerli", &env).unwrap();

    let profile = config.networks.get("goerli").unwrap();
    match profile.credential.as_ref().unwrap() {
        Credential::Mnemonic(phrase) => assert_eq!(phrase, DEV_MNEMONIC),
        other => panic!("expected mnemonic credential, got {other:?}"),
    }
    assert_eq!(profile.url, "https://goerli.infura.io/v3/project-key");
}

#[test]
fn catalog_membership_follows_environment() {
    let bare = NetworkCatalog::build(&EnvInput::default());
    assert_eq!(bare.names(), ["hardhat", "xdai", "ewc", "volta"]);

    let full = NetworkCatalog::build(&EnvInput::from_map(&env_map(&[
        ("INFURA_KEY", "k"),
        ("NODE_URL", "http://10.1.1.1:8545"),
    ])));
    assert_eq!(
        full.names(),
        [
            "hardhat", "mainnet", "rinkeby", "kovan", "goerli", "xdai", "ewc", "volta",
            "custom"
        ]
    );
}

#[test]
fn config_is_shareable_across_tasks() {
    let env = EnvInput::from_map(&env_map(&[("INFURA_KEY", "k"), ("PK", "0xabc")]));
    let config = DeployConfig::resolve("mainnet", &env).unwrap();

    let handles: Vec<_> = ["mainnet", "goerli", "xdai"]
        .into_iter()
        .map(|network| {
            let config = config.clone();
            let network = network.to_string();
            std::thread::spawn(move || config.deterministic_deployment(&network))
        })
        .collect();

    let bundles: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(bundles.windows(2).all(|w| w[0] == w[1]));
}
