//! Signing credential resolution.
//!
//! A [`Credential`] is the signing material a deployer account uses to
//! authorize transactions: either a raw private key or a BIP-39 mnemonic
//! phrase. Exactly one representation is active at a time, and a private key
//! always takes precedence over a mnemonic when both are supplied.

use serde::{Serialize, Serializer};
use std::fmt;

/// Well-known mnemonic for local development accounts.
///
/// This phrase is public and must only ever be referenced for the local
/// development network. It is never injected into a remote network profile.
pub const DEV_MNEMONIC: &str =
    "candy maple cake sugar pudding cream honey rich smooth crumble sweet treat";

/// Signing material for a deployer account.
///
/// The raw secret is reachable only through [`Credential::expose`]; `Debug`
/// and `Serialize` output is redacted so credentials cannot leak through
/// logs or rendered configuration.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// A single raw private key.
    PrivateKey(String),
    /// A BIP-39 mnemonic phrase from which accounts are derived.
    Mnemonic(String),
}

impl Credential {
    /// A short label for the active representation.
    pub fn kind(&self) -> &'static str {
        match self {
            Credential::PrivateKey(_) => "private-key",
            Credential::Mnemonic(_) => "mnemonic",
        }
    }

    /// The raw secret material, for handing to a signer.
    pub fn expose(&self) -> &str {
        match self {
            Credential::PrivateKey(s) | Credential::Mnemonic(s) => s,
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential::{}([REDACTED])", self.kind())
    }
}

impl Serialize for Credential {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.kind())
    }
}

/// Resolve a credential from the optional environment inputs.
///
/// A non-empty private key wins over any mnemonic. When neither is present
/// the result is `None`: the network has no configured signer. Callers must
/// not substitute a default signing phrase for remote networks.
pub fn resolve_credential(
    private_key: Option<&str>,
    mnemonic: Option<&str>,
) -> Option<Credential> {
    if let Some(pk) = private_key.filter(|s| !s.is_empty()) {
        return Some(Credential::PrivateKey(pk.to_string()));
    }
    if let Some(phrase) = mnemonic.filter(|s| !s.is_empty()) {
        return Some(Credential::Mnemonic(phrase.to_string()));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_key_wins_over_mnemonic() {
        let cred = resolve_credential(Some("0xdeadbeef"), Some("some phrase")).unwrap();
        assert!(matches!(cred, Credential::PrivateKey(_)));
        assert_eq!(cred.expose(), "0xdeadbeef");
    }

    #[test]
    fn mnemonic_used_when_no_private_key() {
        let cred = resolve_credential(None, Some(DEV_MNEMONIC)).unwrap();
        assert!(matches!(cred, Credential::Mnemonic(_)));
        assert_eq!(cred.expose(), DEV_MNEMONIC);
    }

    #[test]
    fn empty_private_key_falls_through_to_mnemonic() {
        let cred = resolve_credential(Some(""), Some("valid phrase")).unwrap();
        assert!(matches!(cred, Credential::Mnemonic(_)));
    }

    #[test]
    fn no_inputs_yields_no_credential() {
        assert!(resolve_credential(None, None).is_none());
        assert!(resolve_credential(Some(""), Some("")).is_none());
    }

    #[test]
    fn debug_never_prints_secret_material() {
        let cred = Credential::PrivateKey("0xsupersecret".into());
        let rendered = format!("{:?}", cred);
        assert!(!rendered.contains("supersecret"));
        assert!(rendered.contains("REDACTED"));
    }

    #[test]
    fn serialize_emits_kind_only() {
        let cred = Credential::Mnemonic(DEV_MNEMONIC.into());
        let json = serde_json::to_string(&cred).unwrap();
        assert_eq!(json, "\"mnemonic\"");
    }
}
