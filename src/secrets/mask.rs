//! Output masking for secret values.
//!
//! Rendered configuration (URLs in particular) can embed secret material
//! such as an Infura project key. [`OutputMasker`] replaces every registered
//! secret value in a rendered string before it reaches the terminal.

use crate::config::EnvInput;
use std::collections::HashMap;

/// Masks secret values in rendered output.
///
/// # Example
///
/// ```
/// use chainrig::secrets::OutputMasker;
///
/// let mut masker = OutputMasker::new();
/// masker.add_secret("abc123");
/// assert_eq!(
///     masker.mask("https://mainnet.infura.io/v3/abc123"),
///     "https://mainnet.infura.io/v3/[REDACTED]"
/// );
/// ```
pub struct OutputMasker {
    /// Map of secret values to their masked representation.
    secrets: HashMap<String, String>,
    /// The mask string to use.
    mask: String,
}

impl OutputMasker {
    /// Create a new masker with the default mask string.
    pub fn new() -> Self {
        Self {
            secrets: HashMap::new(),
            mask: "[REDACTED]".to_string(),
        }
    }

    /// Create a masker seeded with every secret present in the environment
    /// snapshot: private key, mnemonic, and API keys.
    pub fn for_env(env: &EnvInput) -> Self {
        let mut masker = Self::new();
        masker.add_secrets(
            [
                env.private_key.as_deref(),
                env.mnemonic.as_deref(),
                env.infura_key.as_deref(),
                env.etherscan_api_key.as_deref(),
            ]
            .into_iter()
            .flatten(),
        );
        masker
    }

    /// Register a secret value to be masked.
    ///
    /// Empty strings are ignored.
    pub fn add_secret(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.secrets.insert(value, self.mask.clone());
        }
    }

    /// Register multiple secret values.
    pub fn add_secrets(&mut self, values: impl IntoIterator<Item = impl Into<String>>) {
        for value in values {
            self.add_secret(value);
        }
    }

    /// Mask any secret values in the given string.
    pub fn mask(&self, input: &str) -> String {
        let mut result = input.to_string();
        for (secret, mask) in &self.secrets {
            result = result.replace(secret, mask);
        }
        result
    }

    /// Get the number of registered secrets.
    pub fn secret_count(&self) -> usize {
        self.secrets.len()
    }
}

impl Default for OutputMasker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_key_embedded_in_url() {
        let mut masker = OutputMasker::new();
        masker.add_secret("deadbeef01");

        let output = masker.mask("https://goerli.infura.io/v3/deadbeef01");

        assert_eq!(output, "https://goerli.infura.io/v3/[REDACTED]");
    }

    #[test]
    fn masks_multiple_secrets() {
        let mut masker = OutputMasker::new();
        masker.add_secret("secret1");
        masker.add_secret("secret2");

        let output = masker.mask("Values: secret1 and secret2");

        assert_eq!(output, "Values: [REDACTED] and [REDACTED]");
    }

    #[test]
    fn ignores_empty_secrets() {
        let mut masker = OutputMasker::new();
        masker.add_secret("");
        masker.add_secret("real-secret");

        let output = masker.mask("The real-secret is here");

        assert_eq!(output, "The [REDACTED] is here");
        assert_eq!(masker.secret_count(), 1);
    }

    #[test]
    fn for_env_registers_all_present_secrets() {
        let env = EnvInput {
            infura_key: Some("infura-key-value".into()),
            mnemonic: Some("phrase phrase phrase".into()),
            private_key: None,
            etherscan_api_key: Some("etherscan-value".into()),
            ..EnvInput::default()
        };

        let masker = OutputMasker::for_env(&env);
        assert_eq!(masker.secret_count(), 3);

        let output = masker.mask("key=infura-key-value phrase=phrase phrase phrase");
        assert!(!output.contains("infura-key-value"));
        assert!(!output.contains("phrase phrase phrase"));
    }
}
