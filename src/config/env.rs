//! Environment input snapshot.
//!
//! All configuration resolution works from an explicit [`EnvInput`] record
//! captured once at startup, never from ambient `std::env` lookups inside
//! deeper components. The snapshot layers a dotenv-style `.env` file under
//! the process environment, with the process environment taking precedence.

use crate::error::{ChainrigError, Result};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// The environment variables consumed by configuration resolution.
pub const INPUT_VARS: &[&str] = &[
    "NODE_URL",
    "INFURA_KEY",
    "MNEMONIC",
    "PK",
    "ETHERSCAN_API_KEY",
    "SOLIDITY_VERSION",
    "SOLIDITY_SETTINGS",
];

/// Snapshot of the environment inputs that drive configuration resolution.
///
/// Empty-string values are normalized to `None` at construction, so a
/// variable set to `""` behaves exactly like an unset variable.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EnvInput {
    /// Custom RPC endpoint override (`NODE_URL`).
    pub node_url: Option<String>,
    /// Third-party API key required by the Infura-gated networks (`INFURA_KEY`).
    pub infura_key: Option<String>,
    /// Mnemonic credential (`MNEMONIC`).
    pub mnemonic: Option<String>,
    /// Private-key credential, takes precedence over the mnemonic (`PK`).
    pub private_key: Option<String>,
    /// Verification API key, passed through to the verifier (`ETHERSCAN_API_KEY`).
    pub etherscan_api_key: Option<String>,
    /// Primary compiler version override (`SOLIDITY_VERSION`).
    pub solidity_version: Option<String>,
    /// Compiler optimizer settings override, JSON (`SOLIDITY_SETTINGS`).
    pub solidity_settings: Option<String>,
}

impl EnvInput {
    /// Build a snapshot from an explicit key/value map.
    ///
    /// This is the testable constructor; [`EnvInput::from_process_env`] and
    /// the dotenv layering both funnel through it.
    pub fn from_map(vars: &HashMap<String, String>) -> Self {
        let get = |key: &str| vars.get(key).filter(|v| !v.is_empty()).cloned();
        Self {
            node_url: get("NODE_URL"),
            infura_key: get("INFURA_KEY"),
            mnemonic: get("MNEMONIC"),
            private_key: get("PK"),
            etherscan_api_key: get("ETHERSCAN_API_KEY"),
            solidity_version: get("SOLIDITY_VERSION"),
            solidity_settings: get("SOLIDITY_SETTINGS"),
        }
    }

    /// Snapshot the process environment.
    pub fn from_process_env() -> Self {
        Self::from_map(&std::env::vars().collect())
    }

    /// Snapshot the process environment layered over a dotenv file.
    ///
    /// Values from the process environment win over values from the file.
    /// A missing file is not an error.
    pub fn from_process_env_with_file(path: &Path) -> Result<Self> {
        let file_vars = match load_env_file(path) {
            Ok(vars) => vars,
            Err(ChainrigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                HashMap::new()
            }
            Err(e) => return Err(e),
        };
        let merged = merge_env(&file_vars, &std::env::vars().collect());
        Ok(Self::from_map(&merged))
    }
}

// Secrets must not leak through debug logging of the snapshot.
impl fmt::Debug for EnvInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("EnvInput")
            .field("node_url", &self.node_url)
            .field("infura_key", &redact(&self.infura_key))
            .field("mnemonic", &redact(&self.mnemonic))
            .field("private_key", &redact(&self.private_key))
            .field("etherscan_api_key", &redact(&self.etherscan_api_key))
            .field("solidity_version", &self.solidity_version)
            .field("solidity_settings", &self.solidity_settings)
            .finish()
    }
}

/// Load environment variables from a dotenv-style file.
///
/// # Format
///
/// ```text
/// # Comment
/// KEY=value
/// QUOTED="value with spaces"
/// SINGLE='also works'
/// ```
///
/// # Errors
///
/// Returns `Io` if the file cannot be read and `EnvParse` for invalid lines.
pub fn load_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let content = fs::read_to_string(path)?;
    parse_dotenv(&content, path)
}

/// Parse dotenv-style content.
fn parse_dotenv(content: &str, source_path: &Path) -> Result<HashMap<String, String>> {
    let mut env = HashMap::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Parse KEY=value
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim().to_string();
            let mut value = line[eq_pos + 1..].trim().to_string();

            // Remove surrounding quotes if present
            if ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
                && value.len() >= 2
            {
                value = value[1..value.len() - 1].to_string();
            }

            env.insert(key, value);
        } else {
            return Err(ChainrigError::EnvParse {
                path: source_path.to_path_buf(),
                message: format!("Invalid line {}: {}", line_num + 1, line),
            });
        }
    }

    Ok(env)
}

/// Merge environment maps in precedence order.
///
/// Values in `overlay` take precedence over values in `base`.
pub fn merge_env(
    base: &HashMap<String, String>,
    overlay: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut result = base.clone();
    result.extend(overlay.iter().map(|(k, v)| (k.clone(), v.clone())));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn from_map_reads_all_inputs() {
        let env = EnvInput::from_map(&map(&[
            ("NODE_URL", "http://localhost:8545"),
            ("INFURA_KEY", "key123"),
            ("MNEMONIC", "word word word"),
            ("PK", "0xabc"),
            ("ETHERSCAN_API_KEY", "etherscan"),
            ("SOLIDITY_VERSION", "0.8.4"),
            ("SOLIDITY_SETTINGS", "{}"),
        ]));

        assert_eq!(env.node_url.as_deref(), Some("http://localhost:8545"));
        assert_eq!(env.infura_key.as_deref(), Some("key123"));
        assert_eq!(env.mnemonic.as_deref(), Some("word word word"));
        assert_eq!(env.private_key.as_deref(), Some("0xabc"));
        assert_eq!(env.etherscan_api_key.as_deref(), Some("etherscan"));
        assert_eq!(env.solidity_version.as_deref(), Some("0.8.4"));
        assert_eq!(env.solidity_settings.as_deref(), Some("{}"));
    }

    #[test]
    fn empty_values_normalize_to_none() {
        let env = EnvInput::from_map(&map(&[("PK", ""), ("MNEMONIC", "phrase")]));
        assert_eq!(env.private_key, None);
        assert_eq!(env.mnemonic.as_deref(), Some("phrase"));
    }

    #[test]
    fn unrelated_vars_are_ignored() {
        let env = EnvInput::from_map(&map(&[("PATH", "/usr/bin"), ("HOME", "/root")]));
        assert_eq!(env, EnvInput::default());
    }

    #[test]
    fn parse_dotenv_basic() {
        let content = "INFURA_KEY=value\nPK=123";
        let env = parse_dotenv(content, Path::new("test")).unwrap();
        assert_eq!(env.get("INFURA_KEY"), Some(&"value".to_string()));
        assert_eq!(env.get("PK"), Some(&"123".to_string()));
    }

    #[test]
    fn parse_dotenv_strips_quotes() {
        let content = "MNEMONIC=\"candy maple cake\"\nPK='0xabc'";
        let env = parse_dotenv(content, Path::new("test")).unwrap();
        assert_eq!(env.get("MNEMONIC"), Some(&"candy maple cake".to_string()));
        assert_eq!(env.get("PK"), Some(&"0xabc".to_string()));
    }

    #[test]
    fn parse_dotenv_skips_comments_and_empty() {
        let content = "# Comment\n\nPK=value\n  # Another comment";
        let env = parse_dotenv(content, Path::new("test")).unwrap();
        assert_eq!(env.len(), 1);
        assert!(env.contains_key("PK"));
    }

    #[test]
    fn parse_dotenv_handles_equals_in_value() {
        let content = "NODE_URL=https://rpc.example.org/path?token=value";
        let env = parse_dotenv(content, Path::new("test")).unwrap();
        assert_eq!(
            env.get("NODE_URL"),
            Some(&"https://rpc.example.org/path?token=value".to_string())
        );
    }

    #[test]
    fn parse_dotenv_rejects_invalid_lines() {
        let content = "VALID=true\ninvalid line\nOTHER=value";
        let result = parse_dotenv(content, Path::new("test"));
        assert!(matches!(result, Err(ChainrigError::EnvParse { .. })));
    }

    #[test]
    fn load_env_file_works() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        fs::write(&path, "INFURA_KEY=from-file").unwrap();

        let env = load_env_file(&path).unwrap();
        assert_eq!(env.get("INFURA_KEY"), Some(&"from-file".to_string()));
    }

    #[test]
    fn merge_env_overlay_wins() {
        let base = map(&[("PK", "file-value"), ("MNEMONIC", "file-phrase")]);
        let overlay = map(&[("PK", "process-value")]);

        let result = merge_env(&base, &overlay);
        assert_eq!(result.get("PK"), Some(&"process-value".to_string()));
        assert_eq!(result.get("MNEMONIC"), Some(&"file-phrase".to_string()));
    }

    #[test]
    fn debug_redacts_secret_fields() {
        let env = EnvInput::from_map(&map(&[("PK", "0xsecret"), ("NODE_URL", "http://x")]));
        let rendered = format!("{:?}", env);
        assert!(!rendered.contains("0xsecret"));
        assert!(rendered.contains("http://x"));
    }
}
