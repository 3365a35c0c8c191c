//! Compiler version and optimizer selection.
//!
//! The active compiler is chosen from environment overrides with fixed
//! defaults, and the resulting ordered list always carries two legacy
//! versions after the primary so older contract sources compile unchanged.

use crate::error::{ChainrigError, Result};
use serde::Serialize;

/// Default primary compiler version when no override is supplied.
pub const DEFAULT_SOLC_VERSION: &str = "0.7.6";

/// Fixed legacy versions appended after the primary, in order.
pub const LEGACY_SOLC_VERSIONS: &[&str] = &["0.6.12", "0.5.17"];

/// A compiler version plus its optional optimizer settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompilerSpec {
    /// Semantic version string, e.g. `0.7.6`.
    pub version: String,
    /// Optimizer settings object, `None` means compiler defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<serde_json::Value>,
}

impl CompilerSpec {
    /// A spec with no optimizer override.
    pub fn plain(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            settings: None,
        }
    }
}

/// Produce the ordered compiler list.
///
/// The primary spec comes first: its version is the non-empty environment
/// override or [`DEFAULT_SOLC_VERSION`], its settings are parsed from the
/// JSON override when present. The legacy versions follow in fixed order
/// with no settings. Order matters for ambiguous source resolution.
///
/// # Errors
///
/// `InvalidSettings` when the settings override is not valid JSON; the parse
/// failure propagates, it is never swallowed.
pub fn select_compilers(
    version_override: Option<&str>,
    settings_json: Option<&str>,
) -> Result<Vec<CompilerSpec>> {
    let version = version_override
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_SOLC_VERSION);

    let settings = settings_json
        .map(|raw| {
            serde_json::from_str::<serde_json::Value>(raw).map_err(|e| {
                ChainrigError::InvalidSettings {
                    message: e.to_string(),
                }
            })
        })
        .transpose()?;

    let mut compilers = vec![CompilerSpec {
        version: version.to_string(),
        settings,
    }];
    compilers.extend(LEGACY_SOLC_VERSIONS.iter().map(|v| CompilerSpec::plain(*v)));

    Ok(compilers)
}
