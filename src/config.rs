//! Rule configuration
//!
//! The tables the rules consult are built once, wrapped in an `Arc` and
//! handed to every diagnoser. A YAML file may override any of them; fields
//! left out keep their built-in values.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DiagnoseError, Result};
use crate::schema;

/// Immutable tables used by the action rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct RuleConfig {
    /// Action name to recommended version prefix
    pub recommended_versions: BTreeMap<String, String>,
    /// Refs treated as floating, matched case-insensitively
    pub floating_refs: Vec<String>,
    /// Version suffix treated as floating, matched case-sensitively
    pub floating_ref_suffix: String,
    /// Substrings that make a `python-version` input floating
    pub floating_python_tokens: Vec<String>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            recommended_versions: schema::RECOMMENDED_ACTION_VERSIONS
                .iter()
                .map(|(name, version)| (name.to_string(), version.to_string()))
                .collect(),
            floating_refs: schema::FLOATING_REFS.iter().map(|s| s.to_string()).collect(),
            floating_ref_suffix: schema::FLOATING_REF_SUFFIX.to_string(),
            floating_python_tokens: schema::FLOATING_PYTHON_TOKENS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl RuleConfig {
    /// Load overrides from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| DiagnoseError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text).map_err(|source| DiagnoseError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse overrides from YAML text; an empty document yields the defaults
    pub fn from_yaml(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Recommended version prefix for an action, if one is known
    pub fn recommended_version(&self, action: &str) -> Option<&str> {
        self.recommended_versions.get(action).map(String::as_str)
    }

    /// Whether a version ref points at something that can move
    pub fn is_floating_ref(&self, version: &str) -> bool {
        let lowered = version.to_lowercase();
        self.floating_refs
            .iter()
            .any(|r| r.to_lowercase() == lowered)
            || (!self.floating_ref_suffix.is_empty() && version.ends_with(&self.floating_ref_suffix))
    }

    /// Whether a `python-version` value contains a floating token
    pub fn is_floating_python_version(&self, version: &str) -> bool {
        self.floating_python_tokens
            .iter()
            .any(|token| !token.is_empty() && version.contains(token.as_str()))
    }
}
