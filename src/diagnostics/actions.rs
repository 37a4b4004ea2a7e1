//! Action reference rules
//!
//! Every step with a `uses` reference goes through the version rules and
//! then through whatever parameter checks are registered for its action.

use std::collections::HashMap;

use super::value::StepInputs;
use crate::config::RuleConfig;
use crate::schema;

pub const UNPINNED_MESSAGE: &str =
    "Action is not version pinned; use a tagged release or commit SHA.";
pub const FLOATING_PYTHON_MESSAGE: &str =
    "Python version is floating; pin to a specific minor version to avoid surprise upgrades.";
pub const MISSING_RETENTION_MESSAGE: &str =
    "Upload-artifact retention is not set; define retention-days to control storage costs.";

/// A parsed `uses` reference: `owner/repo[/path]` plus an optional `@version`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionRef<'a> {
    /// Reference without the version suffix
    pub name: &'a str,
    /// Everything after the first `@`
    pub version: Option<&'a str>,
}

impl<'a> ActionRef<'a> {
    pub fn parse(reference: &'a str) -> Self {
        match reference.split_once(schema::VERSION_SEPARATOR) {
            Some((name, version)) => Self {
                name,
                version: Some(version),
            },
            None => Self {
                name: reference,
                version: None,
            },
        }
    }
}

/// Version rules: unpinned, floating and outdated references
///
/// An unpinned reference yields only the unpinned finding. The floating and
/// outdated checks are independent and may both fire.
pub fn check_action_version(action: &ActionRef<'_>, config: &RuleConfig) -> Vec<String> {
    let version = match action.version {
        Some(v) => v,
        None => return vec![UNPINNED_MESSAGE.to_string()],
    };

    let mut findings = Vec::new();

    if config.is_floating_ref(version) {
        findings.push(format!(
            "Action {} uses floating ref '{}'. Prefer a stable tag.",
            action.name, version
        ));
    }

    if let Some(recommended) = config.recommended_version(action.name) {
        if !version.starts_with(recommended) {
            findings.push(format!(
                "Upgrade {} to {} for the latest security and features.",
                action.name, recommended
            ));
        }
    }

    findings
}

/// A parameter check for one action
pub trait ActionCheck: Send + Sync {
    /// Inspect the step's inputs and return finding messages
    fn check(&self, inputs: &StepInputs<'_>, config: &RuleConfig) -> Vec<String>;
}

/// `actions/setup-python`: `python-version` must not float
#[derive(Debug, Default)]
pub struct FloatingPythonVersion;

impl ActionCheck for FloatingPythonVersion {
    fn check(&self, inputs: &StepInputs<'_>, config: &RuleConfig) -> Vec<String> {
        let version = inputs.text(schema::PYTHON_VERSION_INPUT);
        if config.is_floating_python_version(&version) {
            vec![FLOATING_PYTHON_MESSAGE.to_string()]
        } else {
            Vec::new()
        }
    }
}

/// `actions/upload-artifact`: `retention-days` must be declared
#[derive(Debug, Default)]
pub struct ArtifactRetention;

impl ActionCheck for ArtifactRetention {
    fn check(&self, inputs: &StepInputs<'_>, _config: &RuleConfig) -> Vec<String> {
        if inputs.contains(schema::RETENTION_DAYS_INPUT) {
            Vec::new()
        } else {
            vec![MISSING_RETENTION_MESSAGE.to_string()]
        }
    }
}

/// Parameter checks keyed by action name (the reference without `@version`)
#[derive(Default)]
pub struct ActionCheckRegistry {
    checks: HashMap<String, Vec<Box<dyn ActionCheck>>>,
}

impl ActionCheckRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in checks
    pub fn with_builtin_checks() -> Self {
        let mut registry = Self::new();
        registry.register(schema::SETUP_PYTHON_ACTION, FloatingPythonVersion);
        registry.register(schema::UPLOAD_ARTIFACT_ACTION, ArtifactRetention);
        registry
    }

    /// Register a check; checks for the same action run in registration order
    pub fn register<C>(&mut self, action: impl Into<String>, check: C)
    where
        C: ActionCheck + 'static,
    {
        self.checks
            .entry(action.into())
            .or_default()
            .push(Box::new(check));
    }

    /// Run every check registered for an action
    pub fn run(&self, action: &str, inputs: &StepInputs<'_>, config: &RuleConfig) -> Vec<String> {
        self.checks
            .get(action)
            .map(|checks| {
                checks
                    .iter()
                    .flat_map(|check| check.check(inputs, config))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of actions with at least one check
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl std::fmt::Debug for ActionCheckRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut actions: Vec<&String> = self.checks.keys().collect();
        actions.sort();
        f.debug_struct("ActionCheckRegistry")
            .field("actions", &actions)
            .finish()
    }
}
