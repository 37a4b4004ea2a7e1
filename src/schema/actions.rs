//! Built-in rule tables for action references
//!
//! These are the defaults behind [`crate::config::RuleConfig`]; the engine
//! only ever reads them through an injected config.

/// Recommended version prefix for well-known actions
pub const RECOMMENDED_ACTION_VERSIONS: &[(&str, &str)] = &[
    ("actions/checkout", "v4"),
    ("actions/setup-python", "v5"),
    ("actions/upload-artifact", "v4"),
    ("docker/setup-qemu-action", "v3"),
];

/// Refs that follow a moving branch or release, compared case-insensitively
pub const FLOATING_REFS: &[&str] = &["master", "main", "head", "latest"];

/// Suffix marking a floating ref such as `ubuntu-latest` style tags
pub const FLOATING_REF_SUFFIX: &str = "-latest";

/// Substrings that make a `python-version` input float
pub const FLOATING_PYTHON_TOKENS: &[&str] = &["x", "latest", "*"];

/// Separator between action name and version in `uses`
pub const VERSION_SEPARATOR: char = '@';

// Actions with parameter checks
pub const SETUP_PYTHON_ACTION: &str = "actions/setup-python";
pub const UPLOAD_ARTIFACT_ACTION: &str = "actions/upload-artifact";

// Inputs read by the parameter checks
pub const PYTHON_VERSION_INPUT: &str = "python-version";
pub const RETENTION_DAYS_INPUT: &str = "retention-days";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommended_versions_are_unique() {
        let mut names: Vec<&str> = RECOMMENDED_ACTION_VERSIONS.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RECOMMENDED_ACTION_VERSIONS.len());
    }

    #[test]
    fn test_floating_refs_are_lowercase() {
        assert!(FLOATING_REFS.iter().all(|r| *r == r.to_lowercase()));
    }
}
