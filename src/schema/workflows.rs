//! GitHub Actions workflow keys and structure definitions
//!
//! Only the keys the diagnostics read are listed here; everything else in a
//! workflow document is ignored.

/// Key holding the trigger block
pub const TRIGGER_KEY: &str = "on";
/// Key holding the declared workflow name
pub const NAME_KEY: &str = "name";
/// Key holding a permissions block (workflow or job level)
pub const PERMISSIONS_KEY: &str = "permissions";
/// Key holding the job mapping
pub const JOBS_KEY: &str = "jobs";

// Job keys
pub const RUNS_ON_KEY: &str = "runs-on";
pub const STRATEGY_KEY: &str = "strategy";
pub const MATRIX_KEY: &str = "matrix";
pub const STEPS_KEY: &str = "steps";

/// Matrix axis that adds combinations instead of declaring a dimension
pub const MATRIX_INCLUDE_KEY: &str = "include";

// Step keys
pub const STEP_ID_KEY: &str = "id";
pub const USES_KEY: &str = "uses";
pub const WITH_KEY: &str = "with";

/// Runner label used when a job does not declare `runs-on`
pub const UNKNOWN_RUNNER: &str = "unknown";

/// Label used for steps with no name, id or action reference
pub const UNNAMED_STEP: &str = "Unnamed step";

/// File extensions recognised as workflow documents, in discovery order
pub const WORKFLOW_EXTENSIONS: &[&str] = &["yml", "yaml"];

/// Discovery group of a workflow extension, `None` for other files
pub fn workflow_extension_group(extension: &str) -> Option<usize> {
    WORKFLOW_EXTENSIONS.iter().position(|e| *e == extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_extension_group() {
        assert_eq!(workflow_extension_group("yml"), Some(0));
        assert_eq!(workflow_extension_group("yaml"), Some(1));
        assert_eq!(workflow_extension_group("YML"), None);
        assert_eq!(workflow_extension_group("json"), None);
        assert_eq!(workflow_extension_group(""), None);
    }

    #[test]
    fn test_yml_is_discovered_before_yaml() {
        assert_eq!(WORKFLOW_EXTENSIONS, &["yml", "yaml"]);
    }
}
