//! YAML parsing with error recovery
//!
//! A workflow that fails to parse still gets diagnosed: the caller receives an
//! empty document together with a readable error message, and extraction runs
//! over the empty tree.

use serde_yaml::Value;

/// Result of parsing a workflow document
#[derive(Debug)]
pub struct ParseResult {
    /// The parsed tree, `Value::Null` when parsing failed
    pub value: Value,
    /// Parse failure message, if any
    pub error: Option<String>,
}

impl ParseResult {
    /// Whether parsing was successful
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Parse YAML text into a generic tree
///
/// Never fails: a syntax error is turned into a message of the form
/// `Failed to parse YAML: <reason> (line L, column C)`. Merge keys
/// (`<<: *anchor`) are resolved before the tree is returned.
pub fn parse_yaml(text: &str) -> ParseResult {
    let parsed = serde_yaml::from_str::<Value>(text).and_then(|mut value| {
        value.apply_merge()?;
        Ok(value)
    });

    match parsed {
        Ok(value) => ParseResult { value, error: None },
        Err(err) => ParseResult {
            value: Value::Null,
            error: Some(parse_failure_message(&err)),
        },
    }
}

/// Format a serde_yaml error as a parse failure message
fn parse_failure_message(err: &serde_yaml::Error) -> String {
    let message = err.to_string();
    let clean_message = clean_error_message(&message);

    tracing::warn!("YAML parse failure: {}", message);

    match extract_error_position(&message) {
        Some((line, column)) => format!(
            "Failed to parse YAML: {} (line {}, column {})",
            clean_message, line, column
        ),
        None => format!("Failed to parse YAML: {}", clean_message),
    }
}

/// Extract line and column from a serde_yaml error message
///
/// serde_yaml errors often look like: "... at line 5 column 10". Positions
/// are 1-indexed and returned as such.
fn extract_error_position(message: &str) -> Option<(u32, u32)> {
    use lazy_static::lazy_static;
    use regex::Regex;

    lazy_static! {
        static ref POSITION_RE: Regex = Regex::new(r"at line (\d+) column (\d+)").unwrap();
    }

    let caps = POSITION_RE.captures(message)?;
    let line = caps.get(1)?.as_str().parse().ok()?;
    let column = caps.get(2)?.as_str().parse().ok()?;
    Some((line, column))
}

/// Remove the trailing "at line X column Y" suffix from an error message
fn clean_error_message(message: &str) -> String {
    use lazy_static::lazy_static;
    use regex::Regex;

    lazy_static! {
        static ref POSITION_SUFFIX_RE: Regex = Regex::new(r",?\s+at line \d+ column \d+$").unwrap();
    }

    POSITION_SUFFIX_RE.replace(message, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_yaml() {
        let result = parse_yaml("key: value\nlist:\n  - item1\n  - item2");

        assert!(result.is_ok());
        assert!(result.value.is_mapping());
    }

    #[test]
    fn test_parse_invalid_yaml_indentation() {
        let result = parse_yaml("key: value\n  bad: indentation");

        assert!(!result.is_ok());
        assert!(result.value.is_null());
        let error = result.error.unwrap();
        assert!(error.starts_with("Failed to parse YAML: "), "got: {}", error);
        assert!(error.contains("(line 2, column"), "got: {}", error);
    }

    #[test]
    fn test_parse_invalid_yaml_unclosed_quote() {
        let result = parse_yaml("key: \"unclosed");

        assert!(!result.is_ok());
        assert!(result.value.is_null());
    }

    #[test]
    fn test_parse_duplicate_key_is_error() {
        let result = parse_yaml("jobs: {}\njobs: {}\n");

        assert!(!result.is_ok());
    }

    #[test]
    fn test_merge_keys_are_resolved() {
        let result = parse_yaml("base: &base {runs-on: ubuntu-latest}\njob:\n  <<: *base\n  name: x\n");

        assert!(result.is_ok());
        let job = result.value.get("job").unwrap();
        assert_eq!(job.get("runs-on").and_then(Value::as_str), Some("ubuntu-latest"));
        assert!(job.get("<<").is_none());
    }

    #[test]
    fn test_invalid_merge_is_parse_failure() {
        let result = parse_yaml("job:\n  <<: just-a-string\n");

        assert!(result.value.is_null());
        assert!(result.error.unwrap().starts_with("Failed to parse YAML: "));
    }

    #[test]
    fn test_extract_error_position() {
        assert_eq!(extract_error_position("error at line 5 column 10"), Some((5, 10)));
        assert_eq!(extract_error_position("some error without position"), None);
        assert_eq!(
            extract_error_position("mapping values at line 10 column 25"),
            Some((10, 25))
        );
    }

    #[test]
    fn test_clean_error_message() {
        assert_eq!(
            clean_error_message("invalid YAML at line 5 column 10"),
            "invalid YAML"
        );
        assert_eq!(
            clean_error_message("some error without position"),
            "some error without position"
        );
        assert_eq!(
            clean_error_message("mapping values are not allowed in this context at line 2 column 3"),
            "mapping values are not allowed in this context"
        );
    }

    #[test]
    fn test_parse_empty_yaml() {
        let result = parse_yaml("");

        // Empty YAML parses as null
        assert!(result.is_ok());
        assert!(result.value.is_null());
    }

    #[test]
    fn test_parse_yaml_comment_only() {
        let result = parse_yaml("# This is a comment\n# Another comment");

        assert!(result.is_ok());
    }

    #[test]
    fn test_github_expressions_parse_as_strings() {
        let result = parse_yaml("if: ${{ github.event_name == 'push' }}\n");

        assert!(result.is_ok());
        assert_eq!(
            result.value.get("if").and_then(Value::as_str),
            Some("${{ github.event_name == 'push' }}")
        );
    }
}
