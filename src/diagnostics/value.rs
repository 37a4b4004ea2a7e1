//! Shape-tolerant accessors over the YAML tree

use serde_yaml::{Mapping, Value};

/// Render any value as text
///
/// Scalars render as their plain text and collections in compact flow style,
/// e.g. `[self-hosted, linux]` or `{group: large}`.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => {
            let items: Vec<String> = items.iter().map(value_text).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", value_text(k), value_text(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, value_text(&tagged.value)),
    }
}

/// Text of a value that carries something, `None` for absent, null, false or empty
pub(crate) fn meaningful_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Sequence(items) if items.is_empty() => None,
        Value::Mapping(map) if map.is_empty() => None,
        other => Some(value_text(other)),
    }
}

/// Whether a key is present in a mapping, whatever its value
pub(crate) fn has_key(value: &Value, key: &str) -> bool {
    value.get(key).is_some()
}

/// The inputs of a step (its `with` block)
///
/// An absent or non-mapping `with` behaves as an empty one.
#[derive(Debug, Clone, Copy)]
pub struct StepInputs<'a>(Option<&'a Mapping>);

impl<'a> StepInputs<'a> {
    pub fn new(with: Option<&'a Value>) -> Self {
        Self(with.and_then(Value::as_mapping))
    }

    /// Look up an input by name
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.0.and_then(|map| map.get(key))
    }

    /// Whether an input is declared at all
    pub fn contains(&self, key: &str) -> bool {
        self.0.map_or(false, |map| map.contains_key(key))
    }

    /// Input coerced to text, empty when absent
    pub fn text(&self, key: &str) -> String {
        self.get(key).map(value_text).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).expect("test YAML should parse")
    }

    #[test]
    fn test_value_text_scalars() {
        assert_eq!(value_text(&yaml("ubuntu-latest")), "ubuntu-latest");
        assert_eq!(value_text(&yaml("5")), "5");
        assert_eq!(value_text(&yaml("true")), "true");
        assert_eq!(value_text(&Value::Null), "null");
    }

    #[test]
    fn test_value_text_collections() {
        assert_eq!(value_text(&yaml("[self-hosted, linux]")), "[self-hosted, linux]");
        assert_eq!(value_text(&yaml("{group: large, labels: [a]}")), "{group: large, labels: [a]}");
    }

    #[test]
    fn test_meaningful_text() {
        assert_eq!(meaningful_text(None), None);
        assert_eq!(meaningful_text(Some(&Value::Null)), None);
        assert_eq!(meaningful_text(Some(&yaml("''"))), None);
        assert_eq!(meaningful_text(Some(&yaml("false"))), None);
        assert_eq!(meaningful_text(Some(&yaml("Build"))), Some("Build".to_string()));
    }

    #[test]
    fn test_has_key_ignores_value() {
        let doc = yaml("permissions:\nother: {}");
        assert!(has_key(&doc, "permissions"));
        assert!(has_key(&doc, "other"));
        assert!(!has_key(&doc, "jobs"));
        assert!(!has_key(&yaml("[permissions]"), "permissions"));
    }

    #[test]
    fn test_step_inputs() {
        let with = yaml("python-version: '3.11'\nretention-days: 5");
        let inputs = StepInputs::new(Some(&with));
        assert!(inputs.contains("retention-days"));
        assert_eq!(inputs.text("python-version"), "3.11");
        assert_eq!(inputs.text("missing"), "");

        let not_a_map = yaml("[a, b]");
        let inputs = StepInputs::new(Some(&not_a_map));
        assert!(!inputs.contains("a"));

        assert!(!StepInputs::new(None).contains("retention-days"));
    }
}
