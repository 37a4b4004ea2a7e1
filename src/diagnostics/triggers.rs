//! Trigger extraction
//!
//! `on` may be a single event, a list of events or a mapping of events to
//! their filters. A YAML 1.1 reader turns an unquoted `on` into the boolean
//! `true`, so a boolean key standing where `on` should be is recovered as the
//! trigger block.

use serde_yaml::Value;

use super::value::value_text;
use crate::schema;

/// Anomaly recorded when the trigger block sits under a boolean key
pub const BOOLEAN_TRIGGER_KEY_MESSAGE: &str =
    "Workflow key 'on' parsed as boolean; quote it to avoid YAML 1.1 pitfalls.";

/// Where the trigger block was found
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerSection<'a> {
    /// The trigger block, if any
    pub value: Option<&'a Value>,
    /// Anomaly to report, if the block was recovered from a boolean key
    pub anomaly: Option<&'static str>,
}

/// Locate the trigger block in a workflow document
pub fn find_trigger_section(root: &Value) -> TriggerSection<'_> {
    let value = root.get(schema::TRIGGER_KEY).filter(|v| !v.is_null());
    if value.is_some() {
        return TriggerSection { value, anomaly: None };
    }

    let recovered = root
        .as_mapping()
        .and_then(|map| map.iter().find(|(key, _)| key.is_bool()))
        .map(|(_, value)| value);

    match recovered {
        Some(value) => TriggerSection {
            value: Some(value),
            anomaly: Some(BOOLEAN_TRIGGER_KEY_MESSAGE),
        },
        None => TriggerSection {
            value: None,
            anomaly: None,
        },
    }
}

/// Normalize a trigger block of any shape into event names
pub fn normalize_triggers(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Mapping(map)) => map.keys().map(value_text).collect(),
        Some(Value::Sequence(items)) => items.iter().map(value_text).collect(),
        Some(scalar @ (Value::String(_) | Value::Number(_) | Value::Bool(_))) => {
            vec![value_text(scalar)]
        }
        _ => Vec::new(),
    }
}
