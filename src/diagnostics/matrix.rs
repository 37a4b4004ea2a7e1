//! Matrix axis extraction

use serde_yaml::Value;

use super::value::value_text;
use crate::schema;

/// Summarize the matrix axes of a job's `strategy` block
///
/// Only sequence-valued axes are reported, as `<axis>=<N> value(s)`. The
/// `include` axis is skipped, as is anything that is not a sequence
/// (expressions such as `${{ fromJSON(...) }}` included).
pub fn extract_matrix_axes(strategy: Option<&Value>) -> Vec<String> {
    let matrix = match strategy
        .and_then(|s| s.get(schema::MATRIX_KEY))
        .and_then(Value::as_mapping)
    {
        Some(m) => m,
        None => return Vec::new(),
    };

    matrix
        .iter()
        .filter(|(axis, _)| axis.as_str() != Some(schema::MATRIX_INCLUDE_KEY))
        .filter_map(|(axis, values)| {
            values
                .as_sequence()
                .map(|values| format!("{}={} value(s)", value_text(axis), values.len()))
        })
        .collect()
}
