//! Parser module for workflow YAML

mod yaml;

pub use yaml::{parse_yaml, ParseResult};
