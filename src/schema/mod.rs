//! Schema module for GitHub Actions workflow definitions

mod actions;
mod workflows;

pub use actions::*;
pub use workflows::*;
