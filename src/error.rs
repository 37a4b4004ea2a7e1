//! Errors that abort a diagnostic run
//!
//! Anything wrong with an individual workflow ends up inside its report;
//! only problems with the run's own inputs are errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a whole run
#[derive(Debug, Error)]
pub enum DiagnoseError {
    /// The workflows directory could not be enumerated
    #[error("failed to read workflows directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rule config file could not be read
    #[error("failed to read rule config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rule config file is not valid YAML for the expected shape
    #[error("invalid rule config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type Result<T> = std::result::Result<T, DiagnoseError>;
