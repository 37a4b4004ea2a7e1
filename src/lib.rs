//! workflow-diagnose: static diagnostics for GitHub Actions workflows
//!
//! This library provides the pieces of the `workflow-diagnose` tool:
//! - Workflow discovery and loading
//! - YAML parsing with error recovery
//! - Rule evaluation over triggers, jobs, matrices and action references
//! - Text and JSON report rendering
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! use workflow_diagnose::config::RuleConfig;
//! use workflow_diagnose::diagnostics::WorkflowDiagnoser;
//!
//! let diagnoser = WorkflowDiagnoser::new(Arc::new(RuleConfig::default()));
//! let text = "on: push\njobs:\n  build:\n    runs-on: ubuntu-latest\n    steps:\n      - uses: actions/checkout@v3\n";
//! let report = diagnoser.diagnose(Path::new("ci.yml"), text);
//!
//! assert_eq!(report.triggers, vec!["push"]);
//! assert_eq!(report.jobs[0].step_findings.len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod parser;
pub mod render;
pub mod runner;
pub mod schema;

pub use diagnostics::{JobReport, StepFinding, WorkflowDiagnoser, WorkflowReport};
pub use error::{DiagnoseError, Result};
