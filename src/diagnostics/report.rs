//! Report data model

use std::path::PathBuf;

use serde::Serialize;

/// A single rule violation attributed to one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepFinding {
    /// Step label: name, else id, else action reference, else "Unnamed step"
    pub step: String,
    pub message: String,
}

impl StepFinding {
    pub fn new(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            message: message.into(),
        }
    }
}

/// Facts and findings for one job
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobReport {
    pub name: String,
    pub runs_on: String,
    /// Axis summaries such as `os=3 value(s)`
    pub matrix: Vec<String>,
    pub has_permissions: bool,
    pub warnings: Vec<String>,
    pub step_findings: Vec<StepFinding>,
}

/// Facts and findings for one workflow document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowReport {
    pub path: PathBuf,
    pub name: String,
    pub triggers: Vec<String>,
    pub has_permissions: bool,
    pub jobs: Vec<JobReport>,
    pub parse_errors: Vec<String>,
}

impl WorkflowReport {
    /// Report for a document that could not be diagnosed at all
    pub fn failed(path: PathBuf, name: String, error: String) -> Self {
        Self {
            path,
            name,
            triggers: Vec::new(),
            has_permissions: false,
            jobs: Vec::new(),
            parse_errors: vec![error],
        }
    }

    /// Total number of job warnings and step findings
    pub fn finding_count(&self) -> usize {
        self.jobs
            .iter()
            .map(|job| job.warnings.len() + job.step_findings.len())
            .sum()
    }
}
