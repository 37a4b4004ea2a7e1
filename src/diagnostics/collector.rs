//! Finding collection for a single job

use super::report::StepFinding;

/// Collects findings while a job is being diagnosed
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    warnings: Vec<String>,
    step_findings: Vec<StepFinding>,
}

impl DiagnosticCollector {
    /// Create a new empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a job-level warning
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add a finding for the step with the given label
    pub fn add_step_finding(&mut self, step: &str, message: impl Into<String>) {
        self.step_findings.push(StepFinding::new(step, message));
    }

    /// Add several findings for one step, keeping their order
    pub fn extend_step_findings<I>(&mut self, step: &str, messages: I)
    where
        I: IntoIterator<Item = String>,
    {
        for message in messages {
            self.add_step_finding(step, message);
        }
    }

    /// Convert into the job's warnings and step findings
    pub fn into_parts(self) -> (Vec<String>, Vec<StepFinding>) {
        (self.warnings, self.step_findings)
    }
}
