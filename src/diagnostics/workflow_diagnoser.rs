//! Workflow diagnosis
//!
//! Walks a parsed workflow document and assembles its report:
//! - workflow name, triggers (with boolean `on` recovery) and permissions
//! - per job: runner, matrix axes, permissions
//! - per step: action version rules and action parameter checks
//! - per job: the least-privilege permissions rule

use std::path::Path;
use std::sync::Arc;

use serde_yaml::Value;

use super::actions::{check_action_version, ActionCheckRegistry, ActionRef};
use super::collector::DiagnosticCollector;
use super::matrix::extract_matrix_axes;
use super::report::{JobReport, WorkflowReport};
use super::triggers::{find_trigger_section, normalize_triggers};
use super::value::{has_key, meaningful_text, value_text, StepInputs};
use crate::config::RuleConfig;
use crate::document::WorkflowDocument;
use crate::parser::parse_yaml;
use crate::schema;

pub const MISSING_JOB_PERMISSIONS_MESSAGE: &str =
    "Job is missing explicit permissions; consider defining least privilege permissions.";

/// Anomaly recorded for a document whose root is a sequence or scalar
pub const NOT_A_MAPPING_MESSAGE: &str = "Workflow document must be a YAML mapping";

/// Evaluates the diagnostic rules over workflow documents
///
/// Holds only immutable state, so one instance can be shared across threads.
#[derive(Debug)]
pub struct WorkflowDiagnoser {
    config: Arc<RuleConfig>,
    checks: ActionCheckRegistry,
}

impl WorkflowDiagnoser {
    /// Create a diagnoser with the built-in action checks
    pub fn new(config: Arc<RuleConfig>) -> Self {
        Self::with_checks(config, ActionCheckRegistry::with_builtin_checks())
    }

    /// Create a diagnoser with a custom set of action checks
    pub fn with_checks(config: Arc<RuleConfig>, checks: ActionCheckRegistry) -> Self {
        Self { config, checks }
    }

    /// Diagnose a loaded document, including one that failed to load
    pub fn diagnose_document(&self, document: &WorkflowDocument) -> WorkflowReport {
        let mut report = self.diagnose(&document.path, &document.text);
        if let Some(error) = &document.read_error {
            report.parse_errors.insert(0, error.clone());
        }
        report
    }

    /// Parse and diagnose workflow text
    pub fn diagnose(&self, path: &Path, text: &str) -> WorkflowReport {
        let parsed = parse_yaml(text);
        let parse_errors: Vec<String> = parsed.error.into_iter().collect();
        self.diagnose_value(path, &parsed.value, parse_errors)
    }

    /// Diagnose an already parsed document
    ///
    /// `parse_errors` carries any anomalies found before this point; the
    /// returned report appends its own after them.
    pub fn diagnose_value(
        &self,
        path: &Path,
        root: &Value,
        mut parse_errors: Vec<String>,
    ) -> WorkflowReport {
        if !root.is_mapping() && !root.is_null() {
            parse_errors.push(NOT_A_MAPPING_MESSAGE.to_string());
        }

        let name = meaningful_text(root.get(schema::NAME_KEY))
            .unwrap_or_else(|| file_stem(path));

        let trigger_section = find_trigger_section(root);
        if let Some(anomaly) = trigger_section.anomaly {
            tracing::debug!("{}: trigger block found under a boolean key", path.display());
            parse_errors.push(anomaly.to_string());
        }
        let triggers = normalize_triggers(trigger_section.value);

        let jobs: Vec<JobReport> = root
            .get(schema::JOBS_KEY)
            .and_then(Value::as_mapping)
            .map(|jobs| {
                jobs.iter()
                    .map(|(job_name, body)| self.diagnose_job(&value_text(job_name), body))
                    .collect()
            })
            .unwrap_or_default();

        tracing::debug!(
            "{}: {} trigger(s), {} job(s)",
            path.display(),
            triggers.len(),
            jobs.len()
        );

        WorkflowReport {
            path: path.to_path_buf(),
            name,
            triggers,
            has_permissions: has_key(root, schema::PERMISSIONS_KEY),
            jobs,
            parse_errors,
        }
    }

    /// Diagnose one job body; non-mapping bodies behave as empty jobs
    fn diagnose_job(&self, name: &str, body: &Value) -> JobReport {
        let runs_on = body
            .get(schema::RUNS_ON_KEY)
            .filter(|v| !v.is_null())
            .map(value_text)
            .unwrap_or_else(|| schema::UNKNOWN_RUNNER.to_string());
        let has_permissions = has_key(body, schema::PERMISSIONS_KEY);
        let matrix = extract_matrix_axes(body.get(schema::STRATEGY_KEY));

        let mut collector = DiagnosticCollector::new();

        let steps = body
            .get(schema::STEPS_KEY)
            .and_then(Value::as_sequence)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for step in steps.iter().filter(|step| step.is_mapping()) {
            self.inspect_step(step, &mut collector);
        }

        if !has_permissions {
            collector.add_warning(MISSING_JOB_PERMISSIONS_MESSAGE);
        }

        let (warnings, step_findings) = collector.into_parts();

        JobReport {
            name: name.to_string(),
            runs_on,
            matrix,
            has_permissions,
            warnings,
            step_findings,
        }
    }

    /// Apply the action rules to one step
    ///
    /// Steps without a string `uses` (e.g. `run` steps) produce no findings.
    fn inspect_step(&self, step: &Value, collector: &mut DiagnosticCollector) {
        let reference = match step.get(schema::USES_KEY).and_then(Value::as_str) {
            Some(r) => r,
            None => return,
        };

        let label = step_label(step);
        let action = ActionRef::parse(reference);
        let inputs = StepInputs::new(step.get(schema::WITH_KEY));

        collector.extend_step_findings(&label, check_action_version(&action, &self.config));
        collector.extend_step_findings(&label, self.checks.run(action.name, &inputs, &self.config));
    }
}

/// Step label: name, else id, else action reference, else "Unnamed step"
fn step_label(step: &Value) -> String {
    [schema::NAME_KEY, schema::STEP_ID_KEY, schema::USES_KEY]
        .iter()
        .find_map(|key| meaningful_text(step.get(*key)))
        .unwrap_or_else(|| schema::UNNAMED_STEP.to_string())
}

/// Base name of a path without its extension
fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| path.display().to_string())
}
