//! Report rendering
//!
//! Rendering is a pure function of the reports: the same reports always give
//! the same bytes.

use crate::diagnostics::WorkflowReport;

/// Render reports as indented text, one block per workflow
///
/// Blocks are separated by a blank line and the output always ends with
/// exactly one newline.
pub fn render_text(reports: &[WorkflowReport]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for report in reports {
        lines.push(format!(
            "Workflow: {} ({})",
            report.name,
            report.path.display()
        ));
        for error in &report.parse_errors {
            lines.push(format!("  PARSE ISSUE: {}", error));
        }

        let triggers = if report.triggers.is_empty() {
            "<none>".to_string()
        } else {
            report.triggers.join(", ")
        };
        lines.push(format!("  Triggers: {}", triggers));
        lines.push(format!(
            "  Top-level permissions: {}",
            presence(report.has_permissions)
        ));

        for job in &report.jobs {
            lines.push(format!("  Job: {}", job.name));
            lines.push(format!("    runs-on: {}", job.runs_on));
            if !job.matrix.is_empty() {
                lines.push(format!("    matrix: {}", job.matrix.join(", ")));
            }
            lines.push(format!("    permissions: {}", presence(job.has_permissions)));
            for warning in &job.warnings {
                lines.push(format!("    warning: {}", warning));
            }
            for finding in &job.step_findings {
                lines.push(format!(
                    "    step finding: {} -> {}",
                    finding.step, finding.message
                ));
            }
        }
        lines.push(String::new());
    }

    let mut output = lines.join("\n").trim_end().to_string();
    output.push('\n');
    output
}

/// Render reports as a pretty-printed JSON array
pub fn render_json(reports: &[WorkflowReport]) -> serde_json::Result<String> {
    let mut output = serde_json::to_string_pretty(reports)?;
    output.push('\n');
    Ok(output)
}

fn presence(present: bool) -> &'static str {
    if present {
        "present"
    } else {
        "missing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{JobReport, StepFinding};
    use std::path::PathBuf;

    fn sample_reports() -> Vec<WorkflowReport> {
        vec![
            WorkflowReport {
                path: PathBuf::from(".github/workflows/ci.yml"),
                name: "CI".to_string(),
                triggers: vec!["push".to_string(), "pull_request".to_string()],
                has_permissions: true,
                jobs: vec![JobReport {
                    name: "test".to_string(),
                    runs_on: "ubuntu-latest".to_string(),
                    matrix: vec!["os=2 value(s)".to_string(), "python=3 value(s)".to_string()],
                    has_permissions: false,
                    warnings: vec!["Job is missing explicit permissions.".to_string()],
                    step_findings: vec![StepFinding::new("Checkout", "Upgrade it.")],
                }],
                parse_errors: Vec::new(),
            },
            WorkflowReport {
                path: PathBuf::from(".github/workflows/broken.yaml"),
                name: "broken".to_string(),
                triggers: Vec::new(),
                has_permissions: false,
                jobs: Vec::new(),
                parse_errors: vec!["Failed to parse YAML: bad".to_string()],
            },
        ]
    }

    #[test]
    fn test_render_text() {
        let expected = "\
Workflow: CI (.github/workflows/ci.yml)
  Triggers: push, pull_request
  Top-level permissions: present
  Job: test
    runs-on: ubuntu-latest
    matrix: os=2 value(s), python=3 value(s)
    permissions: missing
    warning: Job is missing explicit permissions.
    step finding: Checkout -> Upgrade it.

Workflow: broken (.github/workflows/broken.yaml)
  PARSE ISSUE: Failed to parse YAML: bad
  Triggers: <none>
  Top-level permissions: missing
";
        assert_eq!(render_text(&sample_reports()), expected);
    }

    #[test]
    fn test_render_is_idempotent() {
        let reports = sample_reports();
        assert_eq!(render_text(&reports), render_text(&reports));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_text(&[]), "\n");
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&sample_reports()).unwrap();
        assert!(json.ends_with("]\n"));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "CI");
        assert_eq!(value[0]["jobs"][0]["step_findings"][0]["step"], "Checkout");
        assert_eq!(value[1]["parse_errors"][0], "Failed to parse YAML: bad");
    }
}
