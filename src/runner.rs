//! Batch diagnosis of a workflows directory
//!
//! Documents are independent, so each one is diagnosed on its own blocking
//! task. Results are tagged with their discovery index and put back in
//! discovery order before they are returned.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task::JoinSet;

use crate::diagnostics::{WorkflowDiagnoser, WorkflowReport};
use crate::document::{discover_workflows, WorkflowDocument};
use crate::error::Result;

/// Message recorded for a document whose diagnosis task did not finish
pub const TASK_FAILED_MESSAGE: &str = "Diagnosis did not complete for this workflow.";

/// Discover and diagnose every workflow in a directory
///
/// Only a failure to enumerate the directory is an error; problems with
/// individual documents are reported inside their reports.
pub async fn diagnose_directory(
    dir: &Path,
    diagnoser: Arc<WorkflowDiagnoser>,
) -> Result<Vec<WorkflowReport>> {
    let paths = discover_workflows(dir)?;
    let reports = diagnose_paths(paths, diagnoser).await;

    tracing::info!(
        "Diagnosed {} workflow(s) in {}: {} finding(s)",
        reports.len(),
        dir.display(),
        reports.iter().map(WorkflowReport::finding_count).sum::<usize>()
    );

    Ok(reports)
}

/// Diagnose the given files concurrently, returning reports in input order
pub async fn diagnose_paths(
    paths: Vec<PathBuf>,
    diagnoser: Arc<WorkflowDiagnoser>,
) -> Vec<WorkflowReport> {
    let mut join_set = JoinSet::new();

    for (index, path) in paths.iter().cloned().enumerate() {
        let diagnoser = Arc::clone(&diagnoser);
        join_set.spawn_blocking(move || {
            let document = WorkflowDocument::load(&path);
            (index, diagnoser.diagnose_document(&document))
        });
    }

    let mut slots: Vec<Option<WorkflowReport>> = paths.iter().map(|_| None).collect();

    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((index, report)) => slots[index] = Some(report),
            Err(err) => tracing::warn!("Workflow diagnosis task failed: {}", err),
        }
    }

    slots
        .into_iter()
        .zip(paths)
        .map(|(report, path)| report.unwrap_or_else(|| failed_report(path)))
        .collect()
}

fn failed_report(path: PathBuf) -> WorkflowReport {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    WorkflowReport::failed(path, name, TASK_FAILED_MESSAGE.to_string())
}
