//! workflow-diagnose: report risks in GitHub Actions workflow files

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use workflow_diagnose::cli::{Cli, OutputFormat};
use workflow_diagnose::config::RuleConfig;
use workflow_diagnose::render::{render_json, render_text};
use workflow_diagnose::runner::diagnose_directory;
use workflow_diagnose::WorkflowDiagnoser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RuleConfig::load(path)?,
        None => RuleConfig::default(),
    };
    let diagnoser = Arc::new(WorkflowDiagnoser::new(Arc::new(config)));

    let reports = diagnose_directory(&cli.workflows_dir, diagnoser).await?;

    let output = match cli.format {
        OutputFormat::Text => render_text(&reports),
        OutputFormat::Json => render_json(&reports).context("failed to serialize reports")?,
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write report")?;

    Ok(())
}
