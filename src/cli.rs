use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented text report
    Text,
    /// JSON array of workflow reports
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "workflow-diagnose")]
#[command(about = "Diagnose GitHub Actions workflow risks and common issues.", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing workflow YAML files
    #[arg(long, default_value = ".github/workflows")]
    pub workflows_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// YAML file overriding the built-in rule tables
    #[arg(long, env = "WORKFLOW_DIAGNOSE_CONFIG")]
    pub config: Option<PathBuf>,
}
