//! Diagnostics module: fact extraction and rule evaluation

mod actions;
mod collector;
mod matrix;
mod report;
mod triggers;
mod value;
mod workflow_diagnoser;

pub use actions::{
    check_action_version, ActionCheck, ActionCheckRegistry, ActionRef, ArtifactRetention,
    FloatingPythonVersion, FLOATING_PYTHON_MESSAGE, MISSING_RETENTION_MESSAGE, UNPINNED_MESSAGE,
};
pub use collector::DiagnosticCollector;
pub use matrix::extract_matrix_axes;
pub use report::{JobReport, StepFinding, WorkflowReport};
pub use triggers::{
    find_trigger_section, normalize_triggers, TriggerSection, BOOLEAN_TRIGGER_KEY_MESSAGE,
};
pub use value::StepInputs;
pub use workflow_diagnoser::{
    WorkflowDiagnoser, MISSING_JOB_PERMISSIONS_MESSAGE, NOT_A_MAPPING_MESSAGE,
};
