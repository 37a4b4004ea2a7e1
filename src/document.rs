//! Workflow document discovery and loading

use std::path::{Path, PathBuf};

use crate::error::{DiagnoseError, Result};
use crate::schema;

/// A workflow file and its text
#[derive(Debug, Clone)]
pub struct WorkflowDocument {
    /// Path the document was read from
    pub path: PathBuf,
    /// The document text content, empty if it could not be read
    pub text: String,
    /// Read failure message, if any
    pub read_error: Option<String>,
}

impl WorkflowDocument {
    /// Create a document from text already in memory
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
            read_error: None,
        }
    }

    /// Read a document from disk
    ///
    /// A read failure does not fail the run; the document is kept with empty
    /// text and the failure is reported with its diagnostics.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::new(path, text),
            Err(err) => {
                tracing::warn!("Failed to read {}: {}", path.display(), err);
                Self {
                    path: path.to_path_buf(),
                    text: String::new(),
                    read_error: Some(format!("Failed to read workflow: {}", err)),
                }
            }
        }
    }
}

/// List the workflow files of a directory in discovery order
///
/// Files ending in `.yml` come first, sorted, followed by files ending in
/// `.yaml`, sorted. Subdirectories are not searched.
pub fn discover_workflows(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir_error = |source| DiagnoseError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut groups: Vec<Vec<PathBuf>> = vec![Vec::new(); schema::WORKFLOW_EXTENSIONS.len()];

    for entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if !path.is_file() {
            continue;
        }

        let group = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(schema::workflow_extension_group);

        if let Some(index) = group {
            groups[index].push(path);
        }
    }

    for group in &mut groups {
        group.sort();
    }

    let paths: Vec<PathBuf> = groups.into_iter().flatten().collect();
    tracing::debug!("Discovered {} workflow(s) in {}", paths.len(), dir.display());
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;

    #[test]
    fn test_discovery_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.yaml", "z.yml", "a.yaml", "c.yml", "notes.txt", "README.md"] {
            fs::write(dir.path().join(name), "on: push\n").unwrap();
        }
        fs::create_dir(dir.path().join("nested.yml")).unwrap();

        let names: Vec<String> = discover_workflows(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["c.yml", "z.yml", "a.yaml", "b.yaml"]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        assert_matches!(
            discover_workflows(&missing),
            Err(DiagnoseError::ReadDir { path, .. }) if path == missing
        );
    }

    #[test]
    fn test_load_reads_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ci.yml");
        fs::write(&path, "name: CI\n").unwrap();

        let document = WorkflowDocument::load(&path);
        assert_eq!(document.text, "name: CI\n");
        assert!(document.read_error.is_none());
    }

    #[test]
    fn test_load_failure_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let document = WorkflowDocument::load(&dir.path().join("gone.yml"));

        assert!(document.text.is_empty());
        assert!(document
            .read_error
            .unwrap()
            .starts_with("Failed to read workflow: "));
    }
}
