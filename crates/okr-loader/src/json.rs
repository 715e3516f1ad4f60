//! JSON-file loader
//!
//! Reads a remote-table export that has been dumped to a JSON document.
//! The file is re-read on every call; the dashboard loads once per page
//! refresh, so there is nothing worth caching here.

use crate::error::LoadError;
use crate::loader::ObjectiveLoader;
use crate::record::{hydrate_activity, hydrate_objective, RawExport};
use async_trait::async_trait;
use okr_model::{ActivityEntry, Objective, ObjectiveId};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loader backed by a JSON export file
#[derive(Debug, Clone)]
pub struct JsonFileLoader {
    path: PathBuf,
}

impl JsonFileLoader {
    /// Create a loader for the given export file
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The export file path
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_export(&self) -> Result<RawExport, LoadError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let export: RawExport = serde_json::from_slice(&bytes)?;
        debug!(
            path = %self.path.display(),
            objectives = export.objectives.len(),
            "export read"
        );
        Ok(export)
    }
}

#[async_trait]
impl ObjectiveLoader for JsonFileLoader {
    async fn load_objective(&self, id: &ObjectiveId) -> Result<Objective, LoadError> {
        let export = self.read_export().await?;
        export
            .objectives
            .iter()
            .find(|entry| entry.objective.id == id.as_str())
            .map(|entry| hydrate_objective(&entry.objective))
            .transpose()?
            .ok_or_else(|| LoadError::NotFound(id.clone()))
    }

    async fn load_activity(&self, id: &ObjectiveId) -> Result<Vec<ActivityEntry>, LoadError> {
        let export = self.read_export().await?;
        let entry = export
            .objectives
            .iter()
            .find(|entry| entry.objective.id == id.as_str())
            .ok_or_else(|| LoadError::NotFound(id.clone()))?;
        Ok(hydrate_activity(&entry.activity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use okr_model::RagStatus;
    use std::io::Write;

    const EXPORT: &str = r#"{
        "objectives": [{
            "objective": {
                "id": "obj-1",
                "name": "Retention",
                "status": "amber",
                "departments": [{
                    "id": "d1",
                    "name": "Product",
                    "functional_objectives": [{
                        "id": "fo-1",
                        "name": "Improve Retention",
                        "status": "green",
                        "key_results": [{
                            "id": "kr-1",
                            "name": "Churn below 2%",
                            "status": "amber",
                            "indicators": [{"id": "ind-1", "name": "Churn", "customers": ["c1"]}]
                        }]
                    }]
                }]
            },
            "activity": [{
                "id": "act-1",
                "recorded_at": "2026-03-01T09:00:00Z",
                "actor": "ana",
                "subject_kind": "key-result",
                "subject_id": "kr-1",
                "action": "created"
            }]
        }]
    }"#;

    fn write_export(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn loads_objective_from_file() {
        let file = write_export(EXPORT);
        let loader = JsonFileLoader::new(file.path());

        let tree = loader
            .load_objective(&ObjectiveId::new("obj-1"))
            .await
            .unwrap();
        assert_eq!(tree.status, RagStatus::Amber);
        assert_eq!(tree.departments.len(), 1);
    }

    #[tokio::test]
    async fn loads_activity_from_file() {
        let file = write_export(EXPORT);
        let loader = JsonFileLoader::new(file.path());

        let entries = loader
            .load_activity(&ObjectiveId::new("obj-1"))
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].actor, "ana");
    }

    #[tokio::test]
    async fn unknown_objective_is_not_found() {
        let file = write_export(EXPORT);
        let loader = JsonFileLoader::new(file.path());

        let err = loader
            .load_objective(&ObjectiveId::new("obj-9"))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let loader = JsonFileLoader::new("/nonexistent/export.json");
        let err = loader
            .load_objective(&ObjectiveId::new("obj-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[tokio::test]
    async fn invalid_json_is_malformed() {
        let file = write_export("{not json");
        let loader = JsonFileLoader::new(file.path());

        let err = loader
            .load_objective(&ObjectiveId::new("obj-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }
}
