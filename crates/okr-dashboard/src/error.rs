//! Dashboard errors

use okr_loader::LoadError;

/// Errors surfaced by page orchestration
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The loading boundary failed
    #[error("load failed: {0}")]
    Load(#[from] LoadError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use okr_model::ObjectiveId;

    #[test]
    fn wraps_load_errors() {
        let err: DashboardError = LoadError::NotFound(ObjectiveId::new("obj-1")).into();
        assert!(err.to_string().contains("obj-1"));
    }
}
