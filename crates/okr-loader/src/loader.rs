//! The loader trait and in-memory implementation
//!
//! [`ObjectiveLoader`] is the single capability the dashboard consumes:
//! given an identifier, produce a fully-populated objective tree (and its
//! activity rows). Real deployments put the remote-table transport behind
//! this trait; this crate ships an in-memory loader for fixtures and demos.

use crate::error::LoadError;
use async_trait::async_trait;
use okr_model::{ActivityEntry, Objective, ObjectiveId};
use std::collections::HashMap;

/// Produces hydrated objective trees
#[async_trait]
pub trait ObjectiveLoader: Send + Sync {
    /// Load the full tree for one objective
    async fn load_objective(&self, id: &ObjectiveId) -> Result<Objective, LoadError>;

    /// Load the audit rows recorded against one objective
    async fn load_activity(&self, id: &ObjectiveId) -> Result<Vec<ActivityEntry>, LoadError>;
}

/// Loader over pre-hydrated trees held in memory
#[derive(Debug, Default)]
pub struct InMemoryLoader {
    objectives: HashMap<ObjectiveId, Objective>,
    activity: HashMap<ObjectiveId, Vec<ActivityEntry>>,
}

impl InMemoryLoader {
    /// Create an empty loader
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With an objective tree registered under its own id
    #[inline]
    #[must_use]
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objectives.insert(objective.id.clone(), objective);
        self
    }

    /// With activity rows registered for an objective
    #[inline]
    #[must_use]
    pub fn with_activity(
        mut self,
        id: impl Into<ObjectiveId>,
        entries: Vec<ActivityEntry>,
    ) -> Self {
        self.activity.insert(id.into(), entries);
        self
    }

    /// Number of registered objectives
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.objectives.len()
    }

    /// Check whether no objectives are registered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objectives.is_empty()
    }
}

#[async_trait]
impl ObjectiveLoader for InMemoryLoader {
    async fn load_objective(&self, id: &ObjectiveId) -> Result<Objective, LoadError> {
        self.objectives
            .get(id)
            .cloned()
            .ok_or_else(|| LoadError::NotFound(id.clone()))
    }

    async fn load_activity(&self, id: &ObjectiveId) -> Result<Vec<ActivityEntry>, LoadError> {
        if !self.objectives.contains_key(id) {
            return Err(LoadError::NotFound(id.clone()));
        }
        Ok(self.activity.get(id).cloned().unwrap_or_default())
    }
}
