//! Raw export records and hydration
//!
//! Mirrors the shape of a remote-table export: stringly-typed statuses,
//! optional linkage arrays, nested child rows. [`hydrate_objective`]
//! converts a raw record into the typed tree, coercing loose content
//! (unknown status strings become `not-set`, absent linkage lists become
//! empty) and rejecting only structural defects: blank identifiers and
//! duplicate sibling identifiers.

use crate::error::LoadError;
use chrono::{DateTime, Utc};
use okr_model::{
    ActivityAction, ActivityEntry, ActivitySubject, Department, FieldChange, FunctionalObjective,
    Indicator, KeyResult, Objective, ObjectiveKind, RagStatus,
};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::warn;

/// One objective with its activity rows, as exported
#[derive(Debug, Clone, Deserialize)]
pub struct RawObjectiveExport {
    /// The objective tree rows
    pub objective: RawObjective,
    /// Audit rows for this objective
    #[serde(default)]
    pub activity: Vec<RawActivityEntry>,
}

/// Top-level export document (one or more objectives)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawExport {
    /// Exported objectives
    #[serde(default)]
    pub objectives: Vec<RawObjectiveExport>,
}

/// Raw org objective row
#[derive(Debug, Clone, Deserialize)]
pub struct RawObjective {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub departments: Vec<RawDepartment>,
}

/// Raw department row
#[derive(Debug, Clone, Deserialize)]
pub struct RawDepartment {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub functional_objectives: Vec<RawFunctionalObjective>,
}

/// Raw functional objective row
#[derive(Debug, Clone, Deserialize)]
pub struct RawFunctionalObjective {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub key_results: Vec<RawKeyResult>,
}

/// Raw key result row
#[derive(Debug, Clone, Deserialize)]
pub struct RawKeyResult {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub indicators: Vec<RawIndicator>,
}

/// Raw indicator row; linkage arrays are optional at the source
#[derive(Debug, Clone, Deserialize)]
pub struct RawIndicator {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub customers: Option<Vec<String>>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

/// Raw audit row
#[derive(Debug, Clone, Deserialize)]
pub struct RawActivityEntry {
    pub id: String,
    pub recorded_at: DateTime<Utc>,
    #[serde(default)]
    pub actor: Option<String>,
    pub subject_kind: String,
    pub subject_id: String,
    pub action: String,
    #[serde(default)]
    pub changes: Vec<RawFieldChange>,
}

/// Raw field diff
#[derive(Debug, Clone, Deserialize)]
pub struct RawFieldChange {
    pub field: String,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub current: Option<String>,
}

/// Coerce a raw status string, logging anything unrecognized
fn coerce_status(raw: Option<&str>, entity: &'static str, id: &str) -> RagStatus {
    match raw {
        None => RagStatus::NotSet,
        Some(s) => s.parse().unwrap_or_else(|_| {
            warn!(entity, id, status = s, "unknown status in export, using not-set");
            RagStatus::NotSet
        }),
    }
}

fn require_id<'a>(id: &'a str, entity: &'static str) -> Result<&'a str, LoadError> {
    if id.trim().is_empty() {
        return Err(LoadError::MissingField { entity, field: "id" });
    }
    Ok(id)
}

fn check_unique<'a>(
    seen: &mut HashSet<&'a str>,
    child: &'a str,
    entity: &'static str,
    parent: &str,
) -> Result<(), LoadError> {
    if !seen.insert(child) {
        return Err(LoadError::DuplicateId {
            entity,
            parent: parent.to_string(),
            child: child.to_string(),
        });
    }
    Ok(())
}

/// Convert a raw objective row into the typed tree
pub fn hydrate_objective(raw: &RawObjective) -> Result<Objective, LoadError> {
    require_id(&raw.id, "objective")?;

    let kind = match raw.kind.as_deref() {
        None | Some("core") => ObjectiveKind::Core,
        Some("support") => ObjectiveKind::Support,
        Some(other) => {
            warn!(id = %raw.id, kind = other, "unknown objective kind, using core");
            ObjectiveKind::Core
        }
    };

    let mut departments = Vec::with_capacity(raw.departments.len());
    let mut seen = HashSet::new();
    for dept in &raw.departments {
        require_id(&dept.id, "department")?;
        check_unique(&mut seen, &dept.id, "objective", &raw.id)?;
        departments.push(hydrate_department(dept)?);
    }

    Ok(Objective {
        id: raw.id.as_str().into(),
        name: raw.name.clone(),
        kind,
        status: coerce_status(raw.status.as_deref(), "objective", &raw.id),
        departments,
    })
}

fn hydrate_department(raw: &RawDepartment) -> Result<Department, LoadError> {
    let mut functional_objectives = Vec::with_capacity(raw.functional_objectives.len());
    let mut seen = HashSet::new();
    for fo in &raw.functional_objectives {
        require_id(&fo.id, "functional objective")?;
        check_unique(&mut seen, &fo.id, "department", &raw.id)?;
        functional_objectives.push(hydrate_functional_objective(fo)?);
    }

    Ok(Department {
        id: raw.id.as_str().into(),
        name: raw.name.clone(),
        functional_objectives,
    })
}

fn hydrate_functional_objective(
    raw: &RawFunctionalObjective,
) -> Result<FunctionalObjective, LoadError> {
    let mut key_results = Vec::with_capacity(raw.key_results.len());
    let mut seen = HashSet::new();
    for kr in &raw.key_results {
        require_id(&kr.id, "key result")?;
        check_unique(&mut seen, &kr.id, "functional objective", &raw.id)?;
        key_results.push(hydrate_key_result(kr)?);
    }

    Ok(FunctionalObjective {
        id: raw.id.as_str().into(),
        name: raw.name.clone(),
        status: coerce_status(raw.status.as_deref(), "functional objective", &raw.id),
        key_results,
    })
}

fn hydrate_key_result(raw: &RawKeyResult) -> Result<KeyResult, LoadError> {
    let mut indicators = Vec::with_capacity(raw.indicators.len());
    let mut seen = HashSet::new();
    for ind in &raw.indicators {
        require_id(&ind.id, "indicator")?;
        check_unique(&mut seen, &ind.id, "key result", &raw.id)?;
        indicators.push(Indicator {
            id: ind.id.as_str().into(),
            name: ind.name.clone(),
            customers: ind
                .customers
                .clone()
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
            features: ind
                .features
                .clone()
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
        });
    }

    Ok(KeyResult {
        id: raw.id.as_str().into(),
        name: raw.name.clone(),
        status: coerce_status(raw.status.as_deref(), "key result", &raw.id),
        indicators,
    })
}

/// Convert raw audit rows, skipping entries with unrecognized kinds/actions
///
/// The log is produced elsewhere; a row this reader cannot classify is
/// dropped with a warning rather than failing the whole load.
pub fn hydrate_activity(raw: &[RawActivityEntry]) -> Vec<ActivityEntry> {
    raw.iter().filter_map(hydrate_activity_entry).collect()
}

fn hydrate_activity_entry(raw: &RawActivityEntry) -> Option<ActivityEntry> {
    if raw.id.trim().is_empty() {
        warn!("activity entry with blank id skipped");
        return None;
    }

    let subject = match raw.subject_kind.as_str() {
        "objective" => ActivitySubject::Objective(raw.subject_id.as_str().into()),
        "department" => ActivitySubject::Department(raw.subject_id.as_str().into()),
        "functional-objective" => {
            ActivitySubject::FunctionalObjective(raw.subject_id.as_str().into())
        }
        "key-result" => ActivitySubject::KeyResult(raw.subject_id.as_str().into()),
        "indicator" => ActivitySubject::Indicator(raw.subject_id.as_str().into()),
        other => {
            warn!(id = %raw.id, kind = other, "unknown activity subject kind, entry skipped");
            return None;
        }
    };

    let action = match raw.action.as_str() {
        "created" => ActivityAction::Created,
        "updated" => ActivityAction::Updated,
        "deleted" => ActivityAction::Deleted,
        other => {
            warn!(id = %raw.id, action = other, "unknown activity action, entry skipped");
            return None;
        }
    };

    let mut entry = ActivityEntry::new(
        raw.id.as_str(),
        raw.recorded_at,
        raw.actor.clone().unwrap_or_else(|| "unknown".to_string()),
        subject,
        action,
    );
    for change in &raw.changes {
        entry = entry.with_change(FieldChange::new(
            change.field.clone(),
            change.previous.clone(),
            change.current.clone(),
        ));
    }
    Some(entry)
}
