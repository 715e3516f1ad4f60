//! Activity log records
//!
//! Append-only audit entries produced elsewhere; this crate only defines the
//! record shape that the timeline view reads and renders. No ingestion,
//! retention, or consistency model is defined here.

use crate::ids::{
    ActivityId, DepartmentId, FunctionalObjectiveId, IndicatorId, KeyResultId, ObjectiveId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entity an activity entry refers to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "kebab-case")]
pub enum ActivitySubject {
    /// Org objective
    Objective(ObjectiveId),
    /// Department
    Department(DepartmentId),
    /// Functional objective
    FunctionalObjective(FunctionalObjectiveId),
    /// Key result
    KeyResult(KeyResultId),
    /// Indicator
    Indicator(IndicatorId),
}

impl ActivitySubject {
    /// Human-readable entity kind label
    #[must_use]
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Objective(_) => "objective",
            Self::Department(_) => "department",
            Self::FunctionalObjective(_) => "functional objective",
            Self::KeyResult(_) => "key result",
            Self::Indicator(_) => "indicator",
        }
    }

    /// Raw identifier of the subject entity
    #[must_use]
    pub fn id_str(&self) -> &str {
        match self {
            Self::Objective(id) => id.as_str(),
            Self::Department(id) => id.as_str(),
            Self::FunctionalObjective(id) => id.as_str(),
            Self::KeyResult(id) => id.as_str(),
            Self::Indicator(id) => id.as_str(),
        }
    }
}

/// What happened to the subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityAction {
    /// Entity was created
    Created,
    /// One or more fields changed
    Updated,
    /// Entity was deleted
    Deleted,
}

/// Single field diff within an update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    /// Field name as recorded by the writer
    pub field: String,
    /// Value before the change, if any
    pub previous: Option<String>,
    /// Value after the change, if any
    pub current: Option<String>,
}

impl FieldChange {
    /// Create a field diff
    #[inline]
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        previous: Option<String>,
        current: Option<String>,
    ) -> Self {
        Self {
            field: field.into(),
            previous,
            current,
        }
    }
}

/// One append-only audit entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Entry identifier
    pub id: ActivityId,
    /// When the change was recorded
    pub recorded_at: DateTime<Utc>,
    /// Who made the change
    pub actor: String,
    /// What the change targeted
    pub subject: ActivitySubject,
    /// What happened
    pub action: ActivityAction,
    /// Field-level diffs (empty for created/deleted entries)
    #[serde(default)]
    pub changes: Vec<FieldChange>,
}

impl ActivityEntry {
    /// Create an entry with no field diffs
    #[inline]
    #[must_use]
    pub fn new(
        id: impl Into<ActivityId>,
        recorded_at: DateTime<Utc>,
        actor: impl Into<String>,
        subject: ActivitySubject,
        action: ActivityAction,
    ) -> Self {
        Self {
            id: id.into(),
            recorded_at,
            actor: actor.into(),
            subject,
            action,
            changes: Vec::new(),
        }
    }

    /// With a field diff appended
    #[inline]
    #[must_use]
    pub fn with_change(mut self, change: FieldChange) -> Self {
        self.changes.push(change);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn entry_builder() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let entry = ActivityEntry::new(
            "act-1",
            at,
            "ana",
            ActivitySubject::KeyResult(KeyResultId::new("kr-1")),
            ActivityAction::Updated,
        )
        .with_change(FieldChange::new(
            "status",
            Some("green".into()),
            Some("amber".into()),
        ));

        assert_eq!(entry.changes.len(), 1);
        assert_eq!(entry.subject.kind_label(), "key result");
        assert_eq!(entry.subject.id_str(), "kr-1");
    }

    #[test]
    fn entry_deserializes_without_changes() {
        let json = r#"{
            "id": "act-2",
            "recorded_at": "2026-03-01T09:30:00Z",
            "actor": "bot",
            "subject": {"kind": "department", "id": "d1"},
            "action": "created"
        }"#;
        let entry: ActivityEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.action, ActivityAction::Created);
        assert!(entry.changes.is_empty());
    }
}
