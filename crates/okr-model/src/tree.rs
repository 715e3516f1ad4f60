//! The four-level objective tree
//!
//! Objective → Department → FunctionalObjective → KeyResult, with each key
//! result owning a list of indicators. Containment is strict: every child
//! belongs to exactly one parent, which plain ownership enforces. The tree
//! is hydrated once by the loading boundary and treated as immutable input
//! by everything downstream.

use crate::ids::{
    CustomerId, DepartmentId, FeatureId, FunctionalObjectiveId, IndicatorId, KeyResultId,
    ObjectiveId,
};
use crate::status::RagStatus;
use serde::{Deserialize, Serialize};

/// Classification tag for an org objective
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectiveKind {
    /// Core business objective
    #[default]
    Core,
    /// Supporting objective
    Support,
}

/// Org objective (tree root)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    /// Objective identifier
    pub id: ObjectiveId,
    /// Display name
    pub name: String,
    /// Classification tag
    pub kind: ObjectiveKind,
    /// Aggregate health status
    pub status: RagStatus,
    /// Departments contributing to this objective, in display order
    pub departments: Vec<Department>,
}

impl Objective {
    /// Create an objective with no departments
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<ObjectiveId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: ObjectiveKind::Core,
            status: RagStatus::NotSet,
            departments: Vec::new(),
        }
    }

    /// With classification tag
    #[inline]
    #[must_use]
    pub fn with_kind(mut self, kind: ObjectiveKind) -> Self {
        self.kind = kind;
        self
    }

    /// With aggregate status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: RagStatus) -> Self {
        self.status = status;
        self
    }

    /// With a department appended
    #[inline]
    #[must_use]
    pub fn with_department(mut self, department: Department) -> Self {
        self.departments.push(department);
        self
    }

    /// Check for an objective with no departments at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }
}

/// Department within an objective
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Department identifier
    pub id: DepartmentId,
    /// Display name
    pub name: String,
    /// Functional objectives owned by this department, in display order
    pub functional_objectives: Vec<FunctionalObjective>,
}

impl Department {
    /// Create a department with no functional objectives
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<DepartmentId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            functional_objectives: Vec::new(),
        }
    }

    /// With a functional objective appended
    #[inline]
    #[must_use]
    pub fn with_functional_objective(mut self, fo: FunctionalObjective) -> Self {
        self.functional_objectives.push(fo);
        self
    }
}

/// Functional objective within a department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionalObjective {
    /// Functional objective identifier
    pub id: FunctionalObjectiveId,
    /// Display name
    pub name: String,
    /// Own health status (independent of key-result statuses)
    pub status: RagStatus,
    /// Key results, in display order
    pub key_results: Vec<KeyResult>,
}

impl FunctionalObjective {
    /// Create a functional objective with no key results
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<FunctionalObjectiveId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: RagStatus::NotSet,
            key_results: Vec::new(),
        }
    }

    /// With own status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: RagStatus) -> Self {
        self.status = status;
        self
    }

    /// With a key result appended
    #[inline]
    #[must_use]
    pub fn with_key_result(mut self, kr: KeyResult) -> Self {
        self.key_results.push(kr);
        self
    }
}

/// Key result within a functional objective
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyResult {
    /// Key result identifier
    pub id: KeyResultId,
    /// Display name
    pub name: String,
    /// Health status
    pub status: RagStatus,
    /// Measured indicators, in display order
    pub indicators: Vec<Indicator>,
}

impl KeyResult {
    /// Create a key result with no indicators
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<KeyResultId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: RagStatus::NotSet,
            indicators: Vec::new(),
        }
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: RagStatus) -> Self {
        self.status = status;
        self
    }

    /// With an indicator appended
    #[inline]
    #[must_use]
    pub fn with_indicator(mut self, indicator: Indicator) -> Self {
        self.indicators.push(indicator);
        self
    }
}

/// Measured data point under a key result
///
/// Linkage lists default to empty; a missing list at the source is the same
/// as no linkage, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    /// Indicator identifier
    pub id: IndicatorId,
    /// Display name
    pub name: String,
    /// Linked customers
    #[serde(default)]
    pub customers: Vec<CustomerId>,
    /// Linked features
    #[serde(default)]
    pub features: Vec<FeatureId>,
}

impl Indicator {
    /// Create an indicator with no linkages
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<IndicatorId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            customers: Vec::new(),
            features: Vec::new(),
        }
    }

    /// With a linked customer
    #[inline]
    #[must_use]
    pub fn with_customer(mut self, customer: impl Into<CustomerId>) -> Self {
        self.customers.push(customer.into());
        self
    }

    /// With a linked feature
    #[inline]
    #[must_use]
    pub fn with_feature(mut self, feature: impl Into<FeatureId>) -> Self {
        self.features.push(feature.into());
        self
    }

    /// Check whether a customer is linked to this indicator
    #[inline]
    #[must_use]
    pub fn links_customer(&self, customer: &CustomerId) -> bool {
        self.customers.contains(customer)
    }

    /// Check whether a feature is linked to this indicator
    #[inline]
    #[must_use]
    pub fn links_feature(&self, feature: &FeatureId) -> bool {
        self.features.contains(feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objective_builder_chain() {
        let obj = Objective::new("obj-1", "Grow revenue")
            .with_kind(ObjectiveKind::Support)
            .with_status(RagStatus::Green)
            .with_department(Department::new("d1", "Sales"));

        assert_eq!(obj.id.as_str(), "obj-1");
        assert_eq!(obj.kind, ObjectiveKind::Support);
        assert_eq!(obj.departments.len(), 1);
        assert!(!obj.is_empty());
    }

    #[test]
    fn new_entities_default_to_not_set() {
        assert_eq!(
            FunctionalObjective::new("fo-1", "x").status,
            RagStatus::NotSet
        );
        assert_eq!(KeyResult::new("kr-1", "y").status, RagStatus::NotSet);
    }

    #[test]
    fn indicator_linkage_lookup() {
        let ind = Indicator::new("ind-1", "NPS")
            .with_customer("c1")
            .with_feature("f1");

        assert!(ind.links_customer(&CustomerId::new("c1")));
        assert!(!ind.links_customer(&CustomerId::new("c2")));
        assert!(ind.links_feature(&FeatureId::new("f1")));
    }

    #[test]
    fn indicator_deserializes_without_linkage_lists() {
        let json = r#"{"id":"ind-1","name":"NPS"}"#;
        let ind: Indicator = serde_json::from_str(json).unwrap();
        assert!(ind.customers.is_empty());
        assert!(ind.features.is_empty());
    }

    #[test]
    fn tree_serde_round_trip() {
        let obj = Objective::new("obj-1", "Retention").with_department(
            Department::new("d1", "Product").with_functional_objective(
                FunctionalObjective::new("fo-1", "Improve retention")
                    .with_status(RagStatus::Amber)
                    .with_key_result(
                        KeyResult::new("kr-1", "Churn below 2%")
                            .with_status(RagStatus::Red)
                            .with_indicator(Indicator::new("ind-1", "Churn").with_customer("c1")),
                    ),
            ),
        );

        let json = serde_json::to_string(&obj).unwrap();
        let back: Objective = serde_json::from_str(&json).unwrap();
        assert_eq!(back, obj);
    }
}
