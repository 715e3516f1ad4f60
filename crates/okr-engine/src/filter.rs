//! Filter selections
//!
//! The drill-down view exposes four independent filter axes. Each axis is a
//! [`Selection`]: either no restriction (`All`) or exactly one admitted
//! value. Axes are AND-combined by the pruning pass; within a tree level the
//! children are OR-combined (any matching child keeps the parent alive).

use okr_model::{CustomerId, DepartmentId, FeatureId, RagColor};
use serde::{Deserialize, Serialize};

/// Single filter axis: unrestricted, or restricted to one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Selection<T> {
    /// No restriction on this axis
    All,
    /// Only the given value is admitted
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// Check whether this axis restricts anything
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Only(_))
    }

    /// Check whether a value passes this axis
    #[inline]
    #[must_use]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == value,
        }
    }

    /// The restricted value, if the axis is active
    #[inline]
    #[must_use]
    pub fn only(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Only(only) => Some(only),
        }
    }
}

/// The four drill-down filter axes
///
/// An immutable configuration value passed into the engine on each call; the
/// engine never reads ambient state. [`FilterSet::default`] restricts
/// nothing, and [`FilterSet::cleared`] is the atomic "clear all" value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    /// Status axis (the `not-set` status is not selectable)
    pub status: Selection<RagColor>,
    /// Department identity axis
    pub department: Selection<DepartmentId>,
    /// Indicator customer-linkage axis
    pub customer: Selection<CustomerId>,
    /// Indicator feature-linkage axis
    pub feature: Selection<FeatureId>,
}

impl FilterSet {
    /// Create an unrestricted filter set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The atomic "clear all" value (every axis reset together)
    #[inline]
    #[must_use]
    pub fn cleared() -> Self {
        Self::default()
    }

    /// With the status axis restricted
    #[inline]
    #[must_use]
    pub fn with_status(mut self, color: RagColor) -> Self {
        self.status = Selection::Only(color);
        self
    }

    /// With the department axis restricted
    #[inline]
    #[must_use]
    pub fn with_department(mut self, department: impl Into<DepartmentId>) -> Self {
        self.department = Selection::Only(department.into());
        self
    }

    /// With the customer axis restricted
    #[inline]
    #[must_use]
    pub fn with_customer(mut self, customer: impl Into<CustomerId>) -> Self {
        self.customer = Selection::Only(customer.into());
        self
    }

    /// With the feature axis restricted
    #[inline]
    #[must_use]
    pub fn with_feature(mut self, feature: impl Into<FeatureId>) -> Self {
        self.feature = Selection::Only(feature.into());
        self
    }

    /// Check whether any axis is active
    #[inline]
    #[must_use]
    pub fn has_active_filter(&self) -> bool {
        self.status.is_active()
            || self.department.is_active()
            || self.customer.is_active()
            || self.feature.is_active()
    }

    /// Check whether either indicator-linkage axis is active
    ///
    /// Governs whether the key-result predicate requires a matching
    /// indicator or is vacuously true on that clause.
    #[inline]
    #[must_use]
    pub fn has_linkage_filter(&self) -> bool {
        self.customer.is_active() || self.feature.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_restricts_nothing() {
        let filters = FilterSet::default();
        assert!(!filters.has_active_filter());
        assert!(!filters.has_linkage_filter());
        assert!(filters.department.admits(&DepartmentId::new("anything")));
    }

    #[test]
    fn selection_admits_only_its_value() {
        let axis = Selection::Only(DepartmentId::new("d1"));
        assert!(axis.is_active());
        assert!(axis.admits(&DepartmentId::new("d1")));
        assert!(!axis.admits(&DepartmentId::new("d2")));
        assert_eq!(axis.only(), Some(&DepartmentId::new("d1")));
    }

    #[test]
    fn cleared_equals_default() {
        let set = FilterSet::new()
            .with_status(RagColor::Red)
            .with_customer("c1");
        assert!(set.has_active_filter());
        assert_eq!(FilterSet::cleared(), FilterSet::default());
        assert_ne!(set, FilterSet::cleared());
    }

    #[test]
    fn linkage_flag_tracks_customer_and_feature_only() {
        assert!(FilterSet::new().with_customer("c1").has_linkage_filter());
        assert!(FilterSet::new().with_feature("f1").has_linkage_filter());
        assert!(!FilterSet::new()
            .with_status(RagColor::Green)
            .has_linkage_filter());
        assert!(!FilterSet::new().with_department("d1").has_linkage_filter());
    }
}
