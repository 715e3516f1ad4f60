//! Tree pruning
//!
//! [`filter_tree`] produces a structurally independent pruned copy of an
//! objective tree, keeping only branches with at least one matching leaf
//! (plus the one deliberate exception: a functional objective retained by
//! its own status under an active status filter, even with zero matching
//! key results). The source tree is never mutated; output ordering at every
//! level matches input ordering.
//!
//! The pass is total: any combination of filter values, including
//! identifiers absent from the tree, yields a result, possibly a tree with
//! no departments.

use crate::filter::{FilterSet, Selection};
use okr_model::{Department, FunctionalObjective, Indicator, KeyResult, Objective};

/// Prune an objective tree down to the branches admitted by `filters`
///
/// With no active axis this is the content-identity function (a clone of
/// the input). Never fails.
#[must_use]
pub fn filter_tree(tree: &Objective, filters: &FilterSet) -> Objective {
    if !filters.has_active_filter() {
        return tree.clone();
    }

    let departments = tree
        .departments
        .iter()
        .filter(|dept| filters.department.admits(&dept.id))
        .filter_map(|dept| prune_department(dept, filters))
        .collect();

    Objective {
        id: tree.id.clone(),
        name: tree.name.clone(),
        kind: tree.kind,
        status: tree.status,
        departments,
    }
}

/// A department survives only if at least one functional objective does
fn prune_department(dept: &Department, filters: &FilterSet) -> Option<Department> {
    let functional_objectives: Vec<FunctionalObjective> = dept
        .functional_objectives
        .iter()
        .filter_map(|fo| prune_functional_objective(fo, filters))
        .collect();

    if functional_objectives.is_empty() {
        return None;
    }

    Some(Department {
        id: dept.id.clone(),
        name: dept.name.clone(),
        functional_objectives,
    })
}

/// Functional-objective retention
///
/// Kept when at least one key result matches, or when its own status equals
/// an active status filter. In the second case with zero matching key
/// results, the FO survives with an empty key-result list. That asymmetry
/// surfaces objective-level status independent of key-result granularity
/// and is pinned by a regression test; do not change it without product
/// sign-off.
fn prune_functional_objective(
    fo: &FunctionalObjective,
    filters: &FilterSet,
) -> Option<FunctionalObjective> {
    let own_status_match = match &filters.status {
        Selection::All => false,
        Selection::Only(color) => color.matches(fo.status),
    };

    let key_results: Vec<KeyResult> = fo
        .key_results
        .iter()
        .filter(|kr| key_result_matches(kr, filters))
        .cloned()
        .collect();

    if key_results.is_empty() && !own_status_match {
        return None;
    }

    Some(FunctionalObjective {
        id: fo.id.clone(),
        name: fo.name.clone(),
        status: fo.status,
        key_results,
    })
}

/// Key-result predicate: status axis AND indicator-linkage clause
///
/// The linkage clause only applies while a customer or feature axis is
/// active; otherwise it is vacuously true.
fn key_result_matches(kr: &KeyResult, filters: &FilterSet) -> bool {
    let status_ok = match &filters.status {
        Selection::All => true,
        Selection::Only(color) => color.matches(kr.status),
    };
    if !status_ok {
        return false;
    }

    if filters.has_linkage_filter() {
        kr.indicators
            .iter()
            .any(|indicator| indicator_matches(indicator, filters))
    } else {
        true
    }
}

/// Indicator predicate: customer axis AND feature axis
fn indicator_matches(indicator: &Indicator, filters: &FilterSet) -> bool {
    let customer_ok = match filters.customer.only() {
        None => true,
        Some(customer) => indicator.links_customer(customer),
    };
    let feature_ok = match filters.feature.only() {
        None => true,
        Some(feature) => indicator.links_feature(feature),
    };
    customer_ok && feature_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use okr_model::{RagColor, RagStatus};
    use pretty_assertions::assert_eq;

    fn two_kr_tree() -> Objective {
        Objective::new("obj-1", "Retention").with_department(
            Department::new("d1", "Product").with_functional_objective(
                FunctionalObjective::new("fo-1", "Improve Retention")
                    .with_status(RagStatus::Green)
                    .with_key_result(
                        KeyResult::new("kr-1", "Churn below 2%")
                            .with_status(RagStatus::Amber)
                            .with_indicator(
                                Indicator::new("ind-1", "Churn").with_customer("c1"),
                            ),
                    )
                    .with_key_result(
                        KeyResult::new("kr-2", "Weekly active accounts")
                            .with_status(RagStatus::Red),
                    ),
            ),
        )
    }

    #[test]
    fn no_active_filter_is_content_identity() {
        let tree = two_kr_tree();
        let out = filter_tree(&tree, &FilterSet::default());
        assert_eq!(out, tree);
    }

    #[test]
    fn status_filter_keeps_matching_key_results_only() {
        let tree = two_kr_tree();
        let out = filter_tree(&tree, &FilterSet::new().with_status(RagColor::Amber));

        assert_eq!(out.departments.len(), 1);
        let fo = &out.departments[0].functional_objectives[0];
        assert_eq!(fo.key_results.len(), 1);
        assert_eq!(fo.key_results[0].id.as_str(), "kr-1");
    }

    #[test]
    fn customer_filter_requires_a_matching_indicator() {
        let tree = two_kr_tree();
        let out = filter_tree(&tree, &FilterSet::new().with_customer("c1"));

        // kr-2 has no indicators at all, so it fails the linkage clause
        let fo = &out.departments[0].functional_objectives[0];
        assert_eq!(fo.key_results.len(), 1);
        assert_eq!(fo.key_results[0].id.as_str(), "kr-1");
    }

    #[test]
    fn unknown_customer_prunes_everything() {
        let tree = two_kr_tree();
        let out = filter_tree(&tree, &FilterSet::new().with_customer("nobody"));
        assert!(out.departments.is_empty());
    }

    #[test]
    fn unknown_department_prunes_everything() {
        let tree = two_kr_tree();
        let out = filter_tree(&tree, &FilterSet::new().with_department("d-missing"));
        assert!(out.departments.is_empty());
        assert!(FilterSet::new().with_department("d-missing").has_active_filter());
    }

    #[test]
    fn department_filter_keeps_identity_match_with_survivors() {
        let tree = two_kr_tree();
        let out = filter_tree(&tree, &FilterSet::new().with_department("d1"));
        assert_eq!(out.departments.len(), 1);
        assert_eq!(out.departments[0].id.as_str(), "d1");
        // No status/linkage axis active, so all key results survive
        assert_eq!(
            out.departments[0].functional_objectives[0].key_results.len(),
            2
        );
    }

    #[test]
    fn fo_own_status_keeps_it_with_empty_key_result_list() {
        // FO is green, its only KR is red: a green status filter keeps the
        // FO alive through its own status, with zero key results.
        let tree = Objective::new("obj-1", "x").with_department(
            Department::new("d1", "Ops").with_functional_objective(
                FunctionalObjective::new("fo-1", "Reduce toil")
                    .with_status(RagStatus::Green)
                    .with_key_result(KeyResult::new("kr-1", "y").with_status(RagStatus::Red)),
            ),
        );

        let out = filter_tree(&tree, &FilterSet::new().with_status(RagColor::Green));
        let fo = &out.departments[0].functional_objectives[0];
        assert_eq!(fo.id.as_str(), "fo-1");
        assert!(fo.key_results.is_empty());
    }

    #[test]
    fn fo_own_status_clause_needs_an_active_status_filter() {
        // Same shape, but the active axis is customer linkage: the FO's own
        // status cannot save it, and no KR matches.
        let tree = Objective::new("obj-1", "x").with_department(
            Department::new("d1", "Ops").with_functional_objective(
                FunctionalObjective::new("fo-1", "Reduce toil")
                    .with_status(RagStatus::Green)
                    .with_key_result(KeyResult::new("kr-1", "y").with_status(RagStatus::Red)),
            ),
        );

        let out = filter_tree(&tree, &FilterSet::new().with_customer("c1"));
        assert!(out.departments.is_empty());
    }

    #[test]
    fn combined_axes_are_and_composed() {
        let tree = two_kr_tree();

        // Amber + customer c1: kr-1 is amber and linked, survives
        let out = filter_tree(
            &tree,
            &FilterSet::new()
                .with_status(RagColor::Amber)
                .with_customer("c1"),
        );
        assert_eq!(
            out.departments[0].functional_objectives[0].key_results.len(),
            1
        );

        // Red + customer c1: kr-2 is red but unlinked; FO's own green status
        // does not match red, so everything is pruned
        let out = filter_tree(
            &tree,
            &FilterSet::new()
                .with_status(RagColor::Red)
                .with_customer("c1"),
        );
        assert!(out.departments.is_empty());
    }

    #[test]
    fn surviving_key_results_keep_their_indicators() {
        let tree = two_kr_tree();
        let out = filter_tree(&tree, &FilterSet::new().with_customer("c1"));
        let kr = &out.departments[0].functional_objectives[0].key_results[0];
        assert_eq!(kr.indicators.len(), 1);
        assert_eq!(kr.indicators[0].id.as_str(), "ind-1");
    }

    #[test]
    fn empty_tree_stays_empty() {
        let tree = Objective::new("obj-1", "Empty");
        let out = filter_tree(&tree, &FilterSet::new().with_status(RagColor::Red));
        assert!(out.departments.is_empty());
        assert_eq!(out.id, tree.id);
    }

    #[test]
    fn source_tree_is_untouched() {
        let tree = two_kr_tree();
        let before = tree.clone();
        let _ = filter_tree(&tree, &FilterSet::new().with_status(RagColor::Red));
        assert_eq!(tree, before);
    }
}
