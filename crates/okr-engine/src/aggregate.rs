//! Aggregate counts
//!
//! Totals per tree level plus a three-way tally of key-result statuses.
//! Always computed over the unfiltered tree, once per load; filter state
//! never feeds into these numbers.

use okr_model::{Objective, RagStatus};
use serde::{Deserialize, Serialize};

/// Three-way key-result status tally
///
/// `not-set` key results are excluded from the tally (they still count
/// toward [`TreeAggregates::key_results`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    /// Key results on track
    pub green: usize,
    /// Key results at risk
    pub amber: usize,
    /// Key results off track
    pub red: usize,
}

impl StatusBreakdown {
    /// Record one key-result status
    #[inline]
    pub fn tally(&mut self, status: RagStatus) {
        match status {
            RagStatus::Green => self.green += 1,
            RagStatus::Amber => self.amber += 1,
            RagStatus::Red => self.red += 1,
            RagStatus::NotSet => {}
        }
    }

    /// Total of the tallied statuses
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.green + self.amber + self.red
    }
}

/// Aggregate counts over an unfiltered objective tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeAggregates {
    /// Total departments
    pub departments: usize,
    /// Total functional objectives
    pub functional_objectives: usize,
    /// Total key results (including `not-set`)
    pub key_results: usize,
    /// Total indicators
    pub indicators: usize,
    /// Key-result status tally, `not-set` excluded
    pub status_breakdown: StatusBreakdown,
}

/// Count every level of the tree in one pass
#[must_use]
pub fn compute_aggregates(tree: &Objective) -> TreeAggregates {
    let mut agg = TreeAggregates::default();

    for dept in &tree.departments {
        agg.departments += 1;
        for fo in &dept.functional_objectives {
            agg.functional_objectives += 1;
            for kr in &fo.key_results {
                agg.key_results += 1;
                agg.indicators += kr.indicators.len();
                agg.status_breakdown.tally(kr.status);
            }
        }
    }

    agg
}

#[cfg(test)]
mod tests {
    use super::*;
    use okr_model::{Department, FunctionalObjective, Indicator, KeyResult};

    #[test]
    fn empty_tree_yields_all_zeroes() {
        let agg = compute_aggregates(&Objective::new("obj-1", "Empty"));
        assert_eq!(agg, TreeAggregates::default());
        assert_eq!(agg.status_breakdown.total(), 0);
    }

    #[test]
    fn counts_every_level() {
        let tree = Objective::new("obj-1", "x")
            .with_department(
                Department::new("d1", "a").with_functional_objective(
                    FunctionalObjective::new("fo-1", "f")
                        .with_key_result(
                            KeyResult::new("kr-1", "k")
                                .with_status(RagStatus::Green)
                                .with_indicator(Indicator::new("ind-1", "i"))
                                .with_indicator(Indicator::new("ind-2", "j")),
                        )
                        .with_key_result(KeyResult::new("kr-2", "l").with_status(RagStatus::Green)),
                ),
            )
            .with_department(Department::new("d2", "b").with_functional_objective(
                FunctionalObjective::new("fo-2", "g").with_key_result(
                    KeyResult::new("kr-3", "m").with_status(RagStatus::Red),
                ),
            ));

        let agg = compute_aggregates(&tree);
        assert_eq!(agg.departments, 2);
        assert_eq!(agg.functional_objectives, 2);
        assert_eq!(agg.key_results, 3);
        assert_eq!(agg.indicators, 2);
        assert_eq!(agg.status_breakdown.green, 2);
        assert_eq!(agg.status_breakdown.red, 1);
        assert_eq!(agg.status_breakdown.amber, 0);
    }

    #[test]
    fn not_set_counts_raw_but_not_in_tally() {
        let tree = Objective::new("obj-1", "x").with_department(
            Department::new("d1", "a").with_functional_objective(
                FunctionalObjective::new("fo-1", "f")
                    .with_key_result(KeyResult::new("kr-1", "k"))
                    .with_key_result(KeyResult::new("kr-2", "l").with_status(RagStatus::Amber)),
            ),
        );

        let agg = compute_aggregates(&tree);
        assert_eq!(agg.key_results, 2);
        assert_eq!(agg.status_breakdown.total(), 1);
        assert_eq!(agg.status_breakdown.amber, 1);
    }
}
