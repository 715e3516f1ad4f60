//! Fixtures for the OKR dashboard workspace
//!
//! Canned objective trees and activity logs shared by dev-dependencies.

#![allow(missing_docs)]

use chrono::{TimeZone, Utc};
use okr_model::{
    ActivityAction, ActivityEntry, ActivitySubject, Department, FieldChange, FunctionalObjective,
    Indicator, KeyResult, KeyResultId, Objective, ObjectiveKind, RagStatus,
};

/// The two-key-result retention tree: D1 → FO "Improve Retention" (green)
/// with KR1 (amber, one indicator linked to customer C1) and KR2 (red, no
/// links).
pub fn retention_tree() -> Objective {
    Objective::new("obj-retention", "Improve customer retention")
        .with_status(RagStatus::Amber)
        .with_department(
            Department::new("d1", "Product").with_functional_objective(
                FunctionalObjective::new("fo-retention", "Improve Retention")
                    .with_status(RagStatus::Green)
                    .with_key_result(
                        KeyResult::new("kr-1", "Churn below 2%")
                            .with_status(RagStatus::Amber)
                            .with_indicator(
                                Indicator::new("ind-1", "Monthly churn").with_customer("c1"),
                            ),
                    )
                    .with_key_result(
                        KeyResult::new("kr-2", "Weekly active accounts up 10%")
                            .with_status(RagStatus::Red),
                    ),
            ),
        )
}

/// A wider tree spanning three departments with mixed statuses and linkage
/// coverage, for board and drill-down tests.
pub fn portfolio_tree() -> Objective {
    Objective::new("obj-portfolio", "Scale the platform")
        .with_kind(ObjectiveKind::Core)
        .with_status(RagStatus::Green)
        .with_department(
            Department::new("d-eng", "Engineering")
                .with_functional_objective(
                    FunctionalObjective::new("fo-perf", "Cut page load times")
                        .with_status(RagStatus::Green)
                        .with_key_result(
                            KeyResult::new("kr-p50", "P50 under 200ms")
                                .with_status(RagStatus::Green)
                                .with_indicator(
                                    Indicator::new("ind-p50", "P50 latency")
                                        .with_feature("f-dashboard"),
                                ),
                        )
                        .with_key_result(
                            KeyResult::new("kr-p99", "P99 under 1s")
                                .with_status(RagStatus::Amber)
                                .with_indicator(
                                    Indicator::new("ind-p99", "P99 latency")
                                        .with_customer("c-acme")
                                        .with_feature("f-dashboard"),
                                ),
                        ),
                )
                .with_functional_objective(
                    FunctionalObjective::new("fo-reliability", "Raise availability")
                        .with_status(RagStatus::Red)
                        .with_key_result(
                            KeyResult::new("kr-uptime", "99.95% uptime")
                                .with_status(RagStatus::Red)
                                .with_indicator(Indicator::new("ind-uptime", "Uptime")),
                        ),
                ),
        )
        .with_department(
            Department::new("d-sales", "Sales").with_functional_objective(
                FunctionalObjective::new("fo-expansion", "Grow enterprise accounts")
                    .with_status(RagStatus::Amber)
                    .with_key_result(
                        KeyResult::new("kr-arr", "ARR up 30%")
                            .with_status(RagStatus::Green)
                            .with_indicator(
                                Indicator::new("ind-arr", "ARR").with_customer("c-acme"),
                            )
                            .with_indicator(
                                Indicator::new("ind-seats", "Seats sold")
                                    .with_customer("c-globex"),
                            ),
                    ),
            ),
        )
        .with_department(
            Department::new("d-support", "Support").with_functional_objective(
                FunctionalObjective::new("fo-csat", "Keep CSAT above 4.5")
                    .with_key_result(KeyResult::new("kr-csat", "CSAT 4.5+")),
            ),
        )
}

/// Four activity entries over two days, newest last (write order).
pub fn activity_log() -> Vec<ActivityEntry> {
    let day_one = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
    let day_two = Utc.with_ymd_and_hms(2026, 3, 2, 14, 30, 0).unwrap();

    vec![
        ActivityEntry::new(
            "act-1",
            day_one,
            "ana",
            ActivitySubject::KeyResult(KeyResultId::new("kr-1")),
            ActivityAction::Created,
        ),
        ActivityEntry::new(
            "act-2",
            day_one,
            "ana",
            ActivitySubject::KeyResult(KeyResultId::new("kr-1")),
            ActivityAction::Updated,
        )
        .with_change(FieldChange::new(
            "status",
            Some("not-set".into()),
            Some("green".into()),
        )),
        ActivityEntry::new(
            "act-3",
            day_two,
            "raj",
            ActivitySubject::KeyResult(KeyResultId::new("kr-1")),
            ActivityAction::Updated,
        )
        .with_change(FieldChange::new(
            "status",
            Some("green".into()),
            Some("amber".into()),
        ))
        .with_change(FieldChange::new(
            "name",
            Some("Churn below 3%".into()),
            Some("Churn below 2%".into()),
        )),
        ActivityEntry::new(
            "act-4",
            day_two,
            "raj",
            ActivitySubject::KeyResult(KeyResultId::new("kr-2")),
            ActivityAction::Deleted,
        ),
    ]
}
