//! Department status board
//!
//! Per-department rollup of functional-objective statuses for the status
//! monitoring view. Always computed over the unfiltered tree; drill-down
//! filters do not apply here.

use okr_model::{Department, DepartmentId, Objective, RagStatus};
use serde::{Deserialize, Serialize};

/// Functional-objective status counts within one department
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// On track
    pub green: usize,
    /// At risk
    pub amber: usize,
    /// Off track
    pub red: usize,
    /// No status recorded
    pub not_set: usize,
}

impl StatusCounts {
    /// Record one status
    #[inline]
    pub fn tally(&mut self, status: RagStatus) {
        match status {
            RagStatus::Green => self.green += 1,
            RagStatus::Amber => self.amber += 1,
            RagStatus::Red => self.red += 1,
            RagStatus::NotSet => self.not_set += 1,
        }
    }

    /// Total functional objectives counted
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.green + self.amber + self.red + self.not_set
    }
}

/// One department's row on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentStatus {
    /// Department identifier
    pub id: DepartmentId,
    /// Display name
    pub name: String,
    /// Functional-objective status counts
    pub counts: StatusCounts,
    /// Most severe status present (red > amber > green > not-set)
    pub worst: RagStatus,
}

/// The status monitoring view: one row per department, input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBoard {
    /// Department rows in tree order
    pub departments: Vec<DepartmentStatus>,
}

impl StatusBoard {
    /// Check for a board with no departments
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }
}

/// Build the board from an unfiltered tree
#[must_use]
pub fn build_status_board(tree: &Objective) -> StatusBoard {
    StatusBoard {
        departments: tree.departments.iter().map(department_status).collect(),
    }
}

fn department_status(dept: &Department) -> DepartmentStatus {
    let mut counts = StatusCounts::default();
    for fo in &dept.functional_objectives {
        counts.tally(fo.status);
    }

    let worst = if counts.red > 0 {
        RagStatus::Red
    } else if counts.amber > 0 {
        RagStatus::Amber
    } else if counts.green > 0 {
        RagStatus::Green
    } else {
        RagStatus::NotSet
    };

    DepartmentStatus {
        id: dept.id.clone(),
        name: dept.name.clone(),
        counts,
        worst,
    }
}
