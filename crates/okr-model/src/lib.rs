//! OKR Model
//!
//! Typed data model for the objective drill-down dashboard:
//! - [`RagStatus`] / [`RagColor`]: closed RAG health enumerations
//! - Identifier newtypes per tree level
//! - The four-level tree: [`Objective`] → [`Department`] →
//!   [`FunctionalObjective`] → [`KeyResult`] (with [`Indicator`] leaves)
//! - [`ActivityEntry`]: append-only audit records read by the timeline view
//!
//! All validation of loosely-typed source data happens at the loading
//! boundary (`okr-loader`); this crate only defines the well-formed shapes.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod activity;
mod ids;
mod status;
mod tree;

pub use activity::{ActivityAction, ActivityEntry, ActivitySubject, FieldChange};
pub use ids::{
    ActivityId, CustomerId, DepartmentId, FeatureId, FunctionalObjectiveId, IndicatorId,
    KeyResultId, ObjectiveId,
};
pub use status::{RagColor, RagStatus, StatusParseError};
pub use tree::{Department, FunctionalObjective, Indicator, KeyResult, Objective, ObjectiveKind};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
