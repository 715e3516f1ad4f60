//! OKR Dashboard
//!
//! Page orchestration for the objective drill-down dashboard:
//! - [`ObjectivePage`]: component-local loading / filter / pagination state
//! - [`DrillDownView`]: pruned tree plus filter-invariant aggregates
//! - [`StatusBoard`]: per-department status monitoring rollup
//! - [`TimelinePage`]: paginated rendering of the append-only activity log
//!
//! The page delegates all tree pruning and counting to `okr-engine` and all
//! data access to an `okr-loader` [`ObjectiveLoader`](okr_loader::ObjectiveLoader).

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod config;
mod error;
mod page;
mod status_board;
mod timeline;

pub use config::DashboardConfig;
pub use error::DashboardError;
pub use page::{DrillDownView, LoadedObjective, ObjectivePage, PageState};
pub use status_board::{build_status_board, DepartmentStatus, StatusBoard, StatusCounts};
pub use timeline::{paginate, summarize, TimelineItem, TimelinePage};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
