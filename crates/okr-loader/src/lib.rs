//! OKR Loader
//!
//! The tree-construction boundary between loosely-typed remote-table
//! exports and the typed model:
//! - Raw record types mirroring the export shape (stringly statuses,
//!   optional linkage arrays)
//! - Hydration with content coercion and structural validation
//! - [`ObjectiveLoader`]: the async capability the dashboard consumes
//! - [`InMemoryLoader`] and [`JsonFileLoader`] implementations
//!
//! All status/linkage looseness is resolved here; downstream code only ever
//! sees well-formed trees.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod json;
mod loader;
mod record;

pub use error::LoadError;
pub use json::JsonFileLoader;
pub use loader::{InMemoryLoader, ObjectiveLoader};
pub use record::{
    hydrate_activity, hydrate_objective, RawActivityEntry, RawDepartment, RawExport,
    RawFieldChange, RawFunctionalObjective, RawIndicator, RawKeyResult, RawObjective,
    RawObjectiveExport,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
