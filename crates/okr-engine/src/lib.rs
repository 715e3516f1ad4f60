//! OKR Engine
//!
//! Pure hierarchical filter-and-aggregate engine for the objective
//! drill-down view:
//! - [`FilterSet`]: four independent filter axes, AND-combined
//! - [`filter_tree`]: prune a tree to the branches with a matching leaf
//! - [`compute_aggregates`]: level totals plus a key-result status tally
//!   over the unfiltered tree
//!
//! The engine is synchronous, total, and side-effect free: it performs no
//! I/O, never mutates its input, and returns an empty pruned tree rather
//! than an error when nothing matches.
//!
//! # Example
//!
//! ```rust,ignore
//! use okr_engine::{compute_aggregates, filter_tree, FilterSet};
//! use okr_model::RagColor;
//!
//! let pruned = filter_tree(&tree, &FilterSet::new().with_status(RagColor::Amber));
//! let totals = compute_aggregates(&tree); // unfiltered, filter-invariant
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod aggregate;
mod filter;
mod prune;

pub use aggregate::{compute_aggregates, StatusBreakdown, TreeAggregates};
pub use filter::{FilterSet, Selection};
pub use prune::filter_tree;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
