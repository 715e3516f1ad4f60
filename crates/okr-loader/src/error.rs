//! Loading errors
//!
//! Content-level looseness (missing statuses, absent linkage lists) is
//! coerced, not failed; errors are reserved for structural problems in the
//! export and for the transport underneath it.

use okr_model::ObjectiveId;

/// Errors from the loading boundary
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// No objective with the requested identifier in the export
    #[error("objective not found: {0}")]
    NotFound(ObjectiveId),

    /// Export could not be read
    #[error("export read failed: {0}")]
    Io(#[from] std::io::Error),

    /// Export could not be parsed
    #[error("malformed export: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Two siblings carry the same identifier
    #[error("{entity} {parent:?} has duplicate child id {child:?}")]
    DuplicateId {
        /// Parent entity kind
        entity: &'static str,
        /// Parent identifier
        parent: String,
        /// Offending child identifier
        child: String,
    },

    /// A required field is blank or absent
    #[error("{entity} is missing required field {field}")]
    MissingField {
        /// Entity kind
        entity: &'static str,
        /// Field name
        field: &'static str,
    },
}
