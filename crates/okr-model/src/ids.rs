//! Typed entity identifiers
//!
//! Every tree level gets its own string-backed newtype so a department id
//! can never be passed where a customer id is expected. Identifiers come
//! from the remote export and are treated as opaque.

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier
            #[inline]
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw identifier
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Check for a blank identifier (rejected at the loading boundary)
            #[inline]
            #[must_use]
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Org objective identifier
    ObjectiveId
);
string_id!(
    /// Department identifier
    DepartmentId
);
string_id!(
    /// Functional objective identifier
    FunctionalObjectiveId
);
string_id!(
    /// Key result identifier
    KeyResultId
);
string_id!(
    /// Indicator identifier
    IndicatorId
);
string_id!(
    /// Customer identifier (indicator linkage axis)
    CustomerId
);
string_id!(
    /// Feature identifier (indicator linkage axis)
    FeatureId
);
string_id!(
    /// Activity log entry identifier
    ActivityId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_display_and_as_str() {
        let id = DepartmentId::new("dept-7");
        assert_eq!(id.as_str(), "dept-7");
        assert_eq!(id.to_string(), "dept-7");
    }

    #[test]
    fn blank_detection() {
        assert!(ObjectiveId::new("  ").is_blank());
        assert!(!ObjectiveId::new("obj-1").is_blank());
    }

    #[test]
    fn serde_is_transparent() {
        let id = CustomerId::new("cust-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"cust-1\"");
    }
}
