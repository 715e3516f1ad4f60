//! RAG (red/amber/green) status types
//!
//! [`RagStatus`] is the closed four-state health value carried by tree
//! entities; [`RagColor`] is the three-state subset that can be selected in
//! a status filter. `not-set` is representable on entities but not
//! filterable.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Health status of a tree entity
///
/// Absence of data at the source maps to [`RagStatus::NotSet`], never to a
/// null or an optional field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RagStatus {
    /// On track
    Green,
    /// At risk
    Amber,
    /// Off track
    Red,
    /// No status recorded yet
    #[default]
    NotSet,
}

impl RagStatus {
    /// Check whether a status has been recorded
    #[inline]
    #[must_use]
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::NotSet)
    }

    /// Canonical string form (matches the serde representation)
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Amber => "amber",
            Self::Red => "red",
            Self::NotSet => "not-set",
        }
    }
}

impl std::fmt::Display for RagStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RagStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" => Ok(Self::Green),
            "amber" => Ok(Self::Amber),
            "red" => Ok(Self::Red),
            "not-set" => Ok(Self::NotSet),
            other => Err(StatusParseError::Unknown(other.to_string())),
        }
    }
}

/// Filterable status color (strict subset of [`RagStatus`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RagColor {
    /// On track
    Green,
    /// At risk
    Amber,
    /// Off track
    Red,
}

impl RagColor {
    /// Check whether an entity status carries this color
    ///
    /// `NotSet` never matches any color.
    #[inline]
    #[must_use]
    pub fn matches(&self, status: RagStatus) -> bool {
        self.as_status() == status
    }

    /// Widen to the full status enumeration
    #[inline]
    #[must_use]
    pub fn as_status(&self) -> RagStatus {
        match self {
            Self::Green => RagStatus::Green,
            Self::Amber => RagStatus::Amber,
            Self::Red => RagStatus::Red,
        }
    }

    /// Canonical string form
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Amber => "amber",
            Self::Red => "red",
        }
    }
}

impl std::fmt::Display for RagColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RagColor {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" => Ok(Self::Green),
            "amber" => Ok(Self::Amber),
            "red" => Ok(Self::Red),
            "not-set" => Err(StatusParseError::NotFilterable),
            other => Err(StatusParseError::Unknown(other.to_string())),
        }
    }
}

impl TryFrom<RagStatus> for RagColor {
    type Error = StatusParseError;

    fn try_from(status: RagStatus) -> Result<Self, Self::Error> {
        match status {
            RagStatus::Green => Ok(Self::Green),
            RagStatus::Amber => Ok(Self::Amber),
            RagStatus::Red => Ok(Self::Red),
            RagStatus::NotSet => Err(StatusParseError::NotFilterable),
        }
    }
}

/// Status parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusParseError {
    /// String is not one of the known status values
    #[error("unknown status: {0:?}")]
    Unknown(String),

    /// `not-set` cannot be used where a filterable color is required
    #[error("`not-set` is not a filterable status")]
    NotFilterable,
}
