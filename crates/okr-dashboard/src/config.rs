//! Dashboard configuration

use okr_engine::FilterSet;
use serde::{Deserialize, Serialize};

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Timeline entries per page
    pub timeline_page_size: usize,
    /// Filters applied when a page first opens
    pub default_filters: FilterSet,
}

impl DashboardConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With timeline page size
    #[inline]
    #[must_use]
    pub fn with_timeline_page_size(mut self, size: usize) -> Self {
        self.timeline_page_size = size;
        self
    }

    /// With default filters
    #[inline]
    #[must_use]
    pub fn with_default_filters(mut self, filters: FilterSet) -> Self {
        self.default_filters = filters;
        self
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            timeline_page_size: 20,
            default_filters: FilterSet::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use okr_model::RagColor;

    #[test]
    fn defaults() {
        let config = DashboardConfig::new();
        assert_eq!(config.timeline_page_size, 20);
        assert!(!config.default_filters.has_active_filter());
    }

    #[test]
    fn builder_chain() {
        let config = DashboardConfig::new()
            .with_timeline_page_size(5)
            .with_default_filters(FilterSet::new().with_status(RagColor::Red));

        assert_eq!(config.timeline_page_size, 5);
        assert!(config.default_filters.has_active_filter());
    }
}
