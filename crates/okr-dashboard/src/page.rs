//! Objective page orchestration
//!
//! [`ObjectivePage`] owns the component-local state of one drill-down page:
//! the loading lifecycle, the four filter selections, and pagination. The
//! filter engine is invoked on every [`ObjectivePage::view`] call with the
//! current selections; aggregates are computed once per load and reused
//! across filter changes.

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::status_board::{build_status_board, StatusBoard};
use crate::timeline::{paginate, TimelinePage};
use okr_engine::{compute_aggregates, filter_tree, FilterSet, Selection, TreeAggregates};
use okr_loader::ObjectiveLoader;
use okr_model::{
    ActivityEntry, CustomerId, DepartmentId, FeatureId, Objective, ObjectiveId, RagColor,
};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Loaded data for one objective, hydrated once per refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedObjective {
    /// The full unfiltered tree
    pub tree: Objective,
    /// Aggregates over the unfiltered tree
    pub aggregates: TreeAggregates,
    /// Audit rows for the timeline
    pub activity: Vec<ActivityEntry>,
}

/// Loading lifecycle of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    /// Nothing loaded yet (or a refresh in flight)
    Loading,
    /// Data available
    Ready(Box<LoadedObjective>),
    /// Last refresh failed; the message is for the error banner
    Failed(String),
}

/// The drill-down view model handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrillDownView {
    /// Pruned tree under the current filters
    pub objective: Objective,
    /// Aggregates over the unfiltered tree (filter-invariant)
    pub aggregates: TreeAggregates,
    /// Whether any filter axis is active
    pub has_active_filter: bool,
    /// Whether pruning left no departments (render the empty-result state)
    pub is_empty: bool,
}

/// Component-local state for one objective drill-down page
#[derive(Debug)]
pub struct ObjectivePage {
    config: DashboardConfig,
    objective_id: ObjectiveId,
    state: PageState,
    filters: FilterSet,
}

impl ObjectivePage {
    /// Create a page for an objective, in the loading state
    #[inline]
    #[must_use]
    pub fn new(objective_id: impl Into<ObjectiveId>, config: DashboardConfig) -> Self {
        let filters = config.default_filters.clone();
        Self {
            config,
            objective_id: objective_id.into(),
            state: PageState::Loading,
            filters,
        }
    }

    /// The objective this page shows
    #[inline]
    #[must_use]
    pub fn objective_id(&self) -> &ObjectiveId {
        &self.objective_id
    }

    /// Current loading state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Current filter selections
    #[inline]
    #[must_use]
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Reload the tree and activity log through the loader
    ///
    /// Aggregates are computed here, once, over the unfiltered tree. On
    /// failure the page moves to [`PageState::Failed`] and the error is
    /// also returned to the caller.
    #[instrument(skip(self, loader), fields(objective = %self.objective_id))]
    pub async fn refresh(&mut self, loader: &dyn ObjectiveLoader) -> Result<(), DashboardError> {
        self.state = PageState::Loading;

        let tree = match loader.load_objective(&self.objective_id).await {
            Ok(tree) => tree,
            Err(err) => {
                warn!(error = %err, "objective load failed");
                self.state = PageState::Failed(err.to_string());
                return Err(err.into());
            }
        };
        let activity = match loader.load_activity(&self.objective_id).await {
            Ok(activity) => activity,
            Err(err) => {
                warn!(error = %err, "activity load failed");
                self.state = PageState::Failed(err.to_string());
                return Err(err.into());
            }
        };

        let aggregates = compute_aggregates(&tree);
        info!(
            departments = aggregates.departments,
            key_results = aggregates.key_results,
            activity = activity.len(),
            "objective loaded"
        );
        self.state = PageState::Ready(Box::new(LoadedObjective {
            tree,
            aggregates,
            activity,
        }));
        Ok(())
    }

    /// Set or clear the status axis
    #[inline]
    pub fn set_status_filter(&mut self, color: Option<RagColor>) {
        self.filters.status = color.map_or(Selection::All, Selection::Only);
    }

    /// Set or clear the department axis
    #[inline]
    pub fn set_department_filter(&mut self, department: Option<DepartmentId>) {
        self.filters.department = department.map_or(Selection::All, Selection::Only);
    }

    /// Set or clear the customer axis
    #[inline]
    pub fn set_customer_filter(&mut self, customer: Option<CustomerId>) {
        self.filters.customer = customer.map_or(Selection::All, Selection::Only);
    }

    /// Set or clear the feature axis
    #[inline]
    pub fn set_feature_filter(&mut self, feature: Option<FeatureId>) {
        self.filters.feature = feature.map_or(Selection::All, Selection::Only);
    }

    /// Reset every filter axis in one step
    #[inline]
    pub fn clear_filters(&mut self) {
        self.filters = FilterSet::cleared();
    }

    /// Build the drill-down view under the current filters
    ///
    /// `None` until a refresh has succeeded.
    #[must_use]
    pub fn view(&self) -> Option<DrillDownView> {
        let loaded = self.loaded()?;
        let objective = filter_tree(&loaded.tree, &self.filters);
        let is_empty = objective.departments.is_empty();
        Some(DrillDownView {
            objective,
            aggregates: loaded.aggregates,
            has_active_filter: self.filters.has_active_filter(),
            is_empty,
        })
    }

    /// Build the department status board (always unfiltered)
    #[must_use]
    pub fn status_board(&self) -> Option<StatusBoard> {
        self.loaded().map(|loaded| build_status_board(&loaded.tree))
    }

    /// Build one timeline page
    #[must_use]
    pub fn timeline(&self, page: usize) -> Option<TimelinePage> {
        self.loaded()
            .map(|loaded| paginate(&loaded.activity, page, self.config.timeline_page_size))
    }

    fn loaded(&self) -> Option<&LoadedObjective> {
        match &self.state {
            PageState::Ready(loaded) => Some(loaded),
            PageState::Loading | PageState::Failed(_) => None,
        }
    }
}
