//! Explorer state read by the rendering layer.
//!
//! Every slot keeps its last good value when a later fetch fails, and
//! records the failure next to it, so "loaded but empty" and "failed" never
//! look the same.

use eco_core::{
    catalog::{Location, Metric},
    validate::{validate, Validation},
    ExplorerError, FilterState,
};
use eco_data::{PaginationState, RawView, SummaryView, TrendView};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slot<T> {
    /// `None` until the first successful load.
    pub data: Option<T>,
    /// Failure of the most recent load, cleared by the next success.
    #[serde(skip)]
    pub error: Option<ExplorerError>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
        }
    }
}

impl<T> Slot<T> {
    pub fn loaded(&mut self, data: T) {
        self.data = Some(data);
        self.error = None;
    }

    /// Record a failure without touching the last good value.
    pub fn failed(&mut self, error: ExplorerError) {
        self.error = Some(error);
    }

    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }

    pub fn has_failed(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Catalogs {
    pub locations: Slot<Vec<Location>>,
    pub metrics: Slot<Vec<Metric>>,
}

impl Catalogs {
    /// Location filtering needs the location catalog.
    pub fn location_filter_enabled(&self) -> bool {
        self.locations.is_loaded()
    }

    pub fn metric_filter_enabled(&self) -> bool {
        self.metrics.is_loaded()
    }

    pub fn location(&self, id: i64) -> Option<&Location> {
        self.locations.data.as_ref()?.iter().find(|l| l.id == id)
    }

    pub fn metric(&self, name: &str) -> Option<&Metric> {
        self.metrics.data.as_ref()?.iter().find(|m| m.name == name)
    }
}

/// Everything the explorer owns. Only `Explorer` writes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplorerState {
    pub filters: FilterState,
    pub validation: Validation,
    /// Raw-mode pager; frozen while another mode is active.
    pub pagination: PaginationState,
    pub raw: Slot<RawView>,
    pub summary: Slot<SummaryView>,
    pub trends: Slot<TrendView>,
    pub catalogs: Catalogs,
    pub catalogs_loading: bool,
    /// A data fetch is in flight.
    pub loading: bool,
    #[serde(skip)]
    pub last_error: Option<ExplorerError>,
}

impl Default for ExplorerState {
    fn default() -> Self {
        let filters = FilterState::new();
        Self {
            validation: validate(&filters),
            filters,
            pagination: PaginationState::default(),
            raw: Slot::default(),
            summary: Slot::default(),
            trends: Slot::default(),
            catalogs: Catalogs::default(),
            catalogs_loading: false,
            loading: false,
            last_error: None,
        }
    }
}

impl ExplorerState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eco_core::{AnalysisType, TransportError};

    #[test]
    fn test_failed_slot_keeps_last_good_value() {
        let mut slot: Slot<Vec<u32>> = Slot::default();
        slot.loaded(vec![1, 2]);
        slot.failed(ExplorerError::FetchFailed {
            mode: AnalysisType::Raw,
            reason: TransportError::Http(503),
        });
        assert_eq!(slot.data, Some(vec![1, 2]));
        assert!(slot.has_failed());
        slot.loaded(Vec::new());
        assert_eq!(slot.data, Some(Vec::new()));
        assert!(!slot.has_failed());
    }

    #[test]
    fn test_initial_state() {
        let state = ExplorerState::new();
        assert_eq!(state.filters.analysis_type(), AnalysisType::Raw);
        assert!(state.validation.can_apply);
        assert_eq!(state.pagination, PaginationState::default());
        assert!(!state.raw.is_loaded());
        assert!(!state.loading);
    }
}
