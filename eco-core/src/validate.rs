//! Mode-specific gating of a filter selection.
//!
//! Validation is re-run on every filter edit so warnings can be shown before
//! the user submits.

use crate::filter::{AnalysisType, FilterState};
use log::debug;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Warning {
    /// Trend analysis is per location; the backend needs `location_id`.
    LocationRequiredForTrends,
    /// A page size outside the supported set was requested.
    UnsupportedPageSize { requested: u32 },
}

impl Warning {
    /// Stable identifier for UI lookups.
    pub fn code(&self) -> &'static str {
        match self {
            Warning::LocationRequiredForTrends => "LOCATION_REQUIRED_FOR_TRENDS",
            Warning::UnsupportedPageSize { .. } => "UNSUPPORTED_PAGE_SIZE",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::LocationRequiredForTrends => {
                write!(f, "Select a location to run trend analysis")
            }
            Warning::UnsupportedPageSize { requested } => {
                write!(f, "{requested} items per page is not supported")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Validation {
    pub can_apply: bool,
    pub warnings: Vec<Warning>,
}

impl Validation {
    pub fn ok() -> Self {
        Self {
            can_apply: true,
            warnings: Vec::new(),
        }
    }
}

/// Decide whether `filters` may be sent. Only trends mode has a required
/// field; every other combination is accepted.
pub fn validate(filters: &FilterState) -> Validation {
    let mut validation = Validation::ok();
    if filters.analysis_type() == AnalysisType::Trends && filters.location_id().is_none() {
        validation.can_apply = false;
        validation.warnings.push(Warning::LocationRequiredForTrends);
    }
    if !validation.can_apply {
        debug!("filters blocked: {:?}", validation.warnings);
    }
    validation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::Quality;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    #[test]
    fn test_trends_without_location_is_blocked() {
        let filters = FilterState::new().with_analysis_type(AnalysisType::Trends);
        let validation = validate(&filters);
        assert!(!validation.can_apply);
        assert_eq!(validation.warnings, vec![Warning::LocationRequiredForTrends]);
        assert_eq!(validation.warnings[0].code(), "LOCATION_REQUIRED_FOR_TRENDS");
    }

    #[test]
    fn test_trends_with_location_is_allowed() {
        let filters = FilterState::new()
            .with_analysis_type(AnalysisType::Trends)
            .with_location(Some(2));
        assert_eq!(validate(&filters), Validation::ok());
    }

    #[test]
    fn test_adding_location_clears_warning() {
        let blocked = FilterState::new().with_analysis_type(AnalysisType::Trends);
        assert!(!validate(&blocked).can_apply);
        let fixed = blocked.with_location(Some(9));
        assert!(validate(&fixed).warnings.is_empty());
    }

    fn arb_quality() -> impl Strategy<Value = Option<Quality>> {
        prop_oneof![
            Just(None),
            Just(Some(Quality::Poor)),
            Just(Some(Quality::Questionable)),
            Just(Some(Quality::Good)),
            Just(Some(Quality::Excellent)),
        ]
    }

    fn arb_filters(analysis_type: AnalysisType) -> impl Strategy<Value = FilterState> {
        (
            proptest::option::of(1i64..500),
            proptest::option::of(0u32..3000),
            proptest::option::of("[a-z_]{0,12}"),
            arb_quality(),
        )
            .prop_map(move |(location, day_offset, metric, quality)| {
                let start = day_offset.map(|d| {
                    NaiveDate::from_ymd_opt(2015, 1, 1).unwrap() + chrono::Duration::days(d as i64)
                });
                FilterState::new()
                    .with_location(location)
                    .with_start_date(start)
                    .with_metric(metric.as_deref())
                    .with_quality_threshold(quality)
                    .with_analysis_type(analysis_type)
            })
    }

    proptest! {
        #[test]
        fn prop_trends_without_location_never_applies(filters in arb_filters(AnalysisType::Trends)) {
            let filters = filters.with_location(None);
            prop_assert!(!validate(&filters).can_apply);
        }

        #[test]
        fn prop_raw_always_applies(filters in arb_filters(AnalysisType::Raw)) {
            prop_assert!(validate(&filters).can_apply);
        }

        #[test]
        fn prop_weighted_always_applies(filters in arb_filters(AnalysisType::Weighted)) {
            prop_assert!(validate(&filters).can_apply);
        }
    }
}
