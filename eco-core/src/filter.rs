//! The user's filter selection.
//!
//! `FilterState` is a value: every edit produces a new one via the `with_*`
//! methods, and readers never observe a half-applied change.

use crate::quality::Quality;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The three mutually exclusive ways of looking at the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    /// Paginated time series of individual measurements.
    #[default]
    Raw,
    /// Trend, anomaly and seasonality analysis per metric.
    Trends,
    /// Quality-weighted summary statistics per metric.
    Weighted,
}

impl AnalysisType {
    pub const ALL: [AnalysisType; 3] = [
        AnalysisType::Raw,
        AnalysisType::Trends,
        AnalysisType::Weighted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::Raw => "raw",
            AnalysisType::Trends => "trends",
            AnalysisType::Weighted => "weighted",
        }
    }

    /// Only the raw endpoint is paginated.
    pub fn is_paginated(&self) -> bool {
        matches!(self, AnalysisType::Raw)
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "raw" => Ok(AnalysisType::Raw),
            "trends" => Ok(AnalysisType::Trends),
            "weighted" => Ok(AnalysisType::Weighted),
            other => Err(format!(
                "unknown analysis type {other:?} (expected raw, trends or weighted)"
            )),
        }
    }
}

/// Query parameters selected by the user plus the active analysis mode.
///
/// Unset filters are `None`; a blank metric name is treated as unset.
/// `start_date <= end_date` is assumed, not enforced.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterState {
    location_id: Option<i64>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    metric: Option<String>,
    quality_threshold: Option<Quality>,
    analysis_type: AnalysisType,
}

impl FilterState {
    /// Empty filters in raw mode, the state at session start.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location_id(&self) -> Option<i64> {
        self.location_id
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn metric(&self) -> Option<&str> {
        self.metric.as_deref()
    }

    pub fn quality_threshold(&self) -> Option<Quality> {
        self.quality_threshold
    }

    pub fn analysis_type(&self) -> AnalysisType {
        self.analysis_type
    }

    pub fn with_location(self, location_id: Option<i64>) -> Self {
        Self {
            location_id,
            ..self
        }
    }

    pub fn with_start_date(self, start_date: Option<NaiveDate>) -> Self {
        Self { start_date, ..self }
    }

    pub fn with_end_date(self, end_date: Option<NaiveDate>) -> Self {
        Self { end_date, ..self }
    }

    /// Set both ends of the inclusive date range at once.
    pub fn with_date_range(
        self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            start_date,
            end_date,
            ..self
        }
    }

    pub fn with_metric(self, metric: Option<&str>) -> Self {
        let metric = metric
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(String::from);
        Self { metric, ..self }
    }

    pub fn with_quality_threshold(self, quality_threshold: Option<Quality>) -> Self {
        Self {
            quality_threshold,
            ..self
        }
    }

    pub fn with_analysis_type(self, analysis_type: AnalysisType) -> Self {
        Self {
            analysis_type,
            ..self
        }
    }

    /// True when no query filter is set. The analysis mode is not a filter.
    pub fn is_unfiltered(&self) -> bool {
        self.location_id.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.metric.is_none()
            && self.quality_threshold.is_none()
    }
}
