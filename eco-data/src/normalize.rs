//! Normalizing backend payloads into per-mode view models.
//!
//! The payload shape is chosen by the analysis mode the request was issued
//! under, and the result is a variant of that mode. No view model is shared
//! between modes.

use crate::{
    pagination::PaginationState,
    quality::{summary_shares, QualityIndicator, QualityShare},
    series::ChartSeries,
};
use eco_core::{
    measurement::{RawEnvelope, RawMeasurement},
    query::PageRequest,
    summary::{SummaryEntry, SummaryResponse},
    trend::{Anomaly, SeasonalPattern, TrendEntry, TrendResponse},
    AnalysisType, TransportError,
};
use eco_utils::numbers::round1;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

/// Anomalies deviating strictly more than this many standard deviations are
/// high severity.
pub const HIGH_SEVERITY_DEVIATION: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    High,
}

impl Severity {
    pub fn classify(deviation: f64) -> Self {
        if deviation.abs() > HIGH_SEVERITY_DEVIATION {
            Severity::High
        } else {
            Severity::Low
        }
    }
}

/// Raw-mode view: one page of measurements plus what the charts derive from it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RawView {
    pub measurements: Vec<RawMeasurement>,
    /// Absent for an empty page.
    pub quality: Option<QualityIndicator>,
    pub chart: ChartSeries,
}

impl RawView {
    pub fn new(measurements: Vec<RawMeasurement>) -> Self {
        Self {
            quality: QualityIndicator::from_measurements(&measurements),
            chart: ChartSeries::from_measurements(&measurements),
            measurements,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}

/// Raw view together with the pager state the response implies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawPage {
    pub view: RawView,
    pub pagination: PaginationState,
}

/// Weighted-mode view: the summary map, keyed by metric name.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SummaryView {
    pub entries: BTreeMap<String, SummaryEntry>,
}

impl SummaryView {
    pub fn get(&self, metric: &str) -> Option<&SummaryEntry> {
        self.entries.get(metric)
    }

    /// Quality shares of one metric; `None` if the metric is not in the view
    /// or the backend sent no distribution for it.
    pub fn quality_shares(&self, metric: &str) -> Option<Vec<QualityShare>> {
        let shares = summary_shares(self.get(metric)?);
        if shares.is_empty() {
            None
        } else {
            Some(shares)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedAnomaly {
    pub date: String,
    pub value: f64,
    pub deviation: f64,
    pub severity: Severity,
}

impl From<&Anomaly> for ClassifiedAnomaly {
    fn from(anomaly: &Anomaly) -> Self {
        Self {
            date: anomaly.date.clone(),
            value: anomaly.value,
            deviation: anomaly.deviation,
            severity: Severity::classify(anomaly.deviation),
        }
    }
}

/// Trend-mode view: the trend map, keyed by metric name.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TrendView {
    pub entries: BTreeMap<String, TrendEntry>,
}

impl TrendView {
    pub fn get(&self, metric: &str) -> Option<&TrendEntry> {
        self.entries.get(metric)
    }

    /// Anomalies of one metric in backend order, with severity attached.
    /// Empty for an unknown metric or a metric without anomalies.
    pub fn anomalies(&self, metric: &str) -> Vec<ClassifiedAnomaly> {
        self.get(metric)
            .map(|entry| entry.anomalies.iter().map(ClassifiedAnomaly::from).collect())
            .unwrap_or_default()
    }

    /// Seasonal pattern rows sorted by season label, only when seasonality
    /// was detected.
    pub fn seasonal_pattern(&self, metric: &str) -> Option<Vec<(&str, &SeasonalPattern)>> {
        let seasonality = self.get(metric)?.seasonality.as_ref()?;
        if !seasonality.detected {
            return None;
        }
        Some(
            seasonality
                .pattern
                .iter()
                .map(|(season, pattern)| (season.as_str(), pattern))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A `[0, 1]` confidence as a one-decimal percentage.
pub fn confidence_percent(confidence: f64) -> f64 {
    round1(confidence * 100.0)
}

/// A normalized response, tagged by the mode it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum NormalizedResponse {
    Raw(RawPage),
    Trends(TrendView),
    Weighted(SummaryView),
}

impl NormalizedResponse {
    pub fn analysis_type(&self) -> AnalysisType {
        match self {
            NormalizedResponse::Raw(_) => AnalysisType::Raw,
            NormalizedResponse::Trends(_) => AnalysisType::Trends,
            NormalizedResponse::Weighted(_) => AnalysisType::Weighted,
        }
    }
}

/// Decode `payload` as the response shape of `mode`.
///
/// `page` is the cursor the request was sent with; the raw pager takes its
/// page size from it.
pub fn normalize(
    mode: AnalysisType,
    payload: serde_json::Value,
    page: PageRequest,
) -> Result<NormalizedResponse, TransportError> {
    match mode {
        AnalysisType::Raw => {
            let envelope: RawEnvelope = serde_json::from_value(payload)?;
            let pagination = PaginationState::from_response(&envelope.meta, page);
            debug!(
                "normalized {} raw measurements (page {} of {})",
                envelope.data.len(),
                pagination.page,
                pagination.total_pages()
            );
            Ok(NormalizedResponse::Raw(RawPage {
                view: RawView::new(envelope.data),
                pagination,
            }))
        }
        AnalysisType::Trends => {
            let response: TrendResponse = serde_json::from_value(payload)?;
            debug!("normalized trends for {} metrics", response.data.len());
            Ok(NormalizedResponse::Trends(TrendView {
                entries: response.data,
            }))
        }
        AnalysisType::Weighted => {
            let response: SummaryResponse = serde_json::from_value(payload)?;
            debug!("normalized summary for {} metrics", response.data.len());
            Ok(NormalizedResponse::Weighted(SummaryView {
                entries: response.data,
            }))
        }
    }
}
