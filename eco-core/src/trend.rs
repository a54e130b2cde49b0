//! Trend-mode response shape from `/trends`.

use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    #[serde(alias = "Increasing")]
    Increasing,
    #[serde(alias = "Decreasing")]
    Decreasing,
    #[serde(alias = "Stable")]
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
        };
        f.write_str(label)
    }
}

/// Fitted trend of one metric. `rate` is expressed in `unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendInfo {
    pub direction: TrendDirection,
    pub rate: f64,
    pub unit: String,
    /// In `[0, 1]`.
    pub confidence: f64,
}

/// A single outlier. `deviation` is signed, in standard deviations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub date: String,
    pub value: f64,
    pub deviation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalPattern {
    pub avg: f64,
    pub trend: String,
}

/// Seasonality detection result. `period` and `pattern` only carry content
/// when `detected` is true.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Seasonality {
    #[serde(default)]
    pub detected: bool,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub pattern: BTreeMap<String, SeasonalPattern>,
}

/// Full trend analysis of one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendEntry {
    pub trend: TrendInfo,
    /// Ordered by date, possibly empty.
    #[serde(default)]
    pub anomalies: Vec<Anomaly>,
    #[serde(default)]
    pub seasonality: Option<Seasonality>,
}

/// `{data: {metric: TrendEntry}}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendResponse {
    #[serde(default)]
    pub data: BTreeMap<String, TrendEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_detected_seasonality() {
        let body = r#"{"data": {"temperature": {
            "trend": {"direction": "increasing", "rate": 0.12, "unit": "celsius/month", "confidence": 0.85},
            "anomalies": [{"date": "2025-02-11", "value": 35.2, "deviation": 3.4}],
            "seasonality": {"detected": true, "period": "yearly", "confidence": 0.7,
                "pattern": {"winter": {"avg": 5.1, "trend": "stable"}, "summer": {"avg": 27.9, "trend": "increasing"}}}
        }}}"#;
        let parsed: TrendResponse = serde_json::from_str(body).unwrap();
        let entry = &parsed.data["temperature"];
        assert_eq!(entry.trend.direction, TrendDirection::Increasing);
        assert_eq!(entry.anomalies.len(), 1);
        let seasonality = entry.seasonality.as_ref().unwrap();
        assert!(seasonality.detected);
        assert_eq!(seasonality.period.as_deref(), Some("yearly"));
        assert_eq!(seasonality.pattern.len(), 2);
    }

    #[test]
    fn test_decode_undetected_and_null_seasonality() {
        let body = r#"{"data": {
            "humidity": {"trend": {"direction": "stable", "rate": 0.0, "unit": "percent/month", "confidence": 0.6},
                "anomalies": [], "seasonality": {"detected": false, "confidence": 0}},
            "wind": {"trend": {"direction": "decreasing", "rate": -0.4, "unit": "km/h/month", "confidence": 0.55},
                "seasonality": null}
        }}"#;
        let parsed: TrendResponse = serde_json::from_str(body).unwrap();
        let humidity = &parsed.data["humidity"];
        assert!(humidity.anomalies.is_empty());
        let seasonality = humidity.seasonality.as_ref().unwrap();
        assert!(!seasonality.detected);
        assert!(seasonality.pattern.is_empty());
        assert!(parsed.data["wind"].seasonality.is_none());
        assert!(parsed.data["wind"].anomalies.is_empty());
    }
}
