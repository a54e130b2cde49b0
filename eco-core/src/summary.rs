//! Weighted-mode response shape from `/summary`.

use crate::quality::Quality;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary statistics for one metric.
///
/// `quality_distribution` maps a grade to its share in `[0, 1]`. Grades may
/// be missing and shares need not sum to exactly one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub weighted_avg: f64,
    pub unit: String,
    #[serde(default)]
    pub quality_distribution: BTreeMap<Quality, f64>,
}

/// `{data: {metric: SummaryEntry}}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SummaryResponse {
    #[serde(default)]
    pub data: BTreeMap<String, SummaryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_summary_map() {
        let body = r#"{"data": {
            "temperature": {"min": 2.5, "max": 31.0, "avg": 17.1, "weighted_avg": 17.4, "unit": "celsius",
                "quality_distribution": {"excellent": 0.5, "good": 0.3, "questionable": 0.1, "poor": 0.1}},
            "precipitation": {"min": 0.0, "max": 40.2, "avg": 3.3, "weighted_avg": 3.1, "unit": "mm"}
        }}"#;
        let parsed: SummaryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.len(), 2);
        let temperature = &parsed.data["temperature"];
        assert_eq!(temperature.quality_distribution[&Quality::Excellent], 0.5);
        assert!(parsed.data["precipitation"].quality_distribution.is_empty());
    }
}
