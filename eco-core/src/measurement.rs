//! Raw-mode response shape from `/climate`.

use crate::quality::Quality;
use serde::{Deserialize, Serialize};

/// One measurement of one metric at one location on one day.
///
/// `date` stays a string: it is a categorical chart axis key, never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMeasurement {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub location_id: Option<i64>,
    pub location_name: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub date: String,
    #[serde(rename = "metric", alias = "metric_name")]
    pub metric_name: String,
    pub value: f64,
    pub unit: String,
    pub quality: Quality,
}

/// Pagination metadata returned alongside a page of measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMeta {
    pub page: u32,
    pub total_count: u64,
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// `{data: [...], meta: {...}}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawEnvelope {
    pub data: Vec<RawMeasurement>,
    pub meta: RawMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "data": [
            {"id": 11, "location_id": 1, "location_name": "Irvine", "latitude": 33.68, "longitude": -117.82,
             "date": "2025-03-01", "metric": "temperature", "value": 18.2, "unit": "celsius", "quality": "good"},
            {"location_name": "Irvine", "date": "2025-03-01", "metric_name": "humidity",
             "value": 61.0, "unit": "percent", "quality": "excellent"}
        ],
        "meta": {"total_count": 47, "page": 2, "per_page": 20}
    }"#;

    #[test]
    fn test_envelope_decodes_both_metric_spellings() {
        let envelope: RawEnvelope = serde_json::from_str(BODY).unwrap();
        assert_eq!(envelope.data.len(), 2);
        assert_eq!(envelope.data[0].metric_name, "temperature");
        assert_eq!(envelope.data[1].metric_name, "humidity");
        assert_eq!(envelope.data[1].id, None);
        assert_eq!(envelope.meta.page, 2);
        assert_eq!(envelope.meta.total_count, 47);
    }

    #[test]
    fn test_unknown_quality_fails_decode() {
        let body = r#"{"data": [{"location_name": "X", "date": "2025-01-01", "metric": "m",
            "value": 1.0, "unit": "u", "quality": "superb"}], "meta": {"page": 1, "total_count": 1}}"#;
        assert!(serde_json::from_str::<RawEnvelope>(body).is_err());
    }
}
