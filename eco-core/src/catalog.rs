//! Location and metric catalogs, fetched once per session.

use serde::{Deserialize, Serialize};

/// A monitoring location from `/locations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub region: Option<String>,
}

/// A measurable quantity from `/metrics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub id: i64,
    /// Key used in the `metric` query parameter, e.g. "temperature".
    pub name: String,
    pub display_name: String,
    pub unit: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// `{data: [...]}` envelope shared by both catalog endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_optional_fields() {
        let body = r#"{"data": [
            {"id": 1, "name": "Irvine", "country": "USA", "latitude": 33.68, "longitude": -117.82, "region": "California"},
            {"id": 2, "name": "Nairobi", "country": "Kenya"}
        ]}"#;
        let parsed: CatalogResponse<Location> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.data[0].region.as_deref(), Some("California"));
        assert_eq!(parsed.data[1].latitude, None);
    }

    #[test]
    fn test_metric_catalog() {
        let body = r#"{"data": [{"id": 1, "name": "temperature", "display_name": "Temperature", "unit": "celsius", "description": "Average daily temperature"}]}"#;
        let parsed: CatalogResponse<Metric> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data[0].name, "temperature");
        assert_eq!(parsed.data[0].unit, "celsius");
    }

    #[test]
    fn test_missing_data_is_empty_catalog() {
        let parsed: CatalogResponse<Metric> = serde_json::from_str("{}").unwrap();
        assert!(parsed.data.is_empty());
    }
}
