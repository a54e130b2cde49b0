//! Shaping a raw measurement list into chart series.
//!
//! Dates are categorical labels. Each `(location, metric)` pair becomes its
//! own series, so two metrics at the same place and day are never merged.

use eco_core::{measurement::RawMeasurement, Quality};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub location_name: String,
    pub metric_name: String,
    pub unit: String,
    /// One slot per label; `None` where the series has no value that day.
    pub values: Vec<Option<f64>>,
    pub qualities: Vec<Option<Quality>>,
}

impl Series {
    /// Legend label, e.g. "Irvine · temperature".
    pub fn label(&self) -> String {
        format!("{} · {}", self.location_name, self.metric_name)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartSeries {
    /// Distinct dates, sorted ascending.
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    /// Y axis unit, taken from the first measurement.
    pub unit: Option<String>,
}

impl ChartSeries {
    pub fn from_measurements(measurements: &[RawMeasurement]) -> Self {
        let labels: Vec<String> = measurements
            .iter()
            .map(|m| m.date.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let index: BTreeMap<&str, usize> = labels
            .iter()
            .enumerate()
            .map(|(i, date)| (date.as_str(), i))
            .collect();

        let mut grouped: BTreeMap<(&str, &str), Series> = BTreeMap::new();
        for measurement in measurements {
            let series = grouped
                .entry((
                    measurement.location_name.as_str(),
                    measurement.metric_name.as_str(),
                ))
                .or_insert_with(|| Series {
                    location_name: measurement.location_name.clone(),
                    metric_name: measurement.metric_name.clone(),
                    unit: measurement.unit.clone(),
                    values: vec![None; labels.len()],
                    qualities: vec![None; labels.len()],
                });
            // First reading of a (location, metric, date) wins.
            let slot = index[measurement.date.as_str()];
            if series.values[slot].is_none() {
                series.values[slot] = Some(measurement.value);
                series.qualities[slot] = Some(measurement.quality);
            }
        }

        Self {
            unit: measurements.first().map(|m| m.unit.clone()),
            labels,
            series: grouped.into_values().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(location: &str, date: &str, metric: &str, value: f64) -> RawMeasurement {
        RawMeasurement {
            id: None,
            location_id: None,
            location_name: location.to_string(),
            latitude: None,
            longitude: None,
            date: date.to_string(),
            metric_name: metric.to_string(),
            value,
            unit: if metric == "temperature" { "celsius" } else { "percent" }.to_string(),
            quality: Quality::Good,
        }
    }

    #[test]
    fn test_labels_sorted_and_distinct() {
        let chart = ChartSeries::from_measurements(&[
            measurement("Irvine", "2025-03-02", "temperature", 19.0),
            measurement("Irvine", "2025-03-01", "temperature", 18.0),
            measurement("Oslo", "2025-03-01", "temperature", -2.0),
        ]);
        assert_eq!(chart.labels, vec!["2025-03-01", "2025-03-02"]);
        assert_eq!(chart.series.len(), 2);
        let oslo = chart.series.iter().find(|s| s.location_name == "Oslo").unwrap();
        assert_eq!(oslo.values, vec![Some(-2.0), None]);
        assert_eq!(chart.unit.as_deref(), Some("celsius"));
    }

    #[test]
    fn test_distinct_metrics_are_not_merged() {
        let chart = ChartSeries::from_measurements(&[
            measurement("Irvine", "2025-03-01", "temperature", 18.0),
            measurement("Irvine", "2025-03-01", "humidity", 64.0),
        ]);
        assert_eq!(chart.series.len(), 2);
        let humidity = chart.series.iter().find(|s| s.metric_name == "humidity").unwrap();
        assert_eq!(humidity.values, vec![Some(64.0)]);
        assert_eq!(humidity.unit, "percent");
        assert_eq!(humidity.label(), "Irvine · humidity");
    }

    #[test]
    fn test_empty_input() {
        let chart = ChartSeries::from_measurements(&[]);
        assert!(chart.is_empty());
        assert!(chart.labels.is_empty());
        assert_eq!(chart.unit, None);
    }
}
