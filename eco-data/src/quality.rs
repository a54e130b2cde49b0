//! Quality breakdowns shown next to the charts.

use eco_core::{measurement::RawMeasurement, summary::SummaryEntry, Quality};
use eco_utils::numbers::{percentage, round1};
use serde::Serialize;

/// Count and share of one grade within a measurement list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityBucket {
    pub quality: Quality,
    pub count: usize,
    /// `count / total * 100`, one decimal.
    pub percentage: f64,
}

/// Per-grade distribution of a measurement list.
///
/// Only exists for non-empty lists: an empty list has no indicator at all,
/// rather than four zero buckets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityIndicator {
    pub total: usize,
    /// Every grade, best first, including grades with no measurements.
    pub buckets: Vec<QualityBucket>,
}

impl QualityIndicator {
    pub fn from_qualities<I>(qualities: I) -> Option<Self>
    where
        I: IntoIterator<Item = Quality>,
    {
        let mut counts = [0usize; 4];
        let mut total = 0usize;
        for quality in qualities {
            counts[slot(quality)] += 1;
            total += 1;
        }
        let buckets = Quality::ALL
            .iter()
            .map(|&quality| {
                let count = counts[slot(quality)];
                Some(QualityBucket {
                    quality,
                    count,
                    percentage: percentage(count, total)?,
                })
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Self { total, buckets })
    }

    pub fn from_measurements(measurements: &[RawMeasurement]) -> Option<Self> {
        Self::from_qualities(measurements.iter().map(|m| m.quality))
    }

    pub fn bucket(&self, quality: Quality) -> &QualityBucket {
        &self.buckets[slot(quality)]
    }

    pub fn count(&self, quality: Quality) -> usize {
        self.bucket(quality).count
    }

    pub fn percentage(&self, quality: Quality) -> f64 {
        self.bucket(quality).percentage
    }
}

// Index into `Quality::ALL`.
fn slot(quality: Quality) -> usize {
    match quality {
        Quality::Excellent => 0,
        Quality::Good => 1,
        Quality::Questionable => 2,
        Quality::Poor => 3,
    }
}

/// One grade's share of a summary entry, as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityShare {
    pub quality: Quality,
    pub percentage: f64,
}

/// Shares reported by the backend for one metric, best grade first.
///
/// Grades the backend left out are skipped; nothing is renormalized.
pub fn summary_shares(entry: &SummaryEntry) -> Vec<QualityShare> {
    Quality::ALL
        .iter()
        .filter_map(|quality| {
            entry
                .quality_distribution
                .get(quality)
                .map(|fraction| QualityShare {
                    quality: *quality,
                    percentage: round1(fraction * 100.0),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_two_good_one_poor() {
        let indicator =
            QualityIndicator::from_qualities([Quality::Good, Quality::Good, Quality::Poor]).unwrap();
        assert_eq!(indicator.total, 3);
        assert_eq!(indicator.percentage(Quality::Good), 66.7);
        assert_eq!(indicator.percentage(Quality::Poor), 33.3);
        assert_eq!(indicator.percentage(Quality::Excellent), 0.0);
        assert_eq!(indicator.percentage(Quality::Questionable), 0.0);
        assert_eq!(indicator.count(Quality::Good), 2);
    }

    #[test]
    fn test_empty_list_has_no_indicator() {
        assert_eq!(QualityIndicator::from_qualities(Vec::new()), None);
        assert_eq!(QualityIndicator::from_measurements(&[]), None);
    }

    #[test]
    fn test_buckets_are_best_first() {
        let indicator = QualityIndicator::from_qualities([Quality::Questionable]).unwrap();
        let order: Vec<Quality> = indicator.buckets.iter().map(|b| b.quality).collect();
        assert_eq!(order, Quality::ALL.to_vec());
        assert_eq!(indicator.percentage(Quality::Questionable), 100.0);
    }

    #[test]
    fn test_summary_shares_skip_missing_grades() {
        let mut distribution = BTreeMap::new();
        distribution.insert(Quality::Good, 0.6666);
        distribution.insert(Quality::Poor, 0.0);
        let entry = SummaryEntry {
            min: 0.0,
            max: 1.0,
            avg: 0.5,
            weighted_avg: 0.5,
            unit: "mm".to_string(),
            quality_distribution: distribution,
        };
        let shares = summary_shares(&entry);
        assert_eq!(
            shares,
            vec![
                QualityShare { quality: Quality::Good, percentage: 66.7 },
                QualityShare { quality: Quality::Poor, percentage: 0.0 },
            ]
        );
    }
}
