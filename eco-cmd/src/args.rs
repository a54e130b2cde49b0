//! Shared command-line options.

use chrono::NaiveDate;
use clap::Args;
use eco_core::{AnalysisType, FilterState, Quality};
use eco_explorer::HttpTransport;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

/// Where the backend lives and how long to wait for it.
#[derive(Args, Debug, Clone)]
pub struct ApiOptions {
    /// Base URL of the climate API
    #[arg(long, env = "ECO_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30, global = true)]
    pub timeout_secs: u64,
}

impl ApiOptions {
    pub fn transport(&self) -> anyhow::Result<HttpTransport> {
        Ok(HttpTransport::new(
            self.api_url.clone(),
            Duration::from_secs(self.timeout_secs),
        )?)
    }
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    eco_utils::dates::parse_date(s).map_err(|_| format!("{s:?} is not a YYYY-MM-DD date"))
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Location id (required for trends)
    #[arg(short = 'l', long)]
    pub location_id: Option<i64>,

    /// First day of the range, YYYY-MM-DD
    #[arg(long, value_parser = parse_date_arg)]
    pub start_date: Option<NaiveDate>,

    /// Last day of the range, YYYY-MM-DD
    #[arg(long, value_parser = parse_date_arg)]
    pub end_date: Option<NaiveDate>,

    /// Metric name, e.g. temperature
    #[arg(short = 'm', long)]
    pub metric: Option<String>,

    /// Minimum quality: poor, questionable, good or excellent
    #[arg(short = 'q', long)]
    pub quality: Option<Quality>,

    /// Analysis mode: raw, trends or weighted
    #[arg(long, default_value = "raw")]
    pub mode: AnalysisType,
}

impl FilterArgs {
    pub fn to_filter_state(&self) -> FilterState {
        FilterState::new()
            .with_location(self.location_id)
            .with_date_range(self.start_date, self.end_date)
            .with_metric(self.metric.as_deref())
            .with_quality_threshold(self.quality)
            .with_analysis_type(self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        filters: FilterArgs,
    }

    #[test]
    fn test_filters_from_flags() {
        let cli = TestCli::try_parse_from([
            "eco",
            "--location-id",
            "3",
            "--start-date",
            "2025-01-01",
            "--metric",
            "temperature",
            "-q",
            "good",
            "--mode",
            "weighted",
        ])
        .unwrap();
        let filters = cli.filters.to_filter_state();
        assert_eq!(filters.location_id(), Some(3));
        assert_eq!(filters.start_date(), NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(filters.end_date(), None);
        assert_eq!(filters.metric(), Some("temperature"));
        assert_eq!(filters.quality_threshold(), Some(Quality::Good));
        assert_eq!(filters.analysis_type(), AnalysisType::Weighted);
    }

    #[test]
    fn test_defaults_to_raw_without_filters() {
        let cli = TestCli::try_parse_from(["eco"]).unwrap();
        let filters = cli.filters.to_filter_state();
        assert_eq!(filters, FilterState::new());
    }

    #[test]
    fn test_bad_date_is_rejected() {
        assert!(TestCli::try_parse_from(["eco", "--end-date", "03/01/2025"]).is_err());
        assert!(TestCli::try_parse_from(["eco", "--mode", "summary"]).is_err());
    }
}
