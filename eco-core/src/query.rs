//! Mapping a filter selection onto a backend request.
//!
//! Unset filters are omitted from the query string entirely. Multiple
//! filters narrow the result (the backend ANDs them).

use crate::filter::{AnalysisType, FilterState};
use eco_utils::dates::format_date;
use std::fmt;

/// Backend resources, relative to the API base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Climate,
    Trends,
    Summary,
    Locations,
    Metrics,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Climate => "/climate",
            Endpoint::Trends => "/trends",
            Endpoint::Summary => "/summary",
            Endpoint::Locations => "/locations",
            Endpoint::Metrics => "/metrics",
        }
    }

    /// The data endpoint serving an analysis mode.
    pub fn for_analysis(analysis_type: AnalysisType) -> Self {
        match analysis_type {
            AnalysisType::Raw => Endpoint::Climate,
            AnalysisType::Trends => Endpoint::Trends,
            AnalysisType::Weighted => Endpoint::Summary,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Page cursor for the raw endpoint. Ignored by the other two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    pub fn first(per_page: u32) -> Self {
        Self { page: 1, per_page }
    }
}

/// A GET request: endpoint plus ordered query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub params: Vec<(&'static str, String)>,
}

impl ApiRequest {
    /// A parameterless request, used for the catalogs.
    pub fn bare(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            params: Vec::new(),
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Percent-encoded `key=value&...`, empty when there are no parameters.
    pub fn query_string(&self) -> String {
        self.params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Endpoint path with its query string, e.g. `/summary?metric=temperature`.
    pub fn path_and_query(&self) -> String {
        let query = self.query_string();
        if query.is_empty() {
            self.endpoint.path().to_string()
        } else {
            format!("{}?{}", self.endpoint.path(), query)
        }
    }

    /// Absolute URL under `base_url` (which may or may not end in `/`).
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path_and_query())
    }
}

/// Build the request for the mode selected in `filters`.
///
/// `page` and `per_page` are only appended for the raw endpoint.
pub fn build_request(filters: &FilterState, page: PageRequest) -> ApiRequest {
    let analysis_type = filters.analysis_type();
    let mut params: Vec<(&'static str, String)> = Vec::new();

    if let Some(location_id) = filters.location_id() {
        params.push(("location_id", location_id.to_string()));
    }
    if let Some(start_date) = filters.start_date() {
        params.push(("start_date", format_date(&start_date)));
    }
    if let Some(end_date) = filters.end_date() {
        params.push(("end_date", format_date(&end_date)));
    }
    if let Some(metric) = filters.metric().filter(|m| !m.is_empty()) {
        params.push(("metric", metric.to_string()));
    }
    if let Some(quality) = filters.quality_threshold() {
        params.push(("quality_threshold", quality.as_str().to_string()));
    }
    if analysis_type.is_paginated() {
        params.push(("page", page.page.to_string()));
        params.push(("per_page", page.per_page.to_string()));
    }

    ApiRequest {
        endpoint: Endpoint::for_analysis(analysis_type),
        params,
    }
}
