//! Plain-text rendering of the explorer's view models.

use eco_core::catalog::{Location, Metric};
use eco_data::{
    normalize::{confidence_percent, Severity},
    pagination::MAX_VISIBLE_PAGES,
    PaginationState, RawView, SummaryView, TrendView,
};
use std::fmt::Write;

pub fn render_raw(view: &RawView, pagination: &PaginationState) -> String {
    let mut out = String::new();
    if view.is_empty() {
        let _ = writeln!(out, "No measurements match these filters.");
    }
    for m in &view.measurements {
        let _ = writeln!(
            out,
            "{}  {:<20} {:<16} {:>10.2} {:<10} {}",
            m.date, m.location_name, m.metric_name, m.value, m.unit, m.quality
        );
    }

    if let Some(quality) = &view.quality {
        let _ = writeln!(out, "\nData quality ({} measurements)", quality.total);
        for bucket in &quality.buckets {
            let _ = writeln!(
                out,
                "  {:<13} {:>5.1}%  ({})",
                bucket.quality.to_string(),
                bucket.percentage,
                bucket.count
            );
        }
    }

    let _ = writeln!(out);
    match pagination.item_range() {
        Some((first, last)) => {
            let _ = write!(
                out,
                "Showing {}-{} of {} items",
                first, last, pagination.total_count
            );
        }
        None => {
            let _ = write!(out, "Showing 0 of {} items", pagination.total_count);
        }
    }
    let window = pagination.page_window(MAX_VISIBLE_PAGES);
    if window.total_pages > 1 {
        let mut pages: Vec<String> = Vec::new();
        if window.has_prev {
            pages.push("<".to_string());
        }
        if window.show_first {
            pages.push("1".to_string());
        }
        if window.leading_ellipsis {
            pages.push("...".to_string());
        }
        for page in window.pages() {
            if page == window.current {
                pages.push(format!("[{page}]"));
            } else {
                pages.push(page.to_string());
            }
        }
        if window.trailing_ellipsis {
            pages.push("...".to_string());
        }
        if window.show_last {
            pages.push(window.total_pages.to_string());
        }
        if window.has_next {
            pages.push(">".to_string());
        }
        let _ = write!(out, "  |  {}", pages.join(" "));
    }
    let _ = writeln!(out, "  ({} per page)", pagination.per_page);
    out
}

pub fn render_summary(view: &SummaryView) -> String {
    let mut out = String::new();
    if view.is_empty() {
        let _ = writeln!(out, "No summary data for these filters.");
        return out;
    }
    for (metric, entry) in &view.entries {
        let _ = writeln!(out, "{} ({})", metric, entry.unit);
        let _ = writeln!(
            out,
            "  min {:.2}  max {:.2}  avg {:.2}  weighted avg {:.2}",
            entry.min, entry.max, entry.avg, entry.weighted_avg
        );
        match view.quality_shares(metric) {
            Some(shares) => {
                let parts: Vec<String> = shares
                    .iter()
                    .map(|s| format!("{} {:.1}%", s.quality, s.percentage))
                    .collect();
                let _ = writeln!(out, "  quality: {}", parts.join(", "));
            }
            None => {
                let _ = writeln!(out, "  quality: no distribution reported");
            }
        }
    }
    out
}

pub fn render_trends(view: &TrendView) -> String {
    let mut out = String::new();
    if view.is_empty() {
        let _ = writeln!(out, "No trend data for these filters.");
        return out;
    }
    for (metric, entry) in &view.entries {
        let trend = &entry.trend;
        let _ = writeln!(
            out,
            "{}: {} at {:.2} {} (confidence {:.1}%)",
            metric,
            trend.direction,
            trend.rate,
            trend.unit,
            confidence_percent(trend.confidence)
        );

        let anomalies = view.anomalies(metric);
        if anomalies.is_empty() {
            let _ = writeln!(out, "  no anomalies");
        }
        for anomaly in anomalies {
            let marker = match anomaly.severity {
                Severity::High => "!!",
                Severity::Low => "! ",
            };
            let _ = writeln!(
                out,
                "  {} {}  {:>10.2}  {:+.1} sd",
                marker, anomaly.date, anomaly.value, anomaly.deviation
            );
        }

        match (view.seasonal_pattern(metric), entry.seasonality.as_ref()) {
            (Some(pattern), Some(seasonality)) => {
                let _ = writeln!(
                    out,
                    "  seasonality: {} (confidence {:.1}%)",
                    seasonality.period.as_deref().unwrap_or("unknown period"),
                    confidence_percent(seasonality.confidence)
                );
                for (season, row) in pattern {
                    let _ = writeln!(out, "    {:<10} avg {:>8.2}  {}", season, row.avg, row.trend);
                }
            }
            _ => {
                let _ = writeln!(out, "  no seasonality detected");
            }
        }
    }
    out
}

pub fn render_locations(locations: &[Location]) -> String {
    let mut out = String::new();
    for location in locations {
        let region = location
            .region
            .as_deref()
            .map(|r| format!(", {r}"))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{:>4}  {}{} ({})",
            location.id, location.name, region, location.country
        );
    }
    out
}

pub fn render_metrics(metrics: &[Metric]) -> String {
    let mut out = String::new();
    for metric in metrics {
        let _ = writeln!(
            out,
            "{:>4}  {:<16} {} [{}]",
            metric.id, metric.name, metric.display_name, metric.unit
        );
    }
    out
}
