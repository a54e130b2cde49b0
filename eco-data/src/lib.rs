//! Data processing for EcoVision responses.
//!
//! This crate turns the three backend response shapes into the flat view
//! models a chart layer consumes, and keeps the raw-mode pager consistent
//! with what the backend reported.

pub mod normalize;
pub mod pagination;
pub mod quality;
pub mod series;

pub use normalize::{normalize, NormalizedResponse, RawPage, RawView, SummaryView, TrendView};
pub use pagination::PaginationState;
pub use quality::QualityIndicator;
