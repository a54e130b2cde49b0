//! Core types and request shaping for the EcoVision climate API.
//!
//! - `filter`: the user's filter selection and active analysis mode
//! - `validate`: mode-specific gating of a filter selection
//! - `query`: mapping a filter selection onto one of the three data endpoints
//! - `catalog`, `measurement`, `summary`, `trend`: backend response shapes
//! - `error`: the error taxonomy shared by every EcoVision crate

pub mod catalog;
pub mod error;
pub mod filter;
pub mod measurement;
pub mod quality;
pub mod query;
pub mod summary;
pub mod trend;
pub mod validate;

pub use error::{Catalog, ErrorKind, ExplorerError, TransportError};
pub use filter::{AnalysisType, FilterState};
pub use quality::Quality;
