//! Error taxonomy for the EcoVision crates.
//!
//! Nothing here is fatal. The orchestrator catches every failure at its
//! boundary and turns it into an outcome plus a report.

use crate::{filter::AnalysisType, validate::Warning};
use std::fmt;

/// Which startup catalog a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Catalog {
    Locations,
    Metrics,
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Catalog::Locations => write!(f, "locations"),
            Catalog::Metrics => write!(f, "metrics"),
        }
    }
}

/// Failure of a single HTTP exchange, as seen by the transport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Non-2xx status from the backend.
    #[error("HTTP status {0}")]
    Http(u16),
    /// Connection, timeout or other I/O failure.
    #[error("network error: {0}")]
    Network(String),
    /// The body was not the JSON shape the endpoint is contracted to return.
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    CatalogLoadFailed,
    FetchFailed,
    ValidationBlocked,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExplorerError {
    #[error("failed to load {catalog} catalog: {reason}")]
    CatalogLoadFailed {
        catalog: Catalog,
        reason: TransportError,
    },
    #[error("{mode} fetch failed: {reason}")]
    FetchFailed {
        mode: AnalysisType,
        reason: TransportError,
    },
    /// A deliberate gate, not a fault. No request was sent.
    #[error("request blocked: {}", warning_codes(.warnings))]
    ValidationBlocked { warnings: Vec<Warning> },
}

impl ExplorerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExplorerError::CatalogLoadFailed { .. } => ErrorKind::CatalogLoadFailed,
            ExplorerError::FetchFailed { .. } => ErrorKind::FetchFailed,
            ExplorerError::ValidationBlocked { .. } => ErrorKind::ValidationBlocked,
        }
    }
}

fn warning_codes(warnings: &[Warning]) -> String {
    warnings
        .iter()
        .map(Warning::code)
        .collect::<Vec<_>>()
        .join(", ")
}
