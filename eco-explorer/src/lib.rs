//! Orchestration of EcoVision filter edits and data fetches.
//!
//! - `explorer`: the single writer of filter, pager and view-model state
//! - `sequence`: last-issued-wins bookkeeping per analysis mode
//! - `catalog`: concurrent startup load of the location and metric catalogs
//! - `transport`: the HTTP seam, with a reqwest implementation behind `api`
//! - `report`: where non-fatal failures are surfaced
//! - `state`: the view-model slots a renderer reads

pub mod catalog;
pub mod explorer;
pub mod report;
pub mod sequence;
pub mod state;
pub mod transport;

pub use catalog::CatalogLoad;
pub use explorer::{ApplyOutcome, Dispatch, Explorer, PendingFetch};
pub use report::{CollectingSink, ErrorSink, LogErrorSink};
pub use state::{ExplorerState, Slot};
pub use transport::Transport;

#[cfg(any(test, feature = "testing"))]
pub use transport::ReplayTransport;

#[cfg(feature = "api")]
pub use transport::HttpTransport;
