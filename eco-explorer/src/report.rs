//! Sinks for non-fatal failures.

use eco_core::ExplorerError;
use log::warn;
use std::sync::{Arc, Mutex};

/// Receives every failure the explorer catches at its boundary.
pub trait ErrorSink: Send + Sync {
    fn report(&self, error: &ExplorerError);
}

/// Forwards reports to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogErrorSink;

impl ErrorSink for LogErrorSink {
    fn report(&self, error: &ExplorerError) {
        warn!("{}", error);
    }
}

/// Keeps every report so a caller can show or inspect them later.
/// Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    errors: Arc<Mutex<Vec<ExplorerError>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<ExplorerError> {
        match self.errors.lock() {
            Ok(errors) => errors.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn take(&self) -> Vec<ExplorerError> {
        match self.errors.lock() {
            Ok(mut errors) => std::mem::take(&mut *errors),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl ErrorSink for CollectingSink {
    fn report(&self, error: &ExplorerError) {
        warn!("{}", error);
        match self.errors.lock() {
            Ok(mut errors) => errors.push(error.clone()),
            Err(poisoned) => poisoned.into_inner().push(error.clone()),
        }
    }
}
