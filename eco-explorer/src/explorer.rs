//! The fetch orchestrator.
//!
//! `Explorer` is the only writer of `ExplorerState`. A user action becomes a
//! `PendingFetch` (validated, built, ticketed), the fetch runs without
//! borrowing the explorer, and `complete` folds the result back in. The
//! `apply`/`change_page`/`change_per_page` futures run all three steps for
//! callers that do not interleave actions.
//!
//! A completion lands in the slot of the mode it was *issued* under, and
//! only if no newer request for that mode has been issued since.

use crate::{
    catalog::{load_catalogs, CatalogLoad},
    report::{ErrorSink, LogErrorSink},
    sequence::{RequestSequence, RequestTicket},
    state::ExplorerState,
    transport::Transport,
};
use eco_core::{
    query::{build_request, ApiRequest, PageRequest},
    validate::{validate, Validation, Warning},
    AnalysisType, ExplorerError, FilterState, TransportError,
};
use eco_data::{normalize, NormalizedResponse, PaginationState};
use log::{debug, info, warn};
use serde_json::Value;

/// What became of one user action.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    /// The response was normalized into the slot of this mode.
    Applied(AnalysisType),
    /// Validation refused the action; nothing was sent.
    Blocked(Vec<Warning>),
    /// A newer request for the same mode was issued first; result dropped.
    Superseded,
    /// The request failed; prior data is untouched.
    Failed(ExplorerError),
    /// The action has no meaning in the current mode; nothing was sent.
    Ignored,
}

impl ApplyOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ApplyOutcome::Applied(_))
    }
}

/// A request that has been issued but not yet completed.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFetch {
    pub ticket: RequestTicket,
    pub request: ApiRequest,
    pub page: PageRequest,
}

impl PendingFetch {
    pub fn mode(&self) -> AnalysisType {
        self.ticket.mode
    }

    pub async fn send<T: Transport + ?Sized>(&self, transport: &T) -> Result<Value, TransportError> {
        transport.get_json(&self.request).await
    }
}

/// Result of turning a user action into a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    Send(PendingFetch),
    Skip(ApplyOutcome),
}

pub struct Explorer<T> {
    transport: T,
    sink: Box<dyn ErrorSink>,
    sequence: RequestSequence,
    state: ExplorerState,
}

impl<T: Transport> Explorer<T> {
    /// Explorer that reports failures to the log.
    pub fn new(transport: T) -> Self {
        Self::with_sink(transport, Box::new(LogErrorSink))
    }

    pub fn with_sink(transport: T, sink: Box<dyn ErrorSink>) -> Self {
        Self {
            transport,
            sink,
            sequence: RequestSequence::new(),
            state: ExplorerState::new(),
        }
    }

    pub fn state(&self) -> &ExplorerState {
        &self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn filters(&self) -> &FilterState {
        &self.state.filters
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.state.pagination
    }

    /// Mark the catalogs as loading. Pair with `complete_catalogs` once
    /// `catalog::load_catalogs` has returned.
    pub fn begin_load_catalogs(&mut self) {
        debug!("loading catalogs");
        self.state.catalogs_loading = true;
    }

    /// Fold a finished catalog load into the state. Failures are reported and
    /// leave the matching filter disabled; they never abort startup.
    pub fn complete_catalogs(&mut self, load: CatalogLoad) {
        match load.locations {
            Ok(locations) => self.state.catalogs.locations.loaded(locations),
            Err(e) => {
                self.sink.report(&e);
                self.state.catalogs.locations.failed(e);
            }
        }
        match load.metrics {
            Ok(metrics) => self.state.catalogs.metrics.loaded(metrics),
            Err(e) => {
                self.sink.report(&e);
                self.state.catalogs.metrics.failed(e);
            }
        }
        self.state.catalogs_loading = false;
    }

    /// Load both catalogs concurrently and fold them in.
    pub async fn load_catalogs(&mut self) {
        self.begin_load_catalogs();
        let load = load_catalogs(&self.transport).await;
        self.complete_catalogs(load);
    }

    /// Replace the filter selection without fetching. Validation is re-run
    /// so warnings show up before the user applies.
    pub fn update_filters(&mut self, filters: FilterState) -> &Validation {
        self.state.validation = validate(&filters);
        self.state.filters = filters;
        &self.state.validation
    }

    /// Switch analysis mode. Any mode may follow any other; the raw pager is
    /// left as it is.
    pub fn select_analysis_type(&mut self, mode: AnalysisType) -> &Validation {
        let previous = self.state.filters.analysis_type();
        if previous != mode {
            debug!("analysis mode {} -> {}", previous, mode);
        }
        let filters = self.state.filters.clone().with_analysis_type(mode);
        self.update_filters(filters)
    }

    /// Back to empty filters in raw mode. Never blocked; clears warnings.
    pub fn reset(&mut self) {
        self.state.filters = FilterState::new();
        self.state.validation = Validation::ok();
    }

    /// Adopt `filters` and prepare a request for their mode, starting from
    /// the first page.
    pub fn begin_apply(&mut self, filters: FilterState) -> Dispatch {
        self.update_filters(filters);
        let validation = self.state.validation.clone();
        if !validation.can_apply {
            let blocked = ExplorerError::ValidationBlocked {
                warnings: validation.warnings.clone(),
            };
            info!("apply {}", blocked);
            return Dispatch::Skip(ApplyOutcome::Blocked(validation.warnings));
        }
        let page = PageRequest::first(self.state.pagination.per_page);
        Dispatch::Send(self.issue(page))
    }

    /// Prepare a request for `page` of the raw listing. The pager itself only
    /// moves once the response arrives.
    pub fn begin_change_page(&mut self, page: u32) -> Dispatch {
        if self.state.filters.analysis_type() != AnalysisType::Raw || page == 0 {
            return Dispatch::Skip(ApplyOutcome::Ignored);
        }
        let page = PageRequest::new(page, self.state.pagination.per_page);
        Dispatch::Send(self.issue(page))
    }

    /// Prepare a request with a new page size. Always goes back to page 1.
    pub fn begin_change_per_page(&mut self, per_page: u32) -> Dispatch {
        if self.state.filters.analysis_type() != AnalysisType::Raw {
            return Dispatch::Skip(ApplyOutcome::Ignored);
        }
        if !PaginationState::is_supported_per_page(per_page) {
            let warnings = vec![Warning::UnsupportedPageSize {
                requested: per_page,
            }];
            info!("page size {} rejected", per_page);
            return Dispatch::Skip(ApplyOutcome::Blocked(warnings));
        }
        Dispatch::Send(self.issue(PageRequest::first(per_page)))
    }

    fn issue(&mut self, page: PageRequest) -> PendingFetch {
        let mode = self.state.filters.analysis_type();
        let request = build_request(&self.state.filters, page);
        let ticket = self.sequence.issue(mode);
        self.state.loading = true;
        debug!(
            "issuing {} request #{}: {}",
            mode,
            ticket.seq,
            request.path_and_query()
        );
        PendingFetch {
            ticket,
            request,
            page,
        }
    }

    /// Fold a finished fetch back into the state.
    ///
    /// Superseded completions are dropped whether they succeeded or not.
    /// A failure is reported and recorded on the slot; the slot's data is
    /// left as it was.
    pub fn complete(
        &mut self,
        pending: PendingFetch,
        result: Result<Value, TransportError>,
    ) -> ApplyOutcome {
        let mode = pending.mode();
        if !self.sequence.settle(&pending.ticket) {
            debug!("discarding superseded {} response #{}", mode, pending.ticket.seq);
            return ApplyOutcome::Superseded;
        }
        self.state.loading = self.sequence.any_pending();

        match result.and_then(|payload| normalize(mode, payload, pending.page)) {
            Ok(normalized) => {
                self.store(normalized);
                self.state.last_error = None;
                ApplyOutcome::Applied(mode)
            }
            Err(reason) => {
                let error = ExplorerError::FetchFailed { mode, reason };
                warn!("{}", error);
                self.sink.report(&error);
                match mode {
                    AnalysisType::Raw => self.state.raw.failed(error.clone()),
                    AnalysisType::Trends => self.state.trends.failed(error.clone()),
                    AnalysisType::Weighted => self.state.summary.failed(error.clone()),
                }
                self.state.last_error = Some(error.clone());
                ApplyOutcome::Failed(error)
            }
        }
    }

    // All fields a response touches are written here, together.
    fn store(&mut self, normalized: NormalizedResponse) {
        match normalized {
            NormalizedResponse::Raw(page) => {
                self.state.pagination = page.pagination;
                self.state.raw.loaded(page.view);
            }
            NormalizedResponse::Trends(view) => self.state.trends.loaded(view),
            NormalizedResponse::Weighted(view) => self.state.summary.loaded(view),
        }
    }

    async fn run(&mut self, dispatch: Dispatch) -> ApplyOutcome {
        match dispatch {
            Dispatch::Skip(outcome) => outcome,
            Dispatch::Send(pending) => {
                let result = pending.send(&self.transport).await;
                self.complete(pending, result)
            }
        }
    }

    /// Apply `filters` and fetch the first page (raw) or the full result.
    pub async fn apply(&mut self, filters: FilterState) -> ApplyOutcome {
        let dispatch = self.begin_apply(filters);
        self.run(dispatch).await
    }

    /// Re-apply the current filters.
    pub async fn refresh(&mut self) -> ApplyOutcome {
        let filters = self.state.filters.clone();
        self.apply(filters).await
    }

    pub async fn change_page(&mut self, page: u32) -> ApplyOutcome {
        let dispatch = self.begin_change_page(page);
        self.run(dispatch).await
    }

    pub async fn change_per_page(&mut self, per_page: u32) -> ApplyOutcome {
        let dispatch = self.begin_change_per_page(per_page);
        self.run(dispatch).await
    }
}
