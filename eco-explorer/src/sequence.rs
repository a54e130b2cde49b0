//! Request sequencing.
//!
//! Every fetch gets a ticket numbered per analysis mode. A completion is
//! only applied if its ticket is still the newest one issued for its mode;
//! older completions are dropped on arrival instead of being cancelled.

use eco_core::AnalysisType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    pub mode: AnalysisType,
    pub seq: u64,
}

#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: [u64; 3],
    settled: [u64; 3],
}

fn slot(mode: AnalysisType) -> usize {
    match mode {
        AnalysisType::Raw => 0,
        AnalysisType::Trends => 1,
        AnalysisType::Weighted => 2,
    }
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket for `mode`, superseding any earlier one.
    pub fn issue(&mut self, mode: AnalysisType) -> RequestTicket {
        let latest = &mut self.latest[slot(mode)];
        *latest += 1;
        RequestTicket { mode, seq: *latest }
    }

    pub fn is_latest(&self, ticket: &RequestTicket) -> bool {
        self.latest[slot(ticket.mode)] == ticket.seq
    }

    /// Mark `ticket` complete. Returns false, and changes nothing, if a newer
    /// ticket has been issued since.
    pub fn settle(&mut self, ticket: &RequestTicket) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        self.settled[slot(ticket.mode)] = ticket.seq;
        true
    }

    /// The newest request for `mode` has not completed yet.
    pub fn is_pending(&self, mode: AnalysisType) -> bool {
        let i = slot(mode);
        self.latest[i] != self.settled[i]
    }

    pub fn any_pending(&self) -> bool {
        AnalysisType::ALL.iter().any(|mode| self.is_pending(*mode))
    }
}
