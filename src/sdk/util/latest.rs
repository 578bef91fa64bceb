use std::sync::atomic::{AtomicU64, Ordering};

/// Marker for one issued request; compare against [`LatestRequest`] on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Tracks which of several overlapping requests is the newest.
///
/// Issuing a ticket supersedes every earlier one. Results carrying a stale
/// ticket should be dropped by the caller.
#[derive(Debug, Default)]
pub struct LatestRequest {
    counter: AtomicU64,
}

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.counter.load(Ordering::SeqCst) == ticket.0
    }

    /// Passes `value` through only if no newer ticket was issued meanwhile.
    pub fn settle<T>(&self, ticket: RequestTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            log::debug!("Dropping result of superseded request {:?}", ticket);
            None
        }
    }
}
