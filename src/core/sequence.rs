//! Request sequencing per render target.
//!
//! Several requests for the same container can be in flight at once.
//! Only the most recently issued one may render; responses that arrive
//! for older tickets are dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Monotonic ticket counter shared by everything that renders into one container.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new request, superseding all earlier ones.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Whether no request has been issued since `ticket`.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket.0
    }

    /// Invalidate every outstanding ticket without issuing a new request.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::Relaxed);
    }
}
