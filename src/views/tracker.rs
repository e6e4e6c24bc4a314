//! Liveness guard for fetch results
//!
//! Every fetch takes a [`Ticket`]. When the result arrives it is applied only
//! if no newer fetch has started and the owning view is still mounted.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Ticket for one in-flight fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
struct TrackerState {
    generation: AtomicU64,
    mounted: AtomicBool,
}

/// Shared request tracker.
///
/// Clones share state, so a clone held outside the view can unmount it while
/// a fetch is in flight.
#[derive(Debug, Clone)]
pub struct RequestTracker {
    state: Arc<TrackerState>,
}

impl Default for RequestTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestTracker {
    /// Create a tracker for a freshly mounted view.
    pub fn new() -> Self {
        Self {
            state: Arc::new(TrackerState {
                generation: AtomicU64::new(0),
                mounted: AtomicBool::new(true),
            }),
        }
    }

    /// Start a fetch. Any earlier ticket becomes stale.
    pub fn begin(&self) -> Ticket {
        Ticket(self.state.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether a result for `ticket` may still be applied.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.is_mounted() && self.state.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Mark the view as gone. All outstanding and future results are dropped.
    pub fn unmount(&self) {
        self.state.mounted.store(false, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.state.mounted.load(Ordering::SeqCst)
    }
}
