//! Latest-wins query debouncing
//!
//! Every submission bumps a shared generation counter. After the debounce
//! delay a submission only survives if no newer one arrived in the meantime;
//! superseded submissions resolve to `None` without explicit cancellation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::matcher::normalize_query;

/// Default debounce window for search input
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Handle identifying one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Debouncer shared by all submitters of one input stream
///
/// Cloning yields a handle onto the same generation counter.
#[derive(Debug, Clone)]
pub struct QueryDebouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Default for QueryDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl QueryDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Issue a ticket, superseding every earlier one
    pub fn ticket(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True if no ticket was issued after `ticket`
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Submit a raw query and wait out the debounce window
    ///
    /// Returns the normalized query if it is still the latest submission
    /// once the delay elapses. Queries too short to evaluate supersede
    /// pending submissions and resolve to `None` immediately.
    pub async fn submit(&self, query: &str) -> Option<String> {
        self.settle(self.ticket(), query).await
    }

    /// Wait out the debounce window for a ticket issued earlier
    ///
    /// Lets callers fix submission order synchronously before handing the
    /// wait to a spawned task.
    pub async fn settle(&self, ticket: Ticket, query: &str) -> Option<String> {
        let normalized = normalize_query(query)?;

        tokio::time::sleep(self.delay).await;

        if self.is_current(ticket) {
            Some(normalized)
        } else {
            debug!(query = %normalized, "Query superseded before debounce elapsed");
            None
        }
    }
}
