//! Thread-safe query cell tracking loading and error status.
//!
//! A [`QueryCell`] holds the latest result of one remote query together with
//! its in-flight flag. Each fetch takes a [`Ticket`] from [`QueryCell::begin`]
//! and hands it back to [`QueryCell::settle`]; results for a ticket older than
//! the latest `begin` or `invalidate` are discarded, so a slow response can
//! never overwrite a newer one.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

use crate::error::{Error, Result};

/// Point-in-time view of a query.
#[derive(Debug)]
pub struct QueryState<T> {
    /// Last successfully fetched value. Kept across failed refetches.
    pub data: Option<T>,
    /// A fetch is in flight, or an enabled query has not fetched yet.
    pub is_loading: bool,
    /// Error of the most recent fetch, cleared by the next success.
    pub error: Option<Arc<Error>>,
}

impl<T> QueryState<T> {
    /// State of an enabled query that has not resolved yet.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            data: None,
            is_loading: true,
            error: None,
        }
    }

    /// State of a disabled query.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            data: None,
            is_loading: false,
            error: None,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl<T: Clone> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            is_loading: self.is_loading,
            error: self.error.clone(),
        }
    }
}

/// Receipt for one fetch, returned by [`QueryCell::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a ticket must be settled or the query stays loading"]
pub struct Ticket(u64);

struct Inner<T> {
    state: QueryState<T>,
    generation: u64,
}

/// Shared, lock-protected query state with change notifications.
pub struct QueryCell<T> {
    inner: RwLock<Inner<T>>,
    revision: watch::Sender<u64>,
}

impl<T: Clone> QueryCell<T> {
    /// Create a cell; enabled cells start pending, disabled cells idle.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        let state = if enabled {
            QueryState::pending()
        } else {
            QueryState::idle()
        };
        let (revision, _) = watch::channel(0);
        Self {
            inner: RwLock::new(Inner {
                state,
                generation: 0,
            }),
            revision,
        }
    }

    /// Mark a fetch as started.
    pub fn begin(&self) -> Ticket {
        let ticket = {
            let mut inner = self.inner.write();
            inner.generation += 1;
            inner.state.is_loading = true;
            Ticket(inner.generation)
        };
        self.bump();
        ticket
    }

    /// Record the outcome of the fetch identified by `ticket`.
    ///
    /// Returns false when the result was stale and dropped.
    pub fn settle(&self, ticket: Ticket, result: Result<T>) -> bool {
        {
            let mut inner = self.inner.write();
            if ticket.0 != inner.generation {
                return false;
            }
            match result {
                Ok(data) => {
                    inner.state.data = Some(data);
                    inner.state.error = None;
                }
                Err(err) => {
                    inner.state.error = Some(Arc::new(err));
                }
            }
            inner.state.is_loading = false;
        }
        self.bump();
        true
    }

    /// Discard any in-flight result. The cell keeps its current data and its
    /// loading flag, so callers follow up with a fresh fetch.
    pub fn invalidate(&self) {
        self.inner.write().generation += 1;
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> QueryState<T> {
        self.inner.read().state.clone()
    }

    /// Subscribe to state changes. The value is a monotonically increasing
    /// revision number.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn bump(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}
