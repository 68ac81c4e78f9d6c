//! Entity list query.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use super::query::{QueryCell, QueryState};
use crate::port::{EntityFetcher, EntityRequest};

/// A cached list query against one [`EntityFetcher`].
pub struct EntityQuery<E> {
    fetcher: Arc<dyn EntityFetcher<E>>,
    request: EntityRequest,
    enabled: bool,
    cell: QueryCell<Vec<E>>,
}

impl<E: Clone + Send + Sync> EntityQuery<E> {
    pub fn new(fetcher: Arc<dyn EntityFetcher<E>>, request: EntityRequest, enabled: bool) -> Self {
        Self {
            fetcher,
            request,
            enabled,
            cell: QueryCell::new(enabled),
        }
    }

    /// Fetch the list and store the result. No-op when disabled.
    pub async fn refetch(&self) {
        if !self.enabled {
            return;
        }

        let ticket = self.cell.begin();
        debug!(
            source = self.fetcher.source_name(),
            sport = %self.request.sport,
            endpoint = %self.request.endpoint,
            "Fetching entities"
        );

        let result = self.fetcher.fetch(&self.request).await;
        match &result {
            Ok(items) => debug!(count = items.len(), "Fetched entities"),
            Err(err) => warn!(
                source = self.fetcher.source_name(),
                sport = %self.request.sport,
                endpoint = %self.request.endpoint,
                error = %err,
                "Entity fetch failed"
            ),
        }
        self.cell.settle(ticket, result);
    }

    #[must_use]
    pub fn snapshot(&self) -> QueryState<Vec<E>> {
        self.cell.snapshot()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.cell.subscribe()
    }
}
