//! Favorites query and its two mutations.
//!
//! The query is keyed by wallet and scope. Without a wallet it stays idle, so
//! its snapshot is empty and not loading. Mutations go straight to the store
//! and then refetch; the snapshot itself is never edited locally.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::query::{QueryCell, QueryState};
use crate::domain::{Favorite, FavoriteId, FavoriteScope, ItemId, NewFavorite, WalletAddress};
use crate::error::{Error, Result};
use crate::port::FavoritesStore;

/// Favorites of one wallet within one scope.
pub struct FavoritesQuery {
    store: Arc<dyn FavoritesStore>,
    wallet: Option<WalletAddress>,
    scope: FavoriteScope,
    cell: QueryCell<Vec<Favorite>>,
    adds_in_flight: AtomicUsize,
    removes_in_flight: AtomicUsize,
}

/// Decrements an in-flight counter when dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl FavoritesQuery {
    pub fn new(
        store: Arc<dyn FavoritesStore>,
        wallet: Option<WalletAddress>,
        scope: FavoriteScope,
    ) -> Self {
        let enabled = wallet.is_some();
        Self {
            store,
            wallet,
            scope,
            cell: QueryCell::new(enabled),
            adds_in_flight: AtomicUsize::new(0),
            removes_in_flight: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn scope(&self) -> &FavoriteScope {
        &self.scope
    }

    /// Fetch the wallet's favorites. No-op without a wallet.
    ///
    /// Records outside this query's scope are dropped.
    pub async fn refetch(&self) {
        let Some(wallet) = &self.wallet else {
            return;
        };

        let ticket = self.cell.begin();
        let result = self.store.list(wallet, &self.scope).await.map(|favorites| {
            let total = favorites.len();
            let scoped: Vec<Favorite> = favorites
                .into_iter()
                .filter(|f| f.in_scope(&self.scope))
                .collect();
            if scoped.len() != total {
                warn!(
                    store = self.store.store_name(),
                    scope = %self.scope,
                    dropped = total - scoped.len(),
                    "Ignoring favorites outside scope"
                );
            }
            scoped
        });

        match &result {
            Ok(favorites) => debug!(
                scope = %self.scope,
                count = favorites.len(),
                "Fetched favorites"
            ),
            Err(err) => warn!(
                store = self.store.store_name(),
                scope = %self.scope,
                error = %err,
                "Favorites fetch failed"
            ),
        }
        self.cell.settle(ticket, result);
    }

    /// Create a favorite for `item_id` in this scope, then refetch.
    pub async fn add_favorite(&self, item_id: ItemId) -> Result<Favorite> {
        let wallet = self.wallet.as_ref().ok_or(Error::MissingWallet)?;
        let _pending = InFlight::enter(&self.adds_in_flight);

        let payload = NewFavorite::new(self.scope.clone(), item_id);
        let created = self.store.add(wallet, &payload).await?;
        info!(
            scope = %self.scope,
            item_id = %created.item_id,
            favorite_id = %created.id,
            "Favorite added"
        );

        self.cell.invalidate();
        self.refetch().await;
        Ok(created)
    }

    /// Delete the favorite with handle `id`, then refetch.
    pub async fn remove_favorite(&self, id: &FavoriteId) -> Result<()> {
        let wallet = self.wallet.as_ref().ok_or(Error::MissingWallet)?;
        let _pending = InFlight::enter(&self.removes_in_flight);

        self.store.remove(wallet, id).await?;
        info!(scope = %self.scope, favorite_id = %id, "Favorite removed");

        self.cell.invalidate();
        self.refetch().await;
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> QueryState<Vec<Favorite>> {
        self.cell.snapshot()
    }

    /// Look up the favorite for `item_id` in the current snapshot.
    #[must_use]
    pub fn find(&self, item_id: &ItemId) -> Option<Favorite> {
        self.snapshot()
            .data
            .and_then(|favorites| favorites.into_iter().find(|f| &f.item_id == item_id))
    }

    #[must_use]
    pub fn add_pending(&self) -> bool {
        self.adds_in_flight.load(Ordering::SeqCst) > 0
    }

    #[must_use]
    pub fn remove_pending(&self) -> bool {
        self.removes_in_flight.load(Ordering::SeqCst) > 0
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.cell.subscribe()
    }
}
