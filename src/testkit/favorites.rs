//! In-memory favorites store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Semaphore;

use crate::domain::{Favorite, FavoriteId, FavoriteScope, ItemId, NewFavorite, WalletAddress};
use crate::error::{Error, Result};
use crate::port::FavoritesStore;

/// A call received by [`MemoryFavorites`].
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    List {
        wallet: WalletAddress,
        scope: FavoriteScope,
    },
    Add {
        wallet: WalletAddress,
        favorite: NewFavorite,
    },
    Remove {
        wallet: WalletAddress,
        id: FavoriteId,
    },
}

/// A [`FavoritesStore`] backed by a map, with failure injection.
///
/// Mutations can be held open with [`MemoryFavorites::gate_mutations`] to
/// observe in-flight state.
#[derive(Default)]
pub struct MemoryFavorites {
    records: Mutex<HashMap<WalletAddress, Vec<Favorite>>>,
    calls: Mutex<Vec<StoreCall>>,
    next_id: AtomicU64,
    fail_lists: AtomicBool,
    fail_adds: AtomicBool,
    fail_removes: AtomicBool,
    leak_scopes: AtomicBool,
    gate: Mutex<Option<Arc<Semaphore>>>,
}

impl MemoryFavorites {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1000),
            ..Self::default()
        }
    }

    /// Insert a record directly, bypassing call recording.
    pub fn seed(
        &self,
        wallet: &WalletAddress,
        id: &str,
        item_id: &str,
        scope: FavoriteScope,
    ) {
        let favorite = Favorite {
            id: FavoriteId::from(id),
            item_id: ItemId::from(item_id),
            category: scope.category,
            subcategory: scope.subcategory,
            kind: scope.kind,
            created_at: None,
        };
        self.records
            .lock()
            .entry(wallet.clone())
            .or_default()
            .push(favorite);
    }

    pub fn fail_lists(&self, fail: bool) {
        self.fail_lists.store(fail, Ordering::SeqCst);
    }

    pub fn fail_adds(&self, fail: bool) {
        self.fail_adds.store(fail, Ordering::SeqCst);
    }

    pub fn fail_removes(&self, fail: bool) {
        self.fail_removes.store(fail, Ordering::SeqCst);
    }

    /// When set, `list` returns every record of the wallet regardless of scope.
    pub fn leak_scopes(&self, leak: bool) {
        self.leak_scopes.store(leak, Ordering::SeqCst);
    }

    /// Block mutations until permits are added to the returned semaphore.
    pub fn gate_mutations(&self) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        *self.gate.lock() = Some(gate.clone());
        gate
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().clone()
    }

    /// Current records of `wallet`, in insertion order.
    pub fn records(&self, wallet: &WalletAddress) -> Vec<Favorite> {
        self.records
            .lock()
            .get(wallet)
            .cloned()
            .unwrap_or_default()
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().push(call);
    }

    async fn pass_gate(&self) {
        let gate = self.gate.lock().clone();
        if let Some(gate) = gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
    }

    fn injected(&self, flag: &AtomicBool, what: &str) -> Result<()> {
        if flag.load(Ordering::SeqCst) {
            return Err(Error::Upstream {
                source_name: "memory",
                message: format!("injected {what} failure"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl FavoritesStore for MemoryFavorites {
    async fn list(&self, wallet: &WalletAddress, scope: &FavoriteScope) -> Result<Vec<Favorite>> {
        self.record(StoreCall::List {
            wallet: wallet.clone(),
            scope: scope.clone(),
        });
        self.injected(&self.fail_lists, "list")?;

        let leak = self.leak_scopes.load(Ordering::SeqCst);
        Ok(self
            .records(wallet)
            .into_iter()
            .filter(|f| leak || f.in_scope(scope))
            .collect())
    }

    async fn add(&self, wallet: &WalletAddress, favorite: &NewFavorite) -> Result<Favorite> {
        self.record(StoreCall::Add {
            wallet: wallet.clone(),
            favorite: favorite.clone(),
        });
        self.pass_gate().await;
        self.injected(&self.fail_adds, "add")?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = Favorite {
            id: FavoriteId::from(id),
            item_id: favorite.item_id.clone(),
            category: favorite.scope.category.clone(),
            subcategory: favorite.scope.subcategory.clone(),
            kind: favorite.scope.kind.clone(),
            created_at: Some(chrono::Utc::now()),
        };
        self.records
            .lock()
            .entry(wallet.clone())
            .or_default()
            .push(created.clone());
        Ok(created)
    }

    async fn remove(&self, wallet: &WalletAddress, id: &FavoriteId) -> Result<()> {
        self.record(StoreCall::Remove {
            wallet: wallet.clone(),
            id: id.clone(),
        });
        self.pass_gate().await;
        self.injected(&self.fail_removes, "remove")?;

        if let Some(records) = self.records.lock().get_mut(wallet) {
            records.retain(|f| &f.id != id);
        }
        Ok(())
    }

    fn store_name(&self) -> &'static str {
        "memory"
    }
}
