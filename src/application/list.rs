//! Favorite-annotated entity list.
//!
//! [`FavoriteList`] is the single generic operation behind every
//! (sport, entity kind) list: it joins an [`EntityQuery`] with a
//! [`FavoritesQuery`] and exposes one toggle. It never edits either snapshot
//! itself; a toggle only shows up once the favorites query has refetched.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use super::annotate::annotate;
use super::entities::EntityQuery;
use super::favorites::FavoritesQuery;
use crate::domain::{Annotated, FavoriteScope, ItemId};
use crate::error::{Error, Result};

/// Extracts the canonical item id from an entity.
pub type IdFn<E> = Arc<dyn Fn(&E) -> Option<ItemId> + Send + Sync>;

/// Presentation-ready view of a [`FavoriteList`].
#[derive(Debug, Clone)]
pub struct AnnotatedList<E> {
    pub items: Vec<Annotated<E>>,
    /// Entities or favorites are loading.
    pub is_loading: bool,
    /// The entity fetch failed. Favorites failures never set this.
    pub is_error: bool,
    pub error: Option<Arc<Error>>,
    pub favorites_loading: bool,
    pub add_pending: bool,
    pub remove_pending: bool,
}

pub struct FavoriteList<E> {
    entities: EntityQuery<E>,
    favorites: FavoritesQuery,
    id_of: IdFn<E>,
}

impl<E: Clone + Send + Sync> FavoriteList<E> {
    pub fn new<F>(entities: EntityQuery<E>, favorites: FavoritesQuery, id_of: F) -> Self
    where
        F: Fn(&E) -> Option<ItemId> + Send + Sync + 'static,
    {
        Self {
            entities,
            favorites,
            id_of: Arc::new(id_of),
        }
    }

    #[must_use]
    pub fn entities(&self) -> &EntityQuery<E> {
        &self.entities
    }

    #[must_use]
    pub fn favorites(&self) -> &FavoritesQuery {
        &self.favorites
    }

    #[must_use]
    pub fn scope(&self) -> &FavoriteScope {
        self.favorites.scope()
    }

    /// Refetch entities and favorites concurrently.
    pub async fn refresh(&self) {
        tokio::join!(self.entities.refetch(), self.favorites.refetch());
    }

    /// Derive the annotated list from the current snapshots.
    #[must_use]
    pub fn snapshot(&self) -> AnnotatedList<E> {
        let entities = self.entities.snapshot();
        let favorites = self.favorites.snapshot();

        let items = annotate(
            entities.data.as_deref().unwrap_or_default(),
            favorites.data.as_deref().unwrap_or_default(),
            |entity| (self.id_of)(entity),
        );

        AnnotatedList {
            items,
            is_loading: entities.is_loading || favorites.is_loading,
            is_error: entities.is_error(),
            error: entities.error,
            favorites_loading: favorites.is_loading,
            add_pending: self.favorites.add_pending(),
            remove_pending: self.favorites.remove_pending(),
        }
    }

    /// Mark or unmark the entity with id `id` as a favorite.
    ///
    /// Marking always issues an add, even if the entity is already
    /// favorited. Unmarking looks the favorite up in the current snapshot
    /// and removes it by its own handle; if no such favorite exists this
    /// returns `Ok(())` without touching the store. Store failures are
    /// returned unchanged.
    pub async fn set_favorited(&self, id: impl Into<ItemId>, favorited: bool) -> Result<()> {
        let item_id = id.into();

        if favorited {
            self.favorites.add_favorite(item_id).await?;
            return Ok(());
        }

        match self.favorites.find(&item_id) {
            Some(favorite) => self.favorites.remove_favorite(&favorite.id).await,
            None => {
                debug!(
                    scope = %self.favorites.scope(),
                    item_id = %item_id,
                    "No favorite to remove"
                );
                Ok(())
            }
        }
    }

    /// Start watching both underlying queries.
    ///
    /// Changes are tracked from this call on, so a change that lands between
    /// a `snapshot()` and the next [`ListChanges::changed`] is not lost.
    #[must_use]
    pub fn subscribe(&self) -> ListChanges {
        ListChanges {
            entities: self.entities.subscribe(),
            favorites: self.favorites.subscribe(),
        }
    }
}

/// Change notifications for one [`FavoriteList`], from [`FavoriteList::subscribe`].
pub struct ListChanges {
    entities: watch::Receiver<u64>,
    favorites: watch::Receiver<u64>,
}

impl ListChanges {
    /// Wait until either query changed since the last call (or since
    /// subscribing). Returns false once the list has been dropped.
    pub async fn changed(&mut self) -> bool {
        tokio::select! {
            result = self.entities.changed() => result.is_ok(),
            result = self.favorites.changed() => result.is_ok(),
        }
    }
}
