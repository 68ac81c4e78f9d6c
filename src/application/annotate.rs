//! Join of an entity list with a favorites snapshot.

use std::collections::HashSet;

use crate::domain::{Annotated, Favorite, ItemId};

/// Set of item ids present in a favorites snapshot.
#[must_use]
pub fn favorited_ids(favorites: &[Favorite]) -> HashSet<&ItemId> {
    favorites.iter().map(|f| &f.item_id).collect()
}

/// Annotate each entity with whether its id appears in `favorites`.
///
/// Output order and length match `entities`. Entities for which `id_of`
/// yields `None` are never favorited.
pub fn annotate<E, F>(entities: &[E], favorites: &[Favorite], id_of: F) -> Vec<Annotated<E>>
where
    E: Clone,
    F: Fn(&E) -> Option<ItemId>,
{
    let favorited = favorited_ids(favorites);
    entities
        .iter()
        .map(|entity| {
            let is_favorite = id_of(entity).is_some_and(|id| favorited.contains(&id));
            Annotated::new(entity.clone(), is_favorite)
        })
        .collect()
}
