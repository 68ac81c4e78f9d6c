//! Domain types: identifiers, favorite records, scopes and annotated entities.

mod annotated;
mod favorite;
mod sport;

pub mod id;

pub use annotated::Annotated;
pub use favorite::{Favorite, FavoriteScope, NewFavorite};
pub use id::{FavoriteId, ItemId, WalletAddress};
pub use sport::{EntityKind, Sport};
