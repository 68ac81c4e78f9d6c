//! Application services (use cases).
//!
//! These services track remote query state and join entities with
//! favorites to implement the favorite-annotated list.

pub mod annotate;
pub mod entities;
pub mod favorites;
pub mod list;
pub mod query;

pub use annotate::{annotate, favorited_ids};
pub use entities::EntityQuery;
pub use favorites::FavoritesQuery;
pub use list::{AnnotatedList, FavoriteList, IdFn, ListChanges};
pub use query::{QueryCell, QueryState, Ticket};
