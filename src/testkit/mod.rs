//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`entities`] - [`StaticEntities`], a scripted
//!   [`EntityFetcher`](crate::port::EntityFetcher).
//! - [`favorites`] - [`MemoryFavorites`], an in-memory
//!   [`FavoritesStore`](crate::port::FavoritesStore) that records calls.

pub mod entities;
pub mod favorites;

pub use entities::StaticEntities;
pub use favorites::{MemoryFavorites, StoreCall};
