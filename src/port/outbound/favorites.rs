//! Favorites store port.

use async_trait::async_trait;

use crate::domain::{Favorite, FavoriteId, FavoriteScope, NewFavorite, WalletAddress};
use crate::error::Result;

/// Persistence of favorite markers, keyed by wallet.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `list` should only return records in `scope`; callers still filter
/// - `remove` is keyed by the favorite's own handle, never by item id
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// List the wallet's favorites within `scope`.
    async fn list(&self, wallet: &WalletAddress, scope: &FavoriteScope) -> Result<Vec<Favorite>>;

    /// Create a favorite and return the stored record.
    async fn add(&self, wallet: &WalletAddress, favorite: &NewFavorite) -> Result<Favorite>;

    /// Delete a favorite by its handle.
    async fn remove(&self, wallet: &WalletAddress, id: &FavoriteId) -> Result<()>;

    /// Store name for logging/debugging.
    fn store_name(&self) -> &'static str;
}
